use crate::codec::Codec;
use crate::constants::{START_PREFIX, SUCCESS_PREFIX};
use crate::convert::{convert_file, ConversionResult};
use crate::error::{ConvertError, Result};
use crate::formats::is_eligible;
use crate::options::ConvertOptions;
use crate::walker::{walk_directory, WalkReport};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What a top-level invocation ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    File(ConversionResult),
    Directory(WalkReport),
    /// A file that is not a JPEG/PNG, or something that is neither file nor directory.
    Skipped,
}

/// Entry point behind the CLI: dispatches on what `path` is.
///
/// A single file is converted with `options.compare_size`; a directory is
/// walked. Errors are logged here with the top-level path and returned.
pub fn run<C: Codec + ?Sized>(codec: &C, path: &Path, options: &ConvertOptions) -> Result<Outcome> {
    crate::info!(
        "{} Starting conversion with quality {}%...",
        START_PREFIX,
        options.quality
    );

    let result = dispatch(codec, path, options);
    match &result {
        Ok(_) => crate::info!("{} Conversion process completed.", SUCCESS_PREFIX),
        Err(e) => tracing::error!(path = %path.display(), error = %e, "Conversion aborted"),
    }
    result
}

fn dispatch<C: Codec + ?Sized>(codec: &C, path: &Path, options: &ConvertOptions) -> Result<Outcome> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::FileNotFound(path.to_path_buf()),
        _ => ConvertError::io(path, e),
    })?;

    if metadata.is_dir() {
        tracing::debug!(path = %path.display(), recursive = options.recursive, "walking directory");
        return walk_directory(codec, path, options).map(Outcome::Directory);
    }

    if metadata.is_file() {
        if is_eligible(path) {
            return convert_file(codec, path, options).map(Outcome::File);
        }
        crate::info!("Selected file is not a JPG or PNG image.");
    }

    Ok(Outcome::Skipped)
}
