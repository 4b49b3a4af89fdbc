use crate::codec::{Codec, EncodeSettings, LibWebpCodec};
use crate::constants::{SUCCESS_PREFIX, WARNING_PREFIX};
use crate::error::{ConvertError, Result};
use crate::formats::{numbered_output_path, webp_output_path, SourceFormat};
use crate::options::{ConvertOptions, ExistingOutput};
use crate::stats::conversion_report_lines;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// The `.webp` file, or the source itself when the candidate was discarded.
    pub output_path: PathBuf,
    pub original_size: u64,
    pub new_size: u64,
    pub kept: bool,
}

/// Converts one image to a sibling `.webp` file.
///
/// With `options.compare_size` set, a WebP that turns out larger than the source is
/// discarded and the source path is reported back with `kept == false`.
/// Without it the WebP is always kept.
///
/// # Errors
/// * `ConvertError::Io` - the source cannot be read or the output cannot be written
/// * `ConvertError::Image` / `ConvertError::Codec` - decoding or encoding failed
/// * `ConvertError::OutputExists` - the destination is taken and the policy is `Fail`
pub fn convert_file<C: Codec + ?Sized>(
    codec: &C,
    source: &Path,
    options: &ConvertOptions,
) -> Result<ConversionResult> {
    let result = try_convert_file(codec, source, options);
    if let Err(e) = &result {
        tracing::error!(path = %source.display(), error = %e, "Error converting image");
    }
    result
}

/// Converts with libwebp and default settings; returns the resulting path.
pub fn convert_image_to_webp(source: &Path, quality: i32, compare_size: bool) -> Result<PathBuf> {
    let options = ConvertOptions {
        compare_size,
        ..ConvertOptions::with_quality(quality)
    };
    convert_file(&LibWebpCodec, source, &options).map(|r| r.output_path)
}

fn try_convert_file<C: Codec + ?Sized>(
    codec: &C,
    source: &Path,
    options: &ConvertOptions,
) -> Result<ConversionResult> {
    let metadata = fs::metadata(source).map_err(|e| ConvertError::io(source, e))?;
    let original_size = metadata.len();

    let destination = resolve_destination(source, options.on_existing)?;
    if let Some(format) = SourceFormat::from_path(source) {
        crate::verbose!("Converting {} image {}", format, source.display());
    }

    let bytes = codec.encode(
        source,
        EncodeSettings {
            quality: options.quality,
            effort: options.effort,
        },
    )?;
    let new_size = bytes.len() as u64;

    crate::info!(
        "{} Successful conversion: {} → {}",
        SUCCESS_PREFIX,
        source.display(),
        destination.display()
    );

    if options.compare_size {
        for line in conversion_report_lines(original_size, new_size) {
            crate::info!("{}", line);
        }

        if new_size > original_size {
            crate::info!(
                "  {} WebP file is larger than the original, conversion canceled.",
                WARNING_PREFIX
            );
            tracing::debug!(
                path = %source.display(),
                original_size,
                new_size,
                "discarding larger WebP candidate"
            );
            return Ok(ConversionResult {
                output_path: source.to_path_buf(),
                original_size,
                new_size,
                kept: false,
            });
        }
    }

    write_output(
        &destination,
        &bytes,
        metadata.permissions(),
        options.on_existing == ExistingOutput::Overwrite,
    )?;

    Ok(ConversionResult {
        output_path: destination,
        original_size,
        new_size,
        kept: true,
    })
}

/// Picks the path the WebP will be written to under the given policy.
pub fn resolve_destination(source: &Path, policy: ExistingOutput) -> Result<PathBuf> {
    let candidate = webp_output_path(source);
    let clashes_with_source = candidate == source;

    match policy {
        ExistingOutput::Overwrite if !clashes_with_source => Ok(candidate),
        ExistingOutput::Overwrite | ExistingOutput::Fail => {
            if clashes_with_source || candidate.exists() {
                Err(ConvertError::OutputExists(candidate))
            } else {
                Ok(candidate)
            }
        }
        ExistingOutput::Rename => {
            if !clashes_with_source && !candidate.exists() {
                return Ok(candidate);
            }
            (1..=u32::MAX)
                .map(|n| numbered_output_path(source, n))
                .find(|path| !path.exists())
                .ok_or(ConvertError::OutputExists(candidate))
        }
    }
}

// Writes through a temp file in the destination directory, so an
// interrupted run never leaves a truncated `.webp` behind.
fn write_output(
    destination: &Path,
    bytes: &[u8],
    permissions: fs::Permissions,
    overwrite: bool,
) -> Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".webp-squeeze-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ConvertError::io(dir, e))?;
    temp.write_all(bytes)
        .map_err(|e| ConvertError::io(temp.path(), e))?;
    fs::set_permissions(temp.path(), permissions)
        .map_err(|e| ConvertError::io(temp.path(), e))?;

    let persisted = if overwrite {
        temp.persist(destination)
    } else {
        temp.persist_noclobber(destination)
    };
    persisted.map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            ConvertError::OutputExists(destination.to_path_buf())
        } else {
            ConvertError::io(destination, e.error)
        }
    })?;

    Ok(())
}
