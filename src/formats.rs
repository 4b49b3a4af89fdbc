/// Source format detection and output naming
///
/// Only JPEG and PNG sources are converted; everything else is skipped
/// without error. Matching is done on the extension, case-insensitively.
use crate::constants::{ELIGIBLE_EXTENSIONS, WEBP_EXTENSION};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Image formats accepted as conversion input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

/// Check whether a path has one of the convertible extensions
pub fn is_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ELIGIBLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// `<dir>/<stem>.webp`, next to the source file
pub fn webp_output_path(source: &Path) -> PathBuf {
    source.with_extension(WEBP_EXTENSION)
}

/// `<dir>/<stem>-<n>.webp`, used when the plain name is taken
pub fn numbered_output_path(source: &Path, n: u32) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = source.file_stem() {
        name.push(stem);
    }
    name.push(format!("-{}.{}", n, WEBP_EXTENSION));
    source.with_file_name(name)
}
