use crate::constants::{DEFAULT_QUALITY, MAX_EFFORT};
use clap::ValueEnum;

/// How directory statistics are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryMode {
    /// Every directory prints its own totals once its subtree is done.
    /// Totals are never folded into the parent.
    #[default]
    PerDirectory,
    /// One summary for the whole tree, printed at the end.
    Tree,
}

/// What to do when `<stem>.webp` already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExistingOutput {
    /// Abort with an error and leave the existing file alone.
    #[default]
    Fail,
    /// Write to the first free `<stem>-N.webp` instead.
    Rename,
    /// Replace the existing file.
    Overwrite,
}

/// Settings threaded from the entry point through every conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Passed to the codec as-is; the codec rejects values outside 1..=100.
    pub quality: i32,
    pub recursive: bool,
    /// Single-file mode only: discard the WebP when it is larger than the source.
    pub compare_size: bool,
    pub summary: SummaryMode,
    pub on_existing: ExistingOutput,
    pub effort: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            recursive: true,
            compare_size: true,
            summary: SummaryMode::default(),
            on_existing: ExistingOutput::default(),
            effort: MAX_EFFORT,
        }
    }
}

impl ConvertOptions {
    pub fn with_quality(quality: i32) -> Self {
        Self {
            quality,
            ..Self::default()
        }
    }
}
