use crate::constants::DEFAULT_QUALITY;
use crate::options::{ConvertOptions, ExistingOutput, SummaryMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webp-squeeze",
    about = "WebP Image Optimizer - Convert images to WebP format with optimized size",
    long_about = "webp-squeeze converts JPEG and PNG images to WebP, writing each result next to \
                  its source as <name>.webp. Directories are processed recursively and a size \
                  summary is printed for every directory that had images to convert.\n\n\
                  An existing <name>.webp is never replaced by default: the run stops with an \
                  error, so converting the same directory twice fails on the second run. Pass \
                  --on-existing overwrite to replace earlier results or --on-existing rename \
                  to keep both.",
    version,
    after_help = "EXAMPLES:\n  \
    webp-squeeze ./images\n  \
    webp-squeeze ./images 60\n  \
    webp-squeeze ./logo.png 90\n  \
    webp-squeeze ./images 75 false\n  \
    webp-squeeze ./images 80 true --summary tree --on-existing overwrite"
)]
pub struct Args {
    #[arg(help = "Path to an image file or a directory")]
    pub path: Option<PathBuf>,

    #[arg(
        allow_negative_numbers = true,
        help = "Quality (1-100, default 80)",
        long_help = "WebP quality from 1 (smallest) to 100 (best). \
                     Anything that does not start with a number falls back to 80."
    )]
    pub quality: Option<String>,

    #[arg(
        help = "Process subdirectories (true/false, default true)",
        long_help = "Only the literal value 'false' disables recursion."
    )]
    pub recursive: Option<String>,

    /// Anything after the recursion flag is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = SummaryMode::PerDirectory,
        help = "How directory statistics are reported"
    )]
    pub summary: SummaryMode,

    #[arg(
        long,
        value_enum,
        default_value_t = ExistingOutput::Fail,
        help = "What to do when the .webp file already exists"
    )]
    pub on_existing: ExistingOutput,

    #[arg(
        long,
        help = "Keep the WebP even when it is larger than the source (single file only)"
    )]
    pub no_compare: bool,

    #[arg(short, long, help = "Print debug diagnostics")]
    pub verbose: bool,

    #[arg(long, help = "Only print warnings and errors")]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions {
            quality: parse_quality(self.quality.as_deref()),
            recursive: parse_recursive(self.recursive.as_deref()),
            compare_size: !self.no_compare,
            summary: self.summary,
            on_existing: self.on_existing,
            ..ConvertOptions::default()
        }
    }
}

/// Lenient quality parsing: a leading integer is used as-is, anything
/// else (or zero) falls back to the default.
///
/// `"75"` → 75, `"60%"` → 60, `"abc"` → 80, `"0"` → 80, `"-5"` → -5.
pub fn parse_quality(raw: Option<&str>) -> i32 {
    raw.and_then(parse_leading_int)
        .filter(|&quality| quality != 0)
        .unwrap_or(DEFAULT_QUALITY)
}

/// Only the literal `"false"` turns recursion off.
pub fn parse_recursive(raw: Option<&str>) -> bool {
    raw != Some("false")
}

fn parse_leading_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1i64, &trimmed[1..]),
        Some(b'+') => (1i64, &trimmed[1..]),
        _ => (1i64, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Too many digits saturates instead of failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    let value = (sign * magnitude).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    Some(value as i32)
}
