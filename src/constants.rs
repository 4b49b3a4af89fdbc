pub const DEFAULT_QUALITY: i32 = 80;
pub const MIN_QUALITY: i32 = 1;
pub const MAX_QUALITY: i32 = 100;

/// libwebp `method`: 0 is fastest, 6 spends the most effort on smaller output.
pub const MAX_EFFORT: u8 = 6;

pub const WEBP_EXTENSION: &str = "webp";
pub const ELIGIBLE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const BYTES_PER_KIB: f64 = 1024.0;
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

// Common output message prefixes
pub const START_PREFIX: &str = "🚀";
pub const SUMMARY_PREFIX: &str = "📊";
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const VERBOSE_PREFIX: &str = "🔍";
