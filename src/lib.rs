pub mod app;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod convert;
pub mod error;
pub mod formats;
pub mod logger;
pub mod options;
pub mod stats;
pub mod walker;

pub use app::{run, Outcome};
pub use codec::{Codec, EncodeSettings, LibWebpCodec};
pub use convert::{convert_file, convert_image_to_webp, resolve_destination, ConversionResult};
pub use error::{ConvertError, Result};
pub use formats::{is_eligible, webp_output_path, SourceFormat};
pub use options::{ConvertOptions, ExistingOutput, SummaryMode};
pub use stats::{calculate_reduction, format_reduction, DirectorySummary, DirectoryTotals};
pub use walker::{convert_directory_images, walk_directory, WalkReport};
