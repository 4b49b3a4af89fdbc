use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{ConvertError, Result};
use image::{GenericImageView, ImageReader};
use std::path::Path;

/// Encoder parameters handed to a [`Codec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub quality: i32,
    pub effort: u8,
}

/// Re-encodes an image file as WebP.
///
/// Implementations return the encoded bytes; writing them out is the
/// converter's job.
pub trait Codec {
    fn encode(&self, source: &Path, settings: EncodeSettings) -> Result<Vec<u8>>;
}

/// Decodes with `image`, encodes lossy WebP with libwebp.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibWebpCodec;

impl Codec for LibWebpCodec {
    fn encode(&self, source: &Path, settings: EncodeSettings) -> Result<Vec<u8>> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&settings.quality) {
            return Err(ConvertError::InvalidQuality(settings.quality));
        }

        // Sniff the content, a mislabelled PNG still decodes.
        let img = ImageReader::open(source)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ConvertError::io(source, e))?
            .decode()
            .map_err(|e| ConvertError::Image {
                path: source.to_path_buf(),
                source: e,
            })?;

        let (width, height) = img.dimensions();
        tracing::debug!(
            path = %source.display(),
            width,
            height,
            color = ?img.color(),
            quality = settings.quality,
            effort = settings.effort,
            "encoding WebP"
        );

        let mut config = webp::WebPConfig::new().map_err(|_| ConvertError::Codec {
            path: source.to_path_buf(),
            reason: "failed to initialise encoder config".to_string(),
        })?;
        config.lossless = 0;
        config.quality = settings.quality as f32;
        config.method = i32::from(settings.effort);

        let has_alpha = img.color().has_alpha();
        let pixels = if has_alpha {
            img.to_rgba8().into_raw()
        } else {
            img.to_rgb8().into_raw()
        };
        let encoder = if has_alpha {
            webp::Encoder::from_rgba(&pixels, width, height)
        } else {
            webp::Encoder::from_rgb(&pixels, width, height)
        };

        let encoded = encoder
            .encode_advanced(&config)
            .map_err(|e| ConvertError::Codec {
                path: source.to_path_buf(),
                reason: format!("{:?}", e),
            })?;

        Ok(encoded.to_vec())
    }
}
