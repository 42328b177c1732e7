//! The end-to-end attribution pipeline
//!
//! `process` is the single boundary with the calling layer: raw image bytes
//! and an `AttributionRequest` in, a finished JPEG byte stream out. Either a
//! complete output is produced or an error propagates - no partial writes,
//! no internal retries.

use std::io::Cursor;

use alibi_core::config::ProcessorConfig;
use alibi_core::error::AppError;
use alibi_core::models::AttributionRequest;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::ImageReader;
use rand::Rng;

use crate::exif;
use crate::jitter::{ImageJitter, TransformPlan};
use crate::resolve::resolve_attribution;

pub struct AttributionPipeline {
    jpeg_quality: u8,
}

impl AttributionPipeline {
    pub fn new(config: &ProcessorConfig) -> Self {
        Self {
            jpeg_quality: config.jpeg_quality,
        }
    }

    /// Process one upload with the ambient (thread-local) random source.
    ///
    /// Concurrent callers are independent; no mutable state is shared
    /// between invocations.
    pub fn process(&self, data: &[u8], request: &AttributionRequest) -> Result<Bytes, AppError> {
        self.process_with_rng(data, request, &mut rand::rng())
    }

    /// Process one upload with an injected random source (deterministic
    /// in tests)
    pub fn process_with_rng<R: Rng + ?Sized>(
        &self,
        data: &[u8],
        request: &AttributionRequest,
        rng: &mut R,
    ) -> Result<Bytes, AppError> {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| AppError::UnsupportedImage(format!("could not probe image format: {e}")))?
            .decode()
            .map_err(|e| AppError::UnsupportedImage(format!("could not decode image: {e}")))?;

        let plan = TransformPlan::sample(rng);
        tracing::debug!(?plan, "applying cosmetic jitter");
        let transformed = ImageJitter::apply(img, &plan);

        let attribution = resolve_attribution(request, rng)?;
        tracing::debug!(
            make = %attribution.camera_make,
            model = %attribution.camera_model,
            timestamp = %attribution.timestamp,
            "resolved attribution"
        );

        let exif_payload = exif::encode_attribution(&attribution)?;

        // JPEG carries no alpha channel
        let rgb = transformed.to_rgb8();
        let mut encoded = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut encoded, self.jpeg_quality);
        encoder
            .encode_image(&rgb)
            .map_err(|e| AppError::Encoding(format!("failed to encode output JPEG: {e}")))?;

        exif::embed_in_jpeg(encoded, exif_payload)
    }
}

impl Default for AttributionPipeline {
    fn default() -> Self {
        Self::new(&ProcessorConfig::default())
    }
}
