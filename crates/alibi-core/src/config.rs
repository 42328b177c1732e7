//! Configuration module
//!
//! Environment-driven settings for the processing pipeline.

use std::env;

const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Processing pipeline configuration
#[derive(Clone, Debug)]
pub struct ProcessorConfig {
    /// Quality of the re-encoded output JPEG (1-100)
    pub jpeg_quality: u8,
}

impl ProcessorConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_raw(env::var("ALIBI_JPEG_QUALITY").ok().as_deref())
    }

    fn from_raw(jpeg_quality: Option<&str>) -> Result<Self, anyhow::Error> {
        let jpeg_quality = match jpeg_quality {
            Some(raw) => {
                let quality: u8 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("ALIBI_JPEG_QUALITY must be an integer: {raw}"))?;
                anyhow::ensure!(
                    (1..=100).contains(&quality),
                    "ALIBI_JPEG_QUALITY must be in 1-100, got {quality}"
                );
                quality
            }
            None => DEFAULT_JPEG_QUALITY,
        };

        Ok(Self { jpeg_quality })
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quality() {
        let config = ProcessorConfig::from_raw(None).unwrap();
        assert_eq!(config.jpeg_quality, 75);
    }

    #[test]
    fn test_explicit_quality() {
        let config = ProcessorConfig::from_raw(Some("90")).unwrap();
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_rejects_non_numeric_quality() {
        assert!(ProcessorConfig::from_raw(Some("high")).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_quality() {
        assert!(ProcessorConfig::from_raw(Some("0")).is_err());
        assert!(ProcessorConfig::from_raw(Some("101")).is_err());
    }
}
