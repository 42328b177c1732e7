//! Alibi Processing Library
//!
//! The two pipeline stages behind `AttributionPipeline::process`:
//!
//! 1. Transform engine - a fixed sequence of bounded-random cosmetic
//!    adjustments (rotation, contrast, brightness, saturation, sharpness)
//!    over the decoded image.
//! 2. Metadata synthesizer - resolves camera/timestamp/location attribution
//!    (caller values first, randomized defaults otherwise), serializes it
//!    into an EXIF block, and re-encodes the transformed image as a JPEG
//!    with the block embedded.
//!
//! Everything is synchronous and operates on in-memory buffers; staging to
//! disk is the caller's concern.

pub mod exif;
pub mod jitter;
pub mod pipeline;
pub mod resolve;

// Re-export commonly used types
pub use jitter::{ImageJitter, TransformPlan};
pub use pipeline::AttributionPipeline;
pub use resolve::resolve_attribution;
