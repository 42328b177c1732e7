//! Alibi Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! input validation shared by the attribution pipeline components.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{AttributionRequest, DmsCoordinate, Hemisphere, ResolvedAttribution};
