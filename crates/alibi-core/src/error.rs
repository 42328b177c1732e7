//! Error types module
//!
//! All pipeline failures are unified under the `AppError` enum. Every error
//! is terminal for the current request: the pipeline never retries and never
//! produces partial output. The calling layer maps errors to user-facing
//! responses via the `ErrorMetadata` trait.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_INPUT")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (the caller can correct and resend)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A caller-supplied attribution field was malformed or out of range.
    /// The message names the offending field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The uploaded bytes could not be decoded as an image.
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    /// Internal failure while producing the output byte stream.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Static metadata for each variant: (http_status, error_code, recoverable,
/// suggested_action, log_level). client_message stays per-variant for
/// dynamic content.
fn app_error_static_metadata(
    err: &AppError,
) -> (u16, &'static str, bool, Option<&'static str>, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (
            400,
            "INVALID_INPUT",
            true,
            Some("Check request parameters and try again"),
            LogLevel::Debug,
        ),
        AppError::UnsupportedImage(_) => (
            415,
            "UNSUPPORTED_IMAGE",
            true,
            Some("Upload a decodable image file"),
            LogLevel::Debug,
        ),
        AppError::Encoding(_) => (
            500,
            "ENCODING_ERROR",
            false,
            Some("Contact support if this error persists"),
            LogLevel::Error,
        ),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::UnsupportedImage(ref msg) => msg.clone(),
            AppError::Encoding(_) => "Failed to encode output image".to_string(),
        }
    }
}
