//! Attribution field validation
//!
//! Strict parsers for the caller-supplied timestamp and coordinate strings.
//! Every failure names the offending field so the calling layer can surface
//! it directly.

use chrono::NaiveDateTime;

use crate::error::AppError;

/// Input timestamp convention (HTML datetime-local, minute precision)
pub const DATE_TAKEN_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Output timestamp convention (EXIF DateTimeOriginal, colon separators)
pub const EXIF_TIMESTAMP_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Parse a caller-supplied `date_taken` value, strictly in
/// `YYYY-MM-DDTHH:MM` form.
pub fn parse_date_taken(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw, DATE_TAKEN_FORMAT).map_err(|_| {
        AppError::InvalidInput(format!(
            "date_taken must match YYYY-MM-DDTHH:MM, got \"{raw}\""
        ))
    })
}

/// Format a timestamp in the EXIF `YYYY:MM:DD HH:MM:SS` convention
pub fn format_exif_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(EXIF_TIMESTAMP_FORMAT).to_string()
}

/// Parse a caller-supplied latitude in decimal degrees, in [-90, 90]
pub fn parse_latitude(raw: &str) -> Result<f64, AppError> {
    parse_coordinate(raw, "latitude", 90.0)
}

/// Parse a caller-supplied longitude in decimal degrees, in [-180, 180]
pub fn parse_longitude(raw: &str) -> Result<f64, AppError> {
    parse_coordinate(raw, "longitude", 180.0)
}

fn parse_coordinate(raw: &str, field: &str, bound: f64) -> Result<f64, AppError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        AppError::InvalidInput(format!("{field} must be a decimal number, got \"{raw}\""))
    })?;

    if !value.is_finite() || value.abs() > bound {
        return Err(AppError::InvalidInput(format!(
            "{field} must be in [-{bound}, {bound}], got {raw}"
        )));
    }

    Ok(value)
}
