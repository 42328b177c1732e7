//! Attribution request and resolved attribution models
//!
//! Both structures are request-scoped: created fresh per upload, never
//! persisted, never shared across requests.

use serde::{Deserialize, Serialize};

use crate::models::geo::DmsCoordinate;

/// Caller-supplied attribution values; every field is optional.
///
/// Coordinates and the timestamp arrive as raw strings (the caller binds
/// them straight from form fields) and are parsed and validated inside the
/// pipeline so malformed values surface as `InvalidInput`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributionRequest {
    #[serde(default)]
    pub camera_make: Option<String>,
    #[serde(default)]
    pub camera_model: Option<String>,
    /// Expected in `YYYY-MM-DDTHH:MM` form (HTML datetime-local)
    #[serde(default)]
    pub date_taken: Option<String>,
    /// Decimal degrees in [-90, 90]
    #[serde(default)]
    pub latitude: Option<String>,
    /// Decimal degrees in [-180, 180]
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Fully-resolved attribution, ready for EXIF serialization
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAttribution {
    pub camera_make: String,
    pub camera_model: String,
    /// Already formatted as `YYYY:MM:DD HH:MM:SS` (EXIF convention)
    pub timestamp: String,
    pub latitude: DmsCoordinate,
    pub longitude: DmsCoordinate,
}
