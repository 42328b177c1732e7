//! Domain models

pub mod attribution;
pub mod camera;
pub mod geo;

pub use attribution::{AttributionRequest, ResolvedAttribution};
pub use camera::{models_for, CameraLine, CAMERA_CATALOG};
pub use geo::{DmsCoordinate, Hemisphere};
