//! Attribution resolution
//!
//! Turns a partially-specified `AttributionRequest` into a fully-populated
//! `ResolvedAttribution`. Caller-supplied values win; anything missing is
//! defaulted - camera from the catalog, timestamp from the wall clock,
//! coordinates drawn uniformly from the valid ranges.

use alibi_core::error::AppError;
use alibi_core::models::{camera, AttributionRequest, DmsCoordinate, ResolvedAttribution};
use alibi_core::validation::{
    format_exif_timestamp, parse_date_taken, parse_latitude, parse_longitude,
};
use chrono::Local;
use rand::Rng;

/// Resolve every attribution field, validating supplied values and
/// defaulting absent ones from the given random source.
pub fn resolve_attribution<R: Rng + ?Sized>(
    request: &AttributionRequest,
    rng: &mut R,
) -> Result<ResolvedAttribution, AppError> {
    let (camera_make, camera_model) = resolve_camera(request, rng)?;

    let timestamp = match &request.date_taken {
        Some(raw) => format_exif_timestamp(parse_date_taken(raw)?),
        None => format_exif_timestamp(Local::now().naive_local()),
    };

    let latitude = match &request.latitude {
        Some(raw) => parse_latitude(raw)?,
        None => rng.random_range(-90.0..=90.0),
    };
    let longitude = match &request.longitude {
        Some(raw) => parse_longitude(raw)?,
        None => rng.random_range(-180.0..=180.0),
    };

    Ok(ResolvedAttribution {
        camera_make,
        camera_model,
        timestamp,
        latitude: DmsCoordinate::latitude(latitude),
        longitude: DmsCoordinate::longitude(longitude),
    })
}

/// Make/model selection rule:
///
/// - both supplied: passed through verbatim (an unknown make is accepted
///   here as a documented relaxation - the pairing invariant is skipped
///   because the caller chose both halves)
/// - make only: model drawn uniformly from that make's catalog set; an
///   unknown make is rejected since it has no set to draw from
/// - model only: make drawn uniformly from the catalog, supplied model kept
/// - neither: make drawn first, then a model from its set
fn resolve_camera<R: Rng + ?Sized>(
    request: &AttributionRequest,
    rng: &mut R,
) -> Result<(String, String), AppError> {
    match (&request.camera_make, &request.camera_model) {
        (Some(make), Some(model)) => Ok((make.clone(), model.clone())),
        (Some(make), None) => {
            let models = camera::models_for(make).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "camera_make \"{make}\" is not in the camera catalog \
                     and no camera_model was supplied"
                ))
            })?;
            let model = models[rng.random_range(0..models.len())];
            Ok((make.clone(), model.to_string()))
        }
        (None, supplied_model) => {
            let line = &camera::CAMERA_CATALOG[rng.random_range(0..camera::CAMERA_CATALOG.len())];
            let model = match supplied_model {
                Some(model) => model.clone(),
                None => line.models[rng.random_range(0..line.models.len())].to_string(),
            };
            Ok((line.make.to_string(), model))
        }
    }
}
