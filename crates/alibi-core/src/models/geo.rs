//! Sexagesimal (degrees/minutes/seconds) coordinate representation
//!
//! EXIF GPS tags carry coordinates as three rational values plus a one
//! character hemisphere reference. The decomposition here truncates the
//! fractional minutes and seconds rather than rounding, so reconstruction is
//! biased low by strictly less than one arc-second.

use serde::Serialize;

/// Hemisphere reference for a GPS coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// The single-character reference string written to the EXIF GPS IFD
    pub fn exif_ref(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }
}

/// A decimal coordinate decomposed into whole degrees, minutes, and seconds
/// over its magnitude, with the sign carried by the hemisphere reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DmsCoordinate {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: Hemisphere,
}

impl DmsCoordinate {
    /// Decompose a latitude in decimal degrees. Expects a value in [-90, 90].
    pub fn latitude(decimal_degrees: f64) -> Self {
        Self::decompose(decimal_degrees, Hemisphere::North, Hemisphere::South)
    }

    /// Decompose a longitude in decimal degrees. Expects a value in [-180, 180].
    pub fn longitude(decimal_degrees: f64) -> Self {
        Self::decompose(decimal_degrees, Hemisphere::East, Hemisphere::West)
    }

    fn decompose(decimal_degrees: f64, positive: Hemisphere, negative: Hemisphere) -> Self {
        let hemisphere = if decimal_degrees >= 0.0 {
            positive
        } else {
            negative
        };

        let magnitude = decimal_degrees.abs();
        let degrees = magnitude.trunc();
        let total_minutes = (magnitude - degrees) * 60.0;
        let minutes = total_minutes.trunc();
        // Truncating cast, not rounding
        let seconds = (total_minutes - minutes) * 60.0;

        Self {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            hemisphere,
        }
    }

    /// Reconstruct the magnitude in decimal degrees
    pub fn to_decimal_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }
}
