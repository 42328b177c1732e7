//! Cosmetic image jitter - the transform engine
//!
//! Applies a fixed sequence of bounded-random adjustments to a decoded
//! image: rotation, contrast, brightness, saturation, sharpness. Each step's
//! parameter is an independent uniform draw; a factor of 1.0 (or 0 degrees)
//! is a no-op. The random source is injected through `TransformPlan::sample`
//! so tests can substitute a seeded generator.

use std::ops::RangeInclusive;

use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use rand::Rng;

/// Rotation angle bounds, in degrees
pub const ROTATION_DEGREES: RangeInclusive<f32> = -10.0..=10.0;
/// Contrast scale factor bounds
pub const CONTRAST_FACTOR: RangeInclusive<f32> = 0.8..=1.2;
/// Brightness scale factor bounds
pub const BRIGHTNESS_FACTOR: RangeInclusive<f32> = 0.8..=1.2;
/// Saturation scale factor bounds
pub const SATURATION_FACTOR: RangeInclusive<f32> = 0.9..=1.1;
/// Sharpness scale factor bounds
pub const SHARPNESS_FACTOR: RangeInclusive<f32> = 0.9..=1.1;

/// One sampled set of jitter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPlan {
    pub rotation_degrees: f32,
    pub contrast: f32,
    pub brightness: f32,
    pub saturation: f32,
    pub sharpness: f32,
}

impl TransformPlan {
    /// Draw a plan from the given random source. Each parameter is an
    /// independent uniform draw from its bounded range.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            rotation_degrees: rng.random_range(ROTATION_DEGREES),
            contrast: rng.random_range(CONTRAST_FACTOR),
            brightness: rng.random_range(BRIGHTNESS_FACTOR),
            saturation: rng.random_range(SATURATION_FACTOR),
            sharpness: rng.random_range(SHARPNESS_FACTOR),
        }
    }
}

pub struct ImageJitter;

impl ImageJitter {
    /// Apply all plan steps in fixed order: rotate, contrast, brightness,
    /// saturation, sharpness.
    ///
    /// The image is converted to RGBA8 up front, so inputs in other color
    /// modes degrade to a mode conversion rather than a failure. Rotation
    /// keeps the original canvas (corners are cropped, gaps filled black).
    pub fn apply(img: DynamicImage, plan: &TransformPlan) -> DynamicImage {
        let mut result = img.to_rgba8();

        result = Self::rotate(&result, plan.rotation_degrees);
        result = Self::scale_contrast(&result, plan.contrast);
        result = Self::scale_brightness(&result, plan.brightness);
        result = Self::scale_saturation(&result, plan.saturation);
        result = Self::scale_sharpness(&result, plan.sharpness);

        DynamicImage::ImageRgba8(result)
    }

    /// Rotate about the image center by an arbitrary angle, preserving
    /// canvas dimensions
    pub fn rotate(img: &RgbaImage, degrees: f32) -> RgbaImage {
        rotate_about_center(
            img,
            degrees.to_radians(),
            Interpolation::Bilinear,
            Rgba([0, 0, 0, 255]),
        )
    }

    /// Scale contrast around the mid-gray point (factor 1.0 is a no-op)
    pub fn scale_contrast(img: &RgbaImage, factor: f32) -> RgbaImage {
        let intercept = 128.0 * (1.0 - factor);
        Self::map_channels(img, |v| v * factor + intercept)
    }

    /// Scale brightness (factor 1.0 is a no-op)
    pub fn scale_brightness(img: &RgbaImage, factor: f32) -> RgbaImage {
        Self::map_channels(img, |v| v * factor)
    }

    /// Scale color saturation by interpolating each pixel against its
    /// luminance (factor 0.0 is grayscale, 1.0 is a no-op)
    pub fn scale_saturation(img: &RgbaImage, factor: f32) -> RgbaImage {
        let (width, height) = img.dimensions();
        let mut adjusted = RgbaImage::new(width, height);

        for (x, y, pixel) in img.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *pixel;
            let gray = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;

            let new_r = (gray + (r as f32 - gray) * factor).clamp(0.0, 255.0).round() as u8;
            let new_g = (gray + (g as f32 - gray) * factor).clamp(0.0, 255.0).round() as u8;
            let new_b = (gray + (b as f32 - gray) * factor).clamp(0.0, 255.0).round() as u8;

            adjusted.put_pixel(x, y, Rgba([new_r, new_g, new_b, a]));
        }

        adjusted
    }

    /// Scale sharpness with a 3x3 kernel: factor above 1.0 sharpens, below
    /// 1.0 softens, 1.0 is the identity kernel
    pub fn scale_sharpness(img: &RgbaImage, factor: f32) -> RgbaImage {
        let (width, height) = img.dimensions();
        let mut adjusted = RgbaImage::new(width, height);

        // Kernel weights sum to 1.0 for any intensity
        let intensity = factor - 1.0;
        let kernel_center = 1.0 + intensity * 8.0;
        let kernel_edge = -intensity;

        for y in 0..height {
            for x in 0..width {
                let mut r = 0.0f32;
                let mut g = 0.0f32;
                let mut b = 0.0f32;
                let mut a = 0u8;

                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let nx = (x as i32 + dx).clamp(0, width as i32 - 1) as u32;
                        let ny = (y as i32 + dy).clamp(0, height as i32 - 1) as u32;

                        let pixel = img.get_pixel(nx, ny);
                        let weight = if dx == 0 && dy == 0 {
                            kernel_center
                        } else {
                            kernel_edge
                        };

                        r += pixel[0] as f32 * weight;
                        g += pixel[1] as f32 * weight;
                        b += pixel[2] as f32 * weight;
                        if dx == 0 && dy == 0 {
                            a = pixel[3];
                        }
                    }
                }

                adjusted.put_pixel(
                    x,
                    y,
                    Rgba([
                        r.clamp(0.0, 255.0).round() as u8,
                        g.clamp(0.0, 255.0).round() as u8,
                        b.clamp(0.0, 255.0).round() as u8,
                        a,
                    ]),
                );
            }
        }

        adjusted
    }

    fn map_channels<F: Fn(f32) -> f32>(img: &RgbaImage, f: F) -> RgbaImage {
        let (width, height) = img.dimensions();
        let mut adjusted = RgbaImage::new(width, height);

        for (x, y, pixel) in img.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *pixel;
            adjusted.put_pixel(
                x,
                y,
                Rgba([
                    f(r as f32).clamp(0.0, 255.0).round() as u8,
                    f(g as f32).clamp(0.0, 255.0).round() as u8,
                    f(b as f32).clamp(0.0, 255.0).round() as u8,
                    a,
                ]),
            );
        }

        adjusted
    }
}
