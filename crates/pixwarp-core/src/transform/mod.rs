//! Affine transformation operations: translate, rotate, scale, and shear.
//!
//! All four operations are pure: they never mutate their input and always
//! allocate a fresh output buffer.
//!
//! # Canvas Policy
//!
//! - Translate, rotate, and shear keep the input canvas size; content mapped
//!   off-canvas is clipped and exposed regions are filled with black.
//! - Scale is the one operation that resizes the canvas, to
//!   `round(width * fx)` by `round(height * fy)`.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y pointing down
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Rotation is about the integer-division center `(width / 2, height / 2)`

mod rotate;
mod scale;
mod shear;
mod translate;
mod warp;

pub use rotate::rotate;
pub use scale::scale;
pub use shear::{shear, ShearAxis};
pub use translate::translate;

use crate::buffer::{ImageBuffer, TransformError};
use crate::TransformSettings;

/// The four transformed variants of one source image.
#[derive(Debug, Clone)]
pub struct TransformSet {
    /// Result of the translation.
    pub translated: ImageBuffer,
    /// Result of the rotation.
    pub rotated: ImageBuffer,
    /// Result of the scaling.
    pub scaled: ImageBuffer,
    /// Result of the shear.
    pub sheared: ImageBuffer,
}

/// Apply all four transforms to one image with the bundled parameters.
///
/// This is the before/after showcase flow: the caller displays the original
/// alongside the four returned variants.
///
/// # Errors
///
/// Fails with the first error any individual transform produces, typically
/// an invalid scale factor or an inconsistent input buffer.
pub fn apply_preset(
    image: &ImageBuffer,
    settings: &TransformSettings,
) -> Result<TransformSet, TransformError> {
    Ok(TransformSet {
        translated: translate(image, settings.translate_x, settings.translate_y)?,
        rotated: rotate(image, settings.rotate_degrees)?,
        scaled: scale(image, settings.scale_x, settings.scale_y)?,
        sheared: shear(image, settings.shear_factor, settings.shear_axis)?,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::PixelFormat;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=48, 1u32..=48)
    }

    fn format_strategy() -> impl Strategy<Value = PixelFormat> {
        prop_oneof![
            Just(PixelFormat::Gray),
            Just(PixelFormat::Rgb),
            Just(PixelFormat::Rgba),
        ]
    }

    /// Create a test image with position-derived pixel values.
    fn create_test_image(width: u32, height: u32, format: PixelFormat) -> ImageBuffer {
        let channels = format.channels();
        let mut pixels = Vec::with_capacity(width as usize * height as usize * channels);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    pixels.push((((y * width + x) as usize * 3 + c * 11) % 256) as u8);
                }
            }
        }
        ImageBuffer::new(width, height, format, pixels).unwrap()
    }

    proptest! {
        /// Property: translate, rotate, and shear never change the canvas.
        #[test]
        fn prop_canvas_preserved(
            (width, height) in dimensions_strategy(),
            format in format_strategy(),
            tx in -200.0f64..=200.0,
            ty in -200.0f64..=200.0,
            angle in -720.0f64..=720.0,
            factor in -2.0f64..=2.0,
        ) {
            let img = create_test_image(width, height, format);

            for result in [
                translate(&img, tx, ty).unwrap(),
                rotate(&img, angle).unwrap(),
                shear(&img, factor, ShearAxis::X).unwrap(),
                shear(&img, factor, ShearAxis::Y).unwrap(),
            ] {
                prop_assert_eq!(result.width, width);
                prop_assert_eq!(result.height, height);
                prop_assert_eq!(result.format, format);
                prop_assert_eq!(result.pixels.len(), img.pixels.len());
            }
        }

        /// Property: scaled dimensions follow round(size * factor).
        #[test]
        fn prop_scale_dimension_law(
            (width, height) in dimensions_strategy(),
            fx in 0.1f64..=3.0,
            fy in 0.1f64..=3.0,
        ) {
            let img = create_test_image(width, height, PixelFormat::Rgb);
            let result = scale(&img, fx, fy).unwrap();

            let expected_w = ((width as f64 * fx).round() as u32).max(1);
            let expected_h = ((height as f64 * fy).round() as u32).max(1);
            prop_assert_eq!(result.width, expected_w);
            prop_assert_eq!(result.height, expected_h);
            prop_assert_eq!(result.pixels.len(), (expected_w * expected_h * 3) as usize);
        }

        /// Property: identity parameters reproduce the input exactly.
        #[test]
        fn prop_identity_transforms(
            (width, height) in dimensions_strategy(),
            format in format_strategy(),
        ) {
            let img = create_test_image(width, height, format);

            prop_assert_eq!(translate(&img, 0.0, 0.0).unwrap(), img.clone());
            prop_assert_eq!(rotate(&img, 0.0).unwrap(), img.clone());
            prop_assert_eq!(scale(&img, 1.0, 1.0).unwrap(), img.clone());
            prop_assert_eq!(shear(&img, 0.0, ShearAxis::X).unwrap(), img.clone());
            prop_assert_eq!(shear(&img, 0.0, ShearAxis::Y).unwrap(), img);
        }

        /// Property: transforms are deterministic.
        #[test]
        fn prop_transforms_deterministic(
            (width, height) in dimensions_strategy(),
            angle in -360.0f64..=360.0,
            factor in -1.0f64..=1.0,
        ) {
            let img = create_test_image(width, height, PixelFormat::Rgb);

            prop_assert_eq!(rotate(&img, angle).unwrap(), rotate(&img, angle).unwrap());
            prop_assert_eq!(
                shear(&img, factor, ShearAxis::Y).unwrap(),
                shear(&img, factor, ShearAxis::Y).unwrap()
            );
        }

        /// Property: integer translations move pixels without interpolation.
        #[test]
        fn prop_integer_translation_exact(
            (width, height) in (4u32..=32, 4u32..=32),
            tx in 0u32..=3,
            ty in 0u32..=3,
        ) {
            let img = create_test_image(width, height, PixelFormat::Gray);
            let result = translate(&img, tx as f64, ty as f64).unwrap();

            for y in ty..height {
                for x in tx..width {
                    let dst = result.pixel_index(x, y);
                    let src = img.pixel_index(x - tx, y - ty);
                    prop_assert_eq!(result.pixels[dst], img.pixels[src]);
                }
            }
        }

        /// Property: non-positive scale factors always fail.
        #[test]
        fn prop_non_positive_scale_rejected(
            (width, height) in dimensions_strategy(),
            factor in -3.0f64..=0.0,
        ) {
            let img = create_test_image(width, height, PixelFormat::Rgb);
            prop_assert!(scale(&img, factor, 1.0).is_err());
            prop_assert!(scale(&img, 1.0, factor).is_err());
        }
    }
}
