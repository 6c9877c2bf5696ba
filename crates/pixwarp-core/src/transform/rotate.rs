//! Image rotation about the canvas center.

use crate::buffer::{ImageBuffer, TransformError};
use crate::matrix::AffineMatrix;
use crate::transform::warp::warp_fixed_canvas;

/// Rotate an image around its center point.
///
/// The center is `(width / 2, height / 2)` using integer division, matching
/// the nearest-pixel center convention for odd dimensions. A positive angle
/// rotates counter-clockwise. The output canvas keeps the input dimensions;
/// rotated content outside the canvas is clipped, and exposed corners are
/// filled with black.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise);
///   any real value is accepted, with periodicity handled by the trigonometry
///
/// # Returns
///
/// A new `ImageBuffer` with the same dimensions and format as the input.
///
/// # Errors
///
/// Returns `TransformError::EmptyImage` or
/// `TransformError::BufferSizeMismatch` if the input buffer is inconsistent.
pub fn rotate(image: &ImageBuffer, angle_degrees: f64) -> Result<ImageBuffer, TransformError> {
    image.validate()?;

    // Integer-division center, not (w - 1) / 2.0
    let center = ((image.width / 2) as f64, (image.height / 2) as f64);

    warp_fixed_canvas(image, &AffineMatrix::rotation(center, angle_degrees, 1.0))
}
