//! Image translation.

use crate::buffer::{ImageBuffer, TransformError};
use crate::matrix::AffineMatrix;
use crate::transform::warp::warp_fixed_canvas;

/// Translate an image by (tx, ty) pixels.
///
/// Builds the affine matrix [[1, 0, tx], [0, 1, ty]] and resamples onto a
/// canvas of the same size. Content shifted off-canvas is clipped and the
/// newly exposed region is filled with black. Offsets are unrestricted;
/// shifting the content entirely off-frame yields an all-black image rather
/// than an error.
///
/// # Arguments
///
/// * `image` - Source image to translate
/// * `tx` - Horizontal offset in pixels (positive = right)
/// * `ty` - Vertical offset in pixels (positive = down)
///
/// # Returns
///
/// A new `ImageBuffer` with the same dimensions and format as the input.
///
/// # Errors
///
/// Returns `TransformError::EmptyImage` or
/// `TransformError::BufferSizeMismatch` if the input buffer is inconsistent.
pub fn translate(image: &ImageBuffer, tx: f64, ty: f64) -> Result<ImageBuffer, TransformError> {
    image.validate()?;

    // Fast path: zero offset is the identity
    if tx == 0.0 && ty == 0.0 {
        return Ok(image.clone());
    }

    warp_fixed_canvas(image, &AffineMatrix::translation(tx, ty))
}
