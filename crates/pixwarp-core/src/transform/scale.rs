//! Image scaling with bilinear resampling.
//!
//! Scaling is the one transform that changes the output canvas: the result
//! has `round(width * fx)` by `round(height * fy)` pixels. Resampling is
//! delegated to the `image` crate's bilinear (Triangle) filter, per format.

use crate::buffer::{ImageBuffer, PixelFormat, TransformError};

/// Scale an image by independent horizontal and vertical factors.
///
/// # Arguments
///
/// * `image` - Source image to scale
/// * `fx` - Horizontal scale factor (must be positive and finite)
/// * `fy` - Vertical scale factor (must be positive and finite)
///
/// # Returns
///
/// A new `ImageBuffer` of `round(width * fx)` by `round(height * fy)` pixels
/// (at least 1x1), with the same pixel format as the input.
///
/// # Errors
///
/// Returns `TransformError::InvalidScaleFactor` if either factor is zero,
/// negative, or non-finite, and `TransformError::EmptyImage` or
/// `TransformError::BufferSizeMismatch` if the input buffer is inconsistent.
pub fn scale(image: &ImageBuffer, fx: f64, fy: f64) -> Result<ImageBuffer, TransformError> {
    image.validate()?;

    if !(fx.is_finite() && fy.is_finite()) || fx <= 0.0 || fy <= 0.0 {
        return Err(TransformError::InvalidScaleFactor { fx, fy });
    }

    // Fast path: unit factors preserve the image exactly
    if fx == 1.0 && fy == 1.0 {
        return Ok(image.clone());
    }

    let out_width = ((image.width as f64 * fx).round() as u32).max(1);
    let out_height = ((image.height as f64 * fy).round() as u32).max(1);

    let pixels = match image.format {
        PixelFormat::Gray => resample::<image::Luma<u8>>(image, out_width, out_height)?,
        PixelFormat::Rgb => resample::<image::Rgb<u8>>(image, out_width, out_height)?,
        PixelFormat::Rgba => resample::<image::Rgba<u8>>(image, out_width, out_height)?,
    };

    Ok(ImageBuffer {
        width: out_width,
        height: out_height,
        format: image.format,
        pixels,
    })
}

/// Run the `image` crate's bilinear resize for one concrete pixel type.
fn resample<P>(image: &ImageBuffer, width: u32, height: u32) -> Result<Vec<u8>, TransformError>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    let buffer: image::ImageBuffer<P, Vec<u8>> =
        image::ImageBuffer::from_raw(image.width, image.height, image.pixels.clone()).ok_or(
            TransformError::BufferSizeMismatch {
                expected: image.width as usize * image.height as usize * image.channels(),
                actual: image.pixels.len(),
            },
        )?;

    let resized =
        image::imageops::resize(&buffer, width, height, image::imageops::FilterType::Triangle);
    Ok(resized.into_raw())
}
