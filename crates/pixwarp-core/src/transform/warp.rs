//! Shared inverse-mapping resampler for canvas-preserving transforms.
//!
//! Translation, rotation, and shear all resample onto a canvas of the same
//! size as the input: for each destination pixel, invert the forward affine
//! map to find the source coordinate, then bilinear-sample the source there.
//! Destination pixels whose source coordinate falls outside the image keep
//! the constant zero (black) fill.

use crate::buffer::{ImageBuffer, TransformError};
use crate::matrix::AffineMatrix;

/// Sub-pixel coordinate resolution, matching OpenCV's fixed-point
/// interpolation tables (INTER_TAB_SIZE). Quantizing source coordinates to
/// this grid makes near-integer mappings, such as a full-turn rotation,
/// sample source pixels exactly.
const SUBPIXEL_STEPS: f64 = 32.0;

/// Resample an image through the inverse of a forward affine map, onto a
/// canvas of the same dimensions.
///
/// The caller passes the forward (source-to-destination) matrix; the inverse
/// is computed here.
pub(crate) fn warp_fixed_canvas(
    image: &ImageBuffer,
    matrix: &AffineMatrix,
) -> Result<ImageBuffer, TransformError> {
    image.validate()?;

    let inverse = matrix.invert();
    let channels = image.channels();
    let mut output = vec![0u8; image.pixels.len()];

    for dst_y in 0..image.height {
        for dst_x in 0..image.width {
            let (src_x, src_y) = inverse.apply(dst_x as f64, dst_y as f64);
            let dst_idx = image.pixel_index(dst_x, dst_y);
            sample_bilinear(image, src_x, src_y, &mut output[dst_idx..dst_idx + channels]);
        }
    }

    Ok(ImageBuffer {
        width: image.width,
        height: image.height,
        format: image.format,
        pixels: output,
    })
}

/// Sample the source at a fractional coordinate with bilinear interpolation,
/// writing one value per channel into `out`.
///
/// `out` arrives zero-filled; an out-of-bounds source coordinate leaves it
/// untouched, which is the constant black fill policy.
fn sample_bilinear(image: &ImageBuffer, x: f64, y: f64, out: &mut [u8]) {
    let x = (x * SUBPIXEL_STEPS).round() / SUBPIXEL_STEPS;
    let y = (y * SUBPIXEL_STEPS).round() / SUBPIXEL_STEPS;

    if x < 0.0 || y < 0.0 || x >= image.width as f64 || y >= image.height as f64 {
        return;
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(image.width - 1);
    let y1 = (y0 + 1).min(image.height - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let i00 = image.pixel_index(x0, y0);
    let i10 = image.pixel_index(x1, y0);
    let i01 = image.pixel_index(x0, y1);
    let i11 = image.pixel_index(x1, y1);

    for (c, out_sample) in out.iter_mut().enumerate() {
        let p00 = image.pixels[i00 + c] as f64;
        let p10 = image.pixels[i10 + c] as f64;
        let p01 = image.pixels[i01 + c] as f64;
        let p11 = image.pixels[i11 + c] as f64;

        let v = p00 * (1.0 - fx) * (1.0 - fy)
            + p10 * fx * (1.0 - fy)
            + p01 * (1.0 - fx) * fy
            + p11 * fx * fy;
        *out_sample = v.clamp(0.0, 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelFormat;

    /// Create a test image with a gradient pattern.
    fn test_image(width: u32, height: u32) -> ImageBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y * 7) % 256) as u8;
                pixels.push(v);
                pixels.push(v.wrapping_add(40));
                pixels.push(v.wrapping_add(90));
            }
        }
        ImageBuffer::new(width, height, PixelFormat::Rgb, pixels).unwrap()
    }

    #[test]
    fn test_identity_warp_is_exact() {
        let img = test_image(13, 9);
        let result = warp_fixed_canvas(&img, &AffineMatrix::identity()).unwrap();
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_warp_preserves_dimensions_and_format() {
        let img = test_image(20, 10);
        let result = warp_fixed_canvas(&img, &AffineMatrix::rotation((10.0, 5.0), 30.0, 1.0))
            .unwrap();
        assert_eq!(result.width, 20);
        assert_eq!(result.height, 10);
        assert_eq!(result.format, PixelFormat::Rgb);
        assert_eq!(result.pixels.len(), img.pixels.len());
    }

    #[test]
    fn test_integer_translation_moves_pixels_exactly() {
        let img = test_image(10, 10);
        let result = warp_fixed_canvas(&img, &AffineMatrix::translation(3.0, 2.0)).unwrap();

        // Destination (5, 5) should hold source (2, 3) exactly
        let dst = result.pixel_index(5, 5);
        let src = img.pixel_index(2, 3);
        assert_eq!(&result.pixels[dst..dst + 3], &img.pixels[src..src + 3]);
    }

    #[test]
    fn test_out_of_bounds_sources_are_black() {
        let img = ImageBuffer::filled(8, 8, PixelFormat::Rgb, 255).unwrap();
        let result = warp_fixed_canvas(&img, &AffineMatrix::translation(100.0, 0.0)).unwrap();
        assert!(result.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_half_pixel_shift_averages_neighbors() {
        // Two-pixel gray row: 0 and 100
        let img = ImageBuffer::new(2, 1, PixelFormat::Gray, vec![0, 100]).unwrap();
        let result = warp_fixed_canvas(&img, &AffineMatrix::translation(-0.5, 0.0)).unwrap();

        // Destination 0 samples source 0.5, the midpoint of 0 and 100
        assert_eq!(result.pixels[0], 50);
    }

    #[test]
    fn test_warp_single_pixel_image() {
        let img = ImageBuffer::new(1, 1, PixelFormat::Rgba, vec![10, 20, 30, 40]).unwrap();
        let result = warp_fixed_canvas(&img, &AffineMatrix::identity()).unwrap();
        assert_eq!(result.pixels, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_warp_rejects_inconsistent_buffer() {
        let img = ImageBuffer {
            width: 10,
            height: 10,
            format: PixelFormat::Rgb,
            pixels: vec![0u8; 5],
        };
        let result = warp_fixed_canvas(&img, &AffineMatrix::identity());
        assert!(matches!(
            result,
            Err(TransformError::BufferSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_warp_rejects_empty_image() {
        let img = ImageBuffer {
            width: 0,
            height: 4,
            format: PixelFormat::Gray,
            pixels: vec![],
        };
        let result = warp_fixed_canvas(&img, &AffineMatrix::identity());
        assert!(matches!(result, Err(TransformError::EmptyImage)));
    }
}
