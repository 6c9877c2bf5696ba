//! Core image buffer and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for affine transformation operations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Shear was requested along an unrecognized axis.
    #[error("Axis must be 'x' or 'y'")]
    InvalidAxis,

    /// Scale was requested with a zero, negative, or non-finite factor.
    #[error("Scale factors must be positive and finite, got fx={fx}, fy={fy}")]
    InvalidScaleFactor {
        /// Horizontal scale factor that was rejected.
        fx: f64,
        /// Vertical scale factor that was rejected.
        fy: f64,
    },

    /// The input image has zero width or height.
    #[error("Image has zero width or height")]
    EmptyImage,

    /// The pixel buffer length does not match the stated dimensions.
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch {
        /// Byte length implied by width, height, and pixel format.
        expected: usize,
        /// Actual byte length of the pixel buffer.
        actual: usize,
    },
}

/// Pixel layout of an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// Single-channel grayscale (1 byte per pixel).
    Gray,
    /// Interleaved RGB (3 bytes per pixel).
    #[default]
    Rgb,
    /// Interleaved RGBA (4 bytes per pixel).
    Rgba,
}

impl PixelFormat {
    /// Number of interleaved channels per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    /// Map a channel count back to a pixel format.
    ///
    /// Returns `None` for channel counts other than 1, 3, or 4.
    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(PixelFormat::Gray),
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }
}

/// An image with interleaved 8-bit pixel data.
///
/// Pixels are stored in row-major order, `channels` bytes per pixel.
/// The buffer length is always `width * height * channels`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel layout of the buffer.
    pub format: PixelFormat,
    /// Interleaved pixel data in row-major order.
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new ImageBuffer with the given dimensions and pixel data.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyImage` if either dimension is zero, or
    /// `TransformError::BufferSizeMismatch` if the pixel data length does not
    /// match `width * height * channels`.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, TransformError> {
        let buffer = Self {
            width,
            height,
            format,
            pixels,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Create an image filled with a constant value in every channel.
    pub fn filled(
        width: u32,
        height: u32,
        format: PixelFormat,
        value: u8,
    ) -> Result<Self, TransformError> {
        let len = width as usize * height as usize * format.channels();
        Self::new(width, height, format, vec![value; len])
    }

    /// Number of interleaved channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Byte offset of the pixel at (x, y).
    ///
    /// Coordinates must be within bounds.
    #[inline]
    pub(crate) fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels()
    }

    /// Check the buffer invariants.
    ///
    /// Fields are public, so transforms re-check before resampling rather
    /// than trusting construction-time validation.
    pub(crate) fn validate(&self) -> Result<(), TransformError> {
        if self.width == 0 || self.height == 0 {
            return Err(TransformError::EmptyImage);
        }
        let expected = self.width as usize * self.height as usize * self.channels();
        if self.pixels.len() != expected {
            return Err(TransformError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_format_channels() {
        assert_eq!(PixelFormat::Gray.channels(), 1);
        assert_eq!(PixelFormat::Rgb.channels(), 3);
        assert_eq!(PixelFormat::Rgba.channels(), 4);
    }

    #[test]
    fn test_pixel_format_from_channels() {
        assert_eq!(PixelFormat::from_channels(1), Some(PixelFormat::Gray));
        assert_eq!(PixelFormat::from_channels(3), Some(PixelFormat::Rgb));
        assert_eq!(PixelFormat::from_channels(4), Some(PixelFormat::Rgba));
        assert_eq!(PixelFormat::from_channels(0), None);
        assert_eq!(PixelFormat::from_channels(2), None);
        assert_eq!(PixelFormat::from_channels(5), None);
    }

    #[test]
    fn test_image_buffer_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let img = ImageBuffer::new(100, 50, PixelFormat::Rgb, pixels).unwrap();

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
    }

    #[test]
    fn test_image_buffer_zero_dimension() {
        let result = ImageBuffer::new(0, 50, PixelFormat::Rgb, vec![]);
        assert!(matches!(result, Err(TransformError::EmptyImage)));

        let result = ImageBuffer::new(50, 0, PixelFormat::Rgb, vec![]);
        assert!(matches!(result, Err(TransformError::EmptyImage)));
    }

    #[test]
    fn test_image_buffer_size_mismatch() {
        let result = ImageBuffer::new(10, 10, PixelFormat::Rgb, vec![0u8; 10]);
        assert!(matches!(
            result,
            Err(TransformError::BufferSizeMismatch {
                expected: 300,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_image_buffer_filled() {
        let img = ImageBuffer::filled(4, 3, PixelFormat::Rgba, 255).unwrap();
        assert_eq!(img.byte_size(), 4 * 3 * 4);
        assert!(img.pixels.iter().all(|&p| p == 255));
    }

    #[test]
    fn test_pixel_index() {
        let img = ImageBuffer::filled(10, 10, PixelFormat::Rgb, 0).unwrap();
        assert_eq!(img.pixel_index(0, 0), 0);
        assert_eq!(img.pixel_index(1, 0), 3);
        assert_eq!(img.pixel_index(0, 1), 30);
        assert_eq!(img.pixel_index(9, 9), (9 * 10 + 9) * 3);
    }

    #[test]
    fn test_transform_error_display() {
        let err = TransformError::InvalidAxis;
        assert_eq!(err.to_string(), "Axis must be 'x' or 'y'");

        let err = TransformError::InvalidScaleFactor { fx: 0.0, fy: 1.0 };
        assert_eq!(
            err.to_string(),
            "Scale factors must be positive and finite, got fx=0, fy=1"
        );
    }
}
