//! Pixwarp Core - Affine image transformation library
//!
//! This crate provides the core geometry for Pixwarp: an in-memory image
//! buffer, 2x3 affine matrix math, and four pure transform operations
//! (translate, rotate, scale, shear). Everything is synchronous and
//! stateless; each operation returns a newly allocated buffer and never
//! touches its input.

pub mod buffer;
pub mod matrix;
pub mod transform;

pub use buffer::{ImageBuffer, PixelFormat, TransformError};
pub use matrix::AffineMatrix;
pub use transform::{apply_preset, rotate, scale, shear, translate, ShearAxis, TransformSet};

/// Parameters for the four showcase transforms.
///
/// The defaults match the demo preset: translate 50px right and 30px down,
/// rotate 45 degrees, scale 1.5x in both directions, shear 0.3 along x.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformSettings {
    /// Horizontal translation offset in pixels (positive = right).
    pub translate_x: f64,
    /// Vertical translation offset in pixels (positive = down).
    pub translate_y: f64,
    /// Rotation angle in degrees (positive = counter-clockwise).
    pub rotate_degrees: f64,
    /// Horizontal scale factor (must be positive).
    pub scale_x: f64,
    /// Vertical scale factor (must be positive).
    pub scale_y: f64,
    /// Shear factor; zero leaves the image unchanged.
    pub shear_factor: f64,
    /// Axis along which the shear slides content.
    pub shear_axis: ShearAxis,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            translate_x: 50.0,
            translate_y: 30.0,
            rotate_degrees: 45.0,
            scale_x: 1.5,
            scale_y: 1.5,
            shear_factor: 0.3,
            shear_axis: ShearAxis::X,
        }
    }
}

impl TransformSettings {
    /// Create settings with the default demo values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the scale factors are usable before running transforms.
    pub fn validate(&self) -> Result<(), TransformError> {
        if !(self.scale_x.is_finite() && self.scale_y.is_finite())
            || self.scale_x <= 0.0
            || self.scale_y <= 0.0
        {
            return Err(TransformError::InvalidScaleFactor {
                fx: self.scale_x,
                fy: self.scale_y,
            });
        }
        Ok(())
    }
}
