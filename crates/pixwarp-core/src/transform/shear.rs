//! Image shear along the x or y axis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::{ImageBuffer, TransformError};
use crate::matrix::AffineMatrix;
use crate::transform::warp::warp_fixed_canvas;

/// Axis along which a shear is applied.
///
/// The string forms `"x"` and `"y"` used at API boundaries are validated
/// into this enum before any matrix is built; anything else fails with
/// `TransformError::InvalidAxis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShearAxis {
    /// Horizontal shear: rows slide sideways proportionally to their y.
    #[default]
    X,
    /// Vertical shear: columns slide up or down proportionally to their x.
    Y,
}

impl FromStr for ShearAxis {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(ShearAxis::X),
            "y" => Ok(ShearAxis::Y),
            _ => Err(TransformError::InvalidAxis),
        }
    }
}

impl fmt::Display for ShearAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShearAxis::X => write!(f, "x"),
            ShearAxis::Y => write!(f, "y"),
        }
    }
}

/// Shear an image along the given axis.
///
/// For `ShearAxis::X` the matrix is [[1, factor, 0], [0, 1, 0]]; for
/// `ShearAxis::Y` it is [[1, 0, 0], [factor, 1, 0]]. The output canvas keeps
/// the input dimensions; sheared content outside the canvas is clipped and
/// exposed regions are filled with black.
///
/// # Arguments
///
/// * `image` - Source image to shear
/// * `factor` - Shear factor; zero is the identity
/// * `axis` - Axis along which content slides
///
/// # Returns
///
/// A new `ImageBuffer` with the same dimensions and format as the input.
///
/// # Errors
///
/// Returns `TransformError::EmptyImage` or
/// `TransformError::BufferSizeMismatch` if the input buffer is inconsistent.
pub fn shear(
    image: &ImageBuffer,
    factor: f64,
    axis: ShearAxis,
) -> Result<ImageBuffer, TransformError> {
    image.validate()?;

    let matrix = match axis {
        ShearAxis::X => AffineMatrix::shear_x(factor),
        ShearAxis::Y => AffineMatrix::shear_y(factor),
    };

    warp_fixed_canvas(image, &matrix)
}
