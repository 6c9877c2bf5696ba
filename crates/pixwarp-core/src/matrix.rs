//! 2x3 affine matrix construction, application, and inversion.
//!
//! The matrix describes a linear map plus translation in pixel space:
//!
//! ```text
//! | a  b  tx |
//! | d  e  ty |
//! ```
//!
//! Transforms map a source point (x, y) to (a*x + b*y + tx, d*x + e*y + ty).
//! The resampler works with the inverse map, so the constructors here build
//! forward matrices and `invert` recovers the destination-to-source map.

/// A 2x3 affine transformation matrix, stored row-major as
/// `[a, b, tx, d, e, ty]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix(pub [f64; 6]);

impl AffineMatrix {
    /// The identity map.
    pub fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Pure translation by (tx, ty) pixels.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    /// Rotation around a center point, with a uniform scale factor.
    ///
    /// Follows the OpenCV `getRotationMatrix2D` convention: a positive angle
    /// rotates counter-clockwise. The matrix is
    ///
    /// ```text
    /// | alpha   beta   (1 - alpha) * cx - beta * cy |
    /// | -beta   alpha  beta * cx + (1 - alpha) * cy |
    /// ```
    ///
    /// where `alpha = scale * cos(angle)` and `beta = scale * sin(angle)`.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of rotation in pixel coordinates
    /// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
    /// * `scale` - Uniform scale factor applied alongside the rotation
    pub fn rotation(center: (f64, f64), angle_degrees: f64, scale: f64) -> Self {
        let angle = angle_degrees.to_radians();
        let alpha = scale * angle.cos();
        let beta = scale * angle.sin();

        let tx = (1.0 - alpha) * center.0 - beta * center.1;
        let ty = beta * center.0 + (1.0 - alpha) * center.1;

        Self([alpha, beta, tx, -beta, alpha, ty])
    }

    /// Shear along the x axis: x' = x + factor * y.
    pub fn shear_x(factor: f64) -> Self {
        Self([1.0, factor, 0.0, 0.0, 1.0, 0.0])
    }

    /// Shear along the y axis: y' = factor * x + y.
    pub fn shear_y(factor: f64) -> Self {
        Self([1.0, 0.0, 0.0, factor, 1.0, 0.0])
    }

    /// Apply the map to a point.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.0;
        (m[0] * x + m[1] * y + m[2], m[3] * x + m[4] * y + m[5])
    }

    /// Invert the affine map.
    ///
    /// A singular matrix (zero determinant) inverts to the zero map, matching
    /// the OpenCV `invertAffineTransform` behavior.
    pub fn invert(&self) -> Self {
        let [a, b, tx, d, e, ty] = self.0;

        let determinant = a * e - b * d;
        let inv_determinant = if determinant != 0.0 {
            1.0 / determinant
        } else {
            0.0
        };

        let new_a = e * inv_determinant;
        let new_b = -b * inv_determinant;
        let new_d = -d * inv_determinant;
        let new_e = a * inv_determinant;
        let new_tx = -(new_a * tx + new_b * ty);
        let new_ty = -(new_d * tx + new_e * ty);

        Self([new_a, new_b, new_tx, new_d, new_e, new_ty])
    }

    /// True when every entry is a finite real number.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}
