//! WASM bindings for the affine transform operations.
//!
//! Each binding wraps the corresponding pixwarp-core function, converting
//! between `JsImageBuffer` and the core buffer and mapping errors to
//! JavaScript exceptions. The shear axis crosses the boundary as a string
//! and is validated into the core enum here.

use crate::types::JsImageBuffer;
use pixwarp_core::{transform, ShearAxis, TransformSettings};
use wasm_bindgen::prelude::*;

/// Translate an image by (tx, ty) pixels.
///
/// The output has the same dimensions as the input; content shifted
/// off-canvas is clipped and exposed regions are filled with black.
///
/// # Arguments
///
/// * `image` - Source image to translate
/// * `tx` - Horizontal offset in pixels (positive = right)
/// * `ty` - Vertical offset in pixels (positive = down)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const shifted = translate(sourceImage, 50.0, 30.0);
/// ```
#[wasm_bindgen]
pub fn translate(image: &JsImageBuffer, tx: f64, ty: f64) -> Result<JsImageBuffer, JsValue> {
    transform::translate(image.as_core(), tx, ty)
        .map(JsImageBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate an image around its center.
///
/// A positive angle rotates counter-clockwise. The output keeps the input
/// canvas; rotated content outside it is clipped.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate(sourceImage, 45.0);
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsImageBuffer, angle_degrees: f64) -> Result<JsImageBuffer, JsValue> {
    transform::rotate(image.as_core(), angle_degrees)
        .map(JsImageBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Scale an image by independent horizontal and vertical factors.
///
/// The output is `round(width * fx)` by `round(height * fy)` pixels,
/// resampled with bilinear interpolation.
///
/// # Arguments
///
/// * `image` - Source image to scale
/// * `fx` - Horizontal scale factor (must be positive)
/// * `fy` - Vertical scale factor (must be positive)
///
/// # Errors
///
/// Throws if either factor is zero, negative, or non-finite.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const enlarged = scale(sourceImage, 1.5, 1.5);
/// ```
#[wasm_bindgen]
pub fn scale(image: &JsImageBuffer, fx: f64, fy: f64) -> Result<JsImageBuffer, JsValue> {
    transform::scale(image.as_core(), fx, fy)
        .map(JsImageBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Shear an image along the `"x"` or `"y"` axis.
///
/// The output has the same dimensions as the input; sheared content outside
/// the canvas is clipped and exposed regions are filled with black.
///
/// # Arguments
///
/// * `image` - Source image to shear
/// * `factor` - Shear factor; zero leaves the image unchanged
/// * `axis` - Either `"x"` or `"y"`
///
/// # Errors
///
/// Throws `"Axis must be 'x' or 'y'"` for any other axis string.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const slanted = shear(sourceImage, 0.3, "x");
/// ```
#[wasm_bindgen]
pub fn shear(image: &JsImageBuffer, factor: f64, axis: &str) -> Result<JsImageBuffer, JsValue> {
    let axis: ShearAxis = axis
        .parse()
        .map_err(|e: pixwarp_core::TransformError| JsValue::from_str(&e.to_string()))?;
    transform::shear(image.as_core(), factor, axis)
        .map(JsImageBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The four transformed variants of one source image.
///
/// Returned by [`apply_preset`]; each getter hands out a copy so the set can
/// be consumed field by field from JavaScript.
#[wasm_bindgen]
pub struct JsTransformSet {
    inner: transform::TransformSet,
}

#[wasm_bindgen]
impl JsTransformSet {
    /// Result of the translation.
    #[wasm_bindgen(getter)]
    pub fn translated(&self) -> JsImageBuffer {
        JsImageBuffer::from_core(self.inner.translated.clone())
    }

    /// Result of the rotation.
    #[wasm_bindgen(getter)]
    pub fn rotated(&self) -> JsImageBuffer {
        JsImageBuffer::from_core(self.inner.rotated.clone())
    }

    /// Result of the scaling.
    #[wasm_bindgen(getter)]
    pub fn scaled(&self) -> JsImageBuffer {
        JsImageBuffer::from_core(self.inner.scaled.clone())
    }

    /// Result of the shear.
    #[wasm_bindgen(getter)]
    pub fn sheared(&self) -> JsImageBuffer {
        JsImageBuffer::from_core(self.inner.sheared.clone())
    }
}

/// Apply all four transforms to one image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `settings` - A settings object, or `null`/`undefined` for the demo
///   preset (translate (50, 30), rotate 45 degrees, scale 1.5x, shear 0.3
///   along x)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const set = apply_preset(sourceImage, {
///   translate_x: 50, translate_y: 30,
///   rotate_degrees: 45,
///   scale_x: 1.5, scale_y: 1.5,
///   shear_factor: 0.3, shear_axis: "x",
/// });
/// render(set.translated, set.rotated, set.scaled, set.sheared);
/// ```
#[wasm_bindgen]
pub fn apply_preset(image: &JsImageBuffer, settings: JsValue) -> Result<JsTransformSet, JsValue> {
    let settings: TransformSettings = if settings.is_null() || settings.is_undefined() {
        TransformSettings::default()
    } else {
        serde_wasm_bindgen::from_value(settings).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    transform::apply_preset(image.as_core(), &settings)
        .map(|inner| JsTransformSet { inner })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
