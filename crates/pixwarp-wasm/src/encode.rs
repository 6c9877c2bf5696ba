//! Display encoding bindings.
//!
//! Transformed buffers go back to the front end as PNG bytes, which every
//! browser can render directly and which keep grayscale, RGB, and RGBA
//! layouts without loss.

use crate::types::JsImageBuffer;
use image::ImageEncoder;
use pixwarp_core::{ImageBuffer, PixelFormat};
use wasm_bindgen::prelude::*;

/// Encode an image buffer to PNG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded bytes.
///
/// # Errors
///
/// Throws if encoding fails internally.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = encode_png(transformed);
/// const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
/// ```
#[wasm_bindgen]
pub fn encode_png(image: &JsImageBuffer) -> Result<Vec<u8>, JsValue> {
    encode_to_png(image.as_core()).map_err(|e| JsValue::from_str(&e))
}

/// Encode a core buffer to PNG, with a string error for the JS boundary.
fn encode_to_png(image: &ImageBuffer) -> Result<Vec<u8>, String> {
    let color = match image.format {
        PixelFormat::Gray => image::ExtendedColorType::L8,
        PixelFormat::Rgb => image::ExtendedColorType::Rgb8,
        PixelFormat::Rgba => image::ExtendedColorType::Rgba8,
    };

    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(&image.pixels, image.width, image.height, color)
        .map_err(|e| e.to_string())?;

    Ok(bytes)
}
