//! Upload decoding bindings.
//!
//! The front end hands over the raw bytes of an uploaded JPEG or PNG file;
//! this module decodes them into a `JsImageBuffer` the transform bindings
//! operate on. The core crate never touches codecs, so this boundary is
//! where the `image` crate's decoders live.

use crate::types::JsImageBuffer;
use pixwarp_core::{ImageBuffer, PixelFormat};
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG image from bytes.
///
/// Grayscale, RGB, and RGBA layouts are preserved as 1-, 3-, and 4-channel
/// buffers; any other decoded layout (for example 16-bit or
/// grayscale-with-alpha) is converted to 8-bit RGB.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsImageBuffer` containing the decoded pixel data.
///
/// # Errors
///
/// Throws if the bytes are not a valid JPEG or PNG image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImageBuffer, JsValue> {
    decode_to_buffer(bytes)
        .map(JsImageBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e))
}

/// Decode into a core buffer, with a string error for the JS boundary.
fn decode_to_buffer(bytes: &[u8]) -> Result<ImageBuffer, String> {
    let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;

    let (width, height, format, pixels) = match decoded {
        image::DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            (w, h, PixelFormat::Gray, buf.into_raw())
        }
        image::DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            (w, h, PixelFormat::Rgb, buf.into_raw())
        }
        image::DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            (w, h, PixelFormat::Rgba, buf.into_raw())
        }
        other => {
            let buf = other.to_rgb8();
            let (w, h) = buf.dimensions();
            (w, h, PixelFormat::Rgb, buf.into_raw())
        }
    };

    ImageBuffer::new(width, height, format, pixels).map_err(|e| e.to_string())
}
