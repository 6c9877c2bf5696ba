//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Pixwarp
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use pixwarp_core::{ImageBuffer, PixelFormat};
use wasm_bindgen::prelude::*;

/// An image buffer wrapper for JavaScript.
///
/// This type wraps the core `ImageBuffer` and provides a JavaScript-friendly
/// interface for accessing image dimensions and pixel data. Pixels are
/// interleaved row-major bytes with 1 (grayscale), 3 (RGB), or 4 (RGBA)
/// channels per pixel.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsImageBuffer {
    inner: ImageBuffer,
}

#[wasm_bindgen]
impl JsImageBuffer {
    /// Create a new JsImageBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Channels per pixel (1, 3, or 4)
    /// * `pixels` - Interleaved pixel data, row-major order
    ///
    /// # Errors
    ///
    /// Throws if the channel count is unsupported, a dimension is zero, or
    /// the pixel data length does not match the dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        pixels: Vec<u8>,
    ) -> Result<JsImageBuffer, JsValue> {
        let format = PixelFormat::from_channels(channels)
            .ok_or_else(|| JsValue::from_str("Channel count must be 1, 3, or 4"))?;
        let inner = ImageBuffer::new(width, height, format, pixels)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsImageBuffer { inner })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of channels per pixel (1, 3, or 4)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> usize {
        self.inner.channels()
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory for
    /// a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImageBuffer {
    /// Create a JsImageBuffer from a core ImageBuffer.
    pub(crate) fn from_core(inner: ImageBuffer) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core ImageBuffer.
    pub(crate) fn as_core(&self) -> &ImageBuffer {
        &self.inner
    }
}
