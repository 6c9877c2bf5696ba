//! Pixwarp WASM - WebAssembly bindings for Pixwarp
//!
//! This crate exposes the pixwarp-core affine transforms to
//! JavaScript/TypeScript applications, together with the upload/display
//! plumbing a browser front end needs: decoding an uploaded JPEG or PNG into
//! a pixel buffer, and encoding transformed buffers back to PNG for display.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `transform` - Transform bindings (translate, rotate, scale, shear, preset)
//! - `decode` - Upload decoding bindings (JPEG, PNG)
//! - `encode` - Display encoding bindings (PNG)
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, rotate, encode_png } from '@pixwarp/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const rotated = rotate(image, 45.0);
//! const png = encode_png(rotated);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::encode_png;
pub use transform::{apply_preset, rotate, scale, shear, translate, JsTransformSet};
pub use types::JsImageBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
