//! Cropview WASM - WebAssembly bindings for Cropview
//!
//! This crate exposes the cropview-core widget logic to
//! JavaScript/TypeScript. The page owns the canvases and event listeners;
//! the bindings own all state and math.
//!
//! # Module Structure
//!
//! - `session` - The crop session: pointer events, loads, overlay, crop
//! - `types` - WASM-compatible wrapper types for image data
//! - `review` - Review route resolution
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropSession } from '@cropview/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new CropSession(600, 400);
//! canvas.onpointerdown = (e) => session.pointer_down(e.offsetX, e.offsetY);
//! ```

use wasm_bindgen::prelude::*;

mod review;
mod session;
mod types;

// Re-export public types
pub use review::resolve_review;
pub use session::{check_file_type, check_response, check_url, CropSession};
pub use types::JsSourceImage;

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
