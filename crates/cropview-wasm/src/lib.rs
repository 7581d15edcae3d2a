//! Cropview WASM - WebAssembly bindings for Cropview
//!
//! This crate exposes the cropview-core transform synchronizer to
//! JavaScript/TypeScript hosts. The host keeps one [`CropView`] per
//! displayed image and routes every crop-window gesture, setting change,
//! and resize through it; the returned outcome carries the matrix to apply
//! (or animate to) and the adjusted crop rectangle to draw.
//!
//! # Module Structure
//!
//! - `viewport` - The `CropView` class wrapping the core synchronizer
//! - `types` - Plain serde mirrors of the core outcome types
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropView } from '@cropview/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const view = new CropView();
//! view.set_viewport_size(canvas.width, canvas.height);
//! view.set_image_size(bitmap.width, bitmap.height);
//! const outcome = view.crop_window_changed(l, t, r, b, false, true);
//! ```

use wasm_bindgen::prelude::*;

mod types;
mod viewport;

// Re-export public types
pub use types::{JsSyncAction, JsSyncOutcome, JsTransformSnapshot};
pub use viewport::CropView;

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
