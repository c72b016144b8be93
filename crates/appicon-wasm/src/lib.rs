//! Appicon WASM - WebAssembly bindings for appicon
//!
//! This crate exposes the appicon-core transforms to JavaScript/TypeScript
//! frontends. Every transform takes encoded image bytes and returns PNG
//! bytes, so callers can feed a `File` straight in and hand the result to a
//! `Blob`.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for decoded RGBA pixels
//! - `transform` - Rounded corners, border inset, and prepare bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { round_corners, prepare_icon } from '@appicon/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const rounded = round_corners(bytes, 100);
//! const finished = prepare_icon(bytes, { border_fraction: 0.08 });
//! ```

use wasm_bindgen::prelude::*;

mod transform;
mod types;

pub use transform::{add_border, decode_icon, prepare_icon, round_corners};
pub use types::JsIconImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Side length, in pixels, that every source icon must have.
#[wasm_bindgen]
pub fn icon_size() -> u32 {
    appicon_core::ICON_SIZE
}
