//! Appicon Core - app icon preparation
//!
//! This crate turns a 1024x1024 source bitmap into app-icon ready PNGs:
//! rounded corners on a transparent canvas, and a scaled-down copy centred
//! inside a transparent border. It also provides the PNG/JPEG decoding,
//! PNG encoding, mask, and compositing pieces the transforms are built on.
//!
//! All operations are synchronous, single pass, and allocate their own
//! buffers, so independent calls can run concurrently without coordination.

pub mod decode;
pub mod encode;
mod error;
pub mod file;
pub mod mask;
pub mod transform;

pub use error::IconError;
pub use file::{
    add_border_file, prepare_icon_file, round_corners_file, DEFAULT_BORDER_OUTPUT,
    DEFAULT_ROUNDED_OUTPUT,
};
pub use transform::{
    add_border, prepare_icon, round_corners, BorderInsetOptions, PrepareOptions,
    RoundedCornerOptions, ICON_SIZE,
};
