//! Image decoding for the icon transforms.
//!
//! This module provides functionality for:
//! - Decoding any raster format the `image` crate is built with (PNG, JPEG)
//! - Normalizing the decoded bitmap to RGBA8
//! - Resizing with a selectable interpolation filter
//!
//! All operations are synchronous and allocate fresh buffers; inputs are
//! never modified.

mod reader;
mod resize;
mod types;

pub use reader::{decode_icon, decode_icon_file};
pub use resize::resize;
pub use types::{DecodeError, FilterType};
