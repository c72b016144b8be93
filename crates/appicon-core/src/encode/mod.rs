//! Image encoding for icon output.
//!
//! This module provides functionality for:
//! - Encoding RGBA8 pixel data to PNG bytes
//! - Writing PNG files without leaving partial output behind
//!
//! PNG is lossless, so decoding an encoded buffer yields the exact pixels
//! that were composited in memory.

mod png;

pub use png::{encode_png, encode_rgba_png, write_png, EncodeError};
