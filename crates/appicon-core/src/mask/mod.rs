//! Alpha masks and masked compositing.
//!
//! ## Mask Types
//!
//! - **Rounded Rectangle**: the full image bounds with quarter-circle corners
//!
//! ## Algorithm
//!
//! Masks are evaluated per pixel at the pixel centre and rendered into a
//! single-channel (L) bitmap where 255 keeps the source pixel and 0 drops it.
//! [`paste_masked`] then composites a source onto a canvas, using the mask
//! value as a multiplier on the source alpha.

pub mod apply;
pub mod rounded;

pub use apply::paste_masked;
pub use rounded::RoundedRectMask;

/// Mask value for a fully covered pixel.
pub const MASK_OPAQUE: u8 = 255;

/// Mask value for an uncovered pixel.
pub const MASK_TRANSPARENT: u8 = 0;
