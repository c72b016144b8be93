//! Icon transforms: rounded corners, border inset, and the combined
//! prepare pipeline.
//!
//! # Transform Order
//!
//! The prepare pipeline applies, in order:
//! 1. Rounded corners (mask + composite onto a transparent canvas)
//! 2. Border inset (resize + centre onto a transparent canvas)
//!
//! # Size Contract
//!
//! The validating entry points ([`round_corners`], [`add_border`],
//! [`prepare_icon`]) only accept `ICON_SIZE x ICON_SIZE` bitmaps and fail
//! with [`IconError::InvalidInputDimensions`] before doing any work. The
//! `apply_*` functions work at any size.

mod inset;
mod pipeline;
mod rounded;

pub use inset::{add_border, apply_border_inset, border_width, BorderInsetOptions};
pub use pipeline::{prepare_icon, PrepareOptions};
pub use rounded::{apply_rounded_corners, round_corners, RoundedCornerOptions};

use crate::IconError;

/// Required width and height of a source icon, in pixels.
pub const ICON_SIZE: u32 = 1024;

/// Fail with `InvalidInputDimensions` unless the bitmap is `ICON_SIZE` square.
pub fn ensure_icon_dimensions(width: u32, height: u32) -> Result<(), IconError> {
    if width != ICON_SIZE || height != ICON_SIZE {
        return Err(IconError::InvalidInputDimensions {
            width,
            height,
            expected: ICON_SIZE,
        });
    }
    Ok(())
}
