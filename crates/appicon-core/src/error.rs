//! Top-level error type for the icon transforms.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors surfaced by the icon transforms.
///
/// Every variant means the operation did not complete and no output was
/// written.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source bitmap does not have the required square size.
    #[error("Input image must be {expected}x{expected} pixels, got {width}x{height}")]
    InvalidInputDimensions {
        width: u32,
        height: u32,
        expected: u32,
    },

    /// The source could not be read or decoded.
    #[error("Failed to decode input: {0}")]
    DecodeFailure(#[from] DecodeError),

    /// The result could not be encoded or written.
    #[error("Failed to write output: {0}")]
    EncodeFailure(#[from] EncodeError),
}
