//! File-to-file converters.
//!
//! Each converter decodes the input, validates its size, runs the transform
//! in memory, and only then writes the PNG. Any failure returns before the
//! output path is touched. The input file is never modified.

use std::path::Path;

use crate::decode::decode_icon_file;
use crate::encode::write_png;
use crate::transform::{
    add_border, prepare_icon, round_corners, BorderInsetOptions, PrepareOptions,
    RoundedCornerOptions,
};
use crate::IconError;

/// Default output name of the rounded-corner converter.
pub const DEFAULT_ROUNDED_OUTPUT: &str = "rounded_corner_icon.png";

/// Default output name of the border inset converter.
pub const DEFAULT_BORDER_OUTPUT: &str = "app-icon-with-border.png";

/// Round the corners of the icon at `input` and write the PNG to `output`.
pub fn round_corners_file(
    input: &Path,
    output: &Path,
    options: &RoundedCornerOptions,
) -> Result<(), IconError> {
    let image = decode_icon_file(input)?;
    let rounded = round_corners(&image, options)?;
    write_png(output, &rounded)?;
    tracing::debug!(output = %output.display(), "rounded corner icon written");
    Ok(())
}

/// Inset the icon at `input` in a transparent border and write the PNG to
/// `output`.
pub fn add_border_file(
    input: &Path,
    output: &Path,
    options: &BorderInsetOptions,
) -> Result<(), IconError> {
    let image = decode_icon_file(input)?;
    let bordered = add_border(&image, options)?;
    write_png(output, &bordered)?;
    tracing::debug!(output = %output.display(), "bordered icon written");
    Ok(())
}

/// Round, inset, and write the icon at `input` to `output`.
pub fn prepare_icon_file(
    input: &Path,
    output: &Path,
    options: &PrepareOptions,
) -> Result<(), IconError> {
    let image = decode_icon_file(input)?;
    let prepared = prepare_icon(&image, options)?;
    write_png(output, &prepared)?;
    tracing::debug!(output = %output.display(), "prepared icon written");
    Ok(())
}
