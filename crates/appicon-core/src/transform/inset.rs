//! Border inset transform.
//!
//! Scales a bitmap down and centres it on a transparent canvas of the
//! original size, leaving a uniform transparent margin.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::ensure_icon_dimensions;
use crate::decode::{resize, FilterType};
use crate::mask::paste_masked;
use crate::IconError;

/// Largest accepted border fraction; at this value nothing is left inside.
const MAX_BORDER_FRACTION: f64 = 0.5;

/// Options for [`add_border`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderInsetOptions {
    /// Margin on each side as a fraction of the side length (0.0 to 0.5)
    pub border_fraction: f64,
    /// Resampling filter for the downscale
    pub filter: FilterType,
}

impl Default for BorderInsetOptions {
    fn default() -> Self {
        Self {
            border_fraction: 0.05,
            filter: FilterType::Lanczos3,
        }
    }
}

/// Margin in pixels for a side of `size` pixels.
///
/// Truncates toward zero. The fraction is saturated into `[0, 0.5]` and NaN
/// counts as zero, so the result never exceeds `size / 2`.
pub fn border_width(size: u32, fraction: f64) -> u32 {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, MAX_BORDER_FRACTION)
    };
    let border = (size as f64 * fraction).floor() as u32;
    border.min(size / 2)
}

/// Inset an `ICON_SIZE` square icon inside a transparent border.
///
/// # Errors
///
/// Returns `IconError::InvalidInputDimensions` if the icon is not
/// `ICON_SIZE x ICON_SIZE`.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn add_border(image: &RgbaImage, options: &BorderInsetOptions) -> Result<RgbaImage, IconError> {
    ensure_icon_dimensions(image.width(), image.height())?;
    Ok(apply_border_inset(
        image,
        options.border_fraction,
        options.filter,
    ))
}

/// Inset a square bitmap of any size.
///
/// # Algorithm
/// 1. `border = floor(size * fraction)`, `inner = size - 2 * border`
/// 2. Resize the source to `inner x inner`
/// 3. Paste it at `(border, border)` on a transparent canvas, blending by
///    its own alpha
///
/// When `inner` is zero the result is a fully transparent canvas.
pub fn apply_border_inset(image: &RgbaImage, fraction: f64, filter: FilterType) -> RgbaImage {
    let size = image.width().min(image.height());
    let border = border_width(size, fraction);
    let inner = size - 2 * border;
    tracing::debug!(border, inner, "computed inset geometry");

    let mut canvas = RgbaImage::new(image.width(), image.height());
    // resize only fails on a zero target, which leaves the canvas clear
    if let Ok(resized) = resize(image, inner, inner, filter) {
        paste_masked(&mut canvas, &resized, border, border, None);
    }
    canvas
}


#[cfg(test)]
mod proptests {
    use super::*;
    use image::Rgba;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: the margin is always fully transparent and the output
        /// keeps the source size.
        #[test]
        fn prop_margin_is_transparent(
            size in 2u32..=64,
            fraction in 0.0f64..0.5,
        ) {
            let src = RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255]));
            let out = apply_border_inset(&src, fraction, FilterType::Lanczos3);
            let border = border_width(size, fraction);

            prop_assert_eq!(out.dimensions(), (size, size));
            for (x, y, p) in out.enumerate_pixels() {
                let inside = (border..size - border).contains(&x)
                    && (border..size - border).contains(&y);
                if !inside {
                    prop_assert_eq!(p.0, [0, 0, 0, 0]);
                }
            }
        }

        /// Property: the border never eats more than half the side.
        #[test]
        fn prop_border_width_bounded(size in 0u32..=4096, fraction in -1.0f64..2.0) {
            prop_assert!(border_width(size, fraction) * 2 <= size);
        }
    }
}
