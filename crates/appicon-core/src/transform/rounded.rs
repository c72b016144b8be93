//! Rounded-corner transform.
//!
//! Clips the corners of a bitmap to quarter circles by compositing it onto a
//! transparent canvas through a rounded rectangle mask.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::ensure_icon_dimensions;
use crate::mask::{paste_masked, RoundedRectMask};
use crate::IconError;

/// Options for [`round_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedCornerOptions {
    /// Corner radius in pixels. Values above half the side length produce
    /// the inscribed circle.
    pub corner_radius: u32,
}

impl Default for RoundedCornerOptions {
    fn default() -> Self {
        Self { corner_radius: 100 }
    }
}

/// Round the corners of an `ICON_SIZE` square icon.
///
/// # Errors
///
/// Returns `IconError::InvalidInputDimensions` if the icon is not
/// `ICON_SIZE x ICON_SIZE`.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn round_corners(
    image: &RgbaImage,
    options: &RoundedCornerOptions,
) -> Result<RgbaImage, IconError> {
    ensure_icon_dimensions(image.width(), image.height())?;
    Ok(apply_rounded_corners(image, options.corner_radius))
}

/// Round the corners of a bitmap of any size.
///
/// # Algorithm
/// 1. Allocate a fully transparent canvas of the source's size
/// 2. Render a rounded rectangle mask spanning the full bounds
/// 3. Paste the source at (0, 0) through the mask
pub fn apply_rounded_corners(image: &RgbaImage, radius: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mask = RoundedRectMask::new(width, height, radius);
    tracing::debug!(radius = mask.effective_radius(), "rendering rounded mask");

    let mut canvas = RgbaImage::new(width, height);
    paste_masked(&mut canvas, image, 0, 0, Some(&mask.render()));
    canvas
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::mask::RoundedRectMask;
    use image::Rgba;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: every output pixel is either the source pixel (inside
        /// the mask) or fully transparent (outside).
        #[test]
        fn prop_output_is_source_or_clear(
            size in 4u32..=48,
            radius in 0u32..=40,
            seed in any::<u8>(),
        ) {
            let src = RgbaImage::from_fn(size, size, |x, y| {
                Rgba([seed.wrapping_add(x as u8), y as u8, 7, 255])
            });
            let out = apply_rounded_corners(&src, radius);
            let mask = RoundedRectMask::new(size, size, radius);

            for (x, y, p) in out.enumerate_pixels() {
                if mask.contains(x, y) {
                    prop_assert_eq!(p, src.get_pixel(x, y));
                } else {
                    prop_assert_eq!(p.0, [0, 0, 0, 0]);
                }
            }
        }
    }
}
