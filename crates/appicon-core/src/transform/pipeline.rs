//! Rounded corners followed by the border inset, producing a finished
//! app icon from a square source.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::{add_border, round_corners, BorderInsetOptions, RoundedCornerOptions};
use crate::IconError;

/// Options for [`prepare_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareOptions {
    pub rounded: RoundedCornerOptions,
    pub border: BorderInsetOptions,
}

impl PrepareOptions {
    pub fn new(corner_radius: u32, border_fraction: f64) -> Self {
        Self {
            rounded: RoundedCornerOptions { corner_radius },
            border: BorderInsetOptions {
                border_fraction,
                ..Default::default()
            },
        }
    }
}

/// Round the corners of an `ICON_SIZE` icon, then inset it in a border.
///
/// # Errors
///
/// Returns `IconError::InvalidInputDimensions` if the icon is not
/// `ICON_SIZE x ICON_SIZE`.
pub fn prepare_icon(image: &RgbaImage, options: &PrepareOptions) -> Result<RgbaImage, IconError> {
    let rounded = round_corners(image, &options.rounded)?;
    add_border(&rounded, &options.border)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ICON_SIZE;
    use image::Rgba;

    #[test]
    fn test_default_options() {
        let opts = PrepareOptions::default();
        assert_eq!(opts.rounded.corner_radius, 100);
        assert_eq!(opts.border.border_fraction, 0.05);
        assert_eq!(opts, PrepareOptions::new(100, 0.05));
    }

    #[test]
    fn test_prepare_matches_manual_chain() {
        let src = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba([0, 128, 255, 255]));
        let opts = PrepareOptions::default();

        let chained = add_border(
            &round_corners(&src, &opts.rounded).unwrap(),
            &opts.border,
        )
        .unwrap();

        assert_eq!(prepare_icon(&src, &opts).unwrap(), chained);
    }

    #[test]
    fn test_prepare_layout() {
        let src = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba([0, 128, 255, 255]));
        let out = prepare_icon(&src, &PrepareOptions::default()).unwrap();

        assert_eq!(out.dimensions(), (ICON_SIZE, ICON_SIZE));
        // Margin and the rounded corner of the inset content are clear
        assert_eq!(out.get_pixel(10, 10).0[3], 0);
        assert_eq!(out.get_pixel(52, 52).0[3], 0);
        // Centre is opaque
        assert_eq!(out.get_pixel(512, 512).0[3], 255);
    }

    #[test]
    fn test_prepare_rejects_wrong_size() {
        let result = prepare_icon(&RgbaImage::new(1024, 768), &PrepareOptions::default());
        assert!(matches!(
            result,
            Err(IconError::InvalidInputDimensions {
                width: 1024,
                height: 768,
                ..
            })
        ));
    }
}
