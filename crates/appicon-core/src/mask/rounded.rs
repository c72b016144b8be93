//! Rounded rectangle mask implementation
//!
//! The mask spans the full image bounds. Each corner is a quarter circle of
//! the configured radius and the edges between corners are straight.

use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

use super::{MASK_OPAQUE, MASK_TRANSPARENT};

/// Rounded rectangle mask covering a `width x height` bitmap.
///
/// # Coordinate System
/// - (0, 0) = top-left corner of the top-left pixel
/// - (width, height) = bottom-right corner of the bottom-right pixel
///
/// Pixels are sampled at their centre, `(x + 0.5, y + 0.5)`.
///
/// # Radius Saturation
/// A radius larger than half the shorter side is clamped to it, so the mask
/// degenerates into the inscribed circle (square bitmap) or a stadium
/// shape (non-square bitmap) instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedRectMask {
    /// Bitmap width in pixels
    pub width: u32,
    /// Bitmap height in pixels
    pub height: u32,
    /// Requested corner radius in pixels
    pub radius: u32,
}

impl RoundedRectMask {
    pub fn new(width: u32, height: u32, radius: u32) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }

    /// Corner radius after clamping to half of the shorter side.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        let half_short = self.width.min(self.height) as f32 / 2.0;
        (self.radius as f32).min(half_short)
    }

    /// Check whether the centre of pixel `(x, y)` lies inside the shape.
    ///
    /// # Algorithm
    /// 1. Clamp the sample point into the inner rectangle whose corners are
    ///    the four arc centres
    /// 2. Inside iff the distance from the sample to the clamped point is at
    ///    most the radius
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let r = self.effective_radius();
        if r <= 0.0 {
            return true;
        }

        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        let cx = px.clamp(r, self.width as f32 - r);
        let cy = py.clamp(r, self.height as f32 - r);

        let dx = px - cx;
        let dy = py - cy;

        dx * dx + dy * dy <= r * r
    }

    /// Mask intensity at pixel `(x, y)`.
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        if self.contains(x, y) {
            MASK_OPAQUE
        } else {
            MASK_TRANSPARENT
        }
    }

    /// Render the mask into a single-channel bitmap.
    pub fn render(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([self.coverage(x, y)])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_covers_everything() {
        let mask = RoundedRectMask::new(32, 32, 0);
        let rendered = mask.render();

        assert!(rendered.pixels().all(|p| p.0[0] == MASK_OPAQUE));
    }

    #[test]
    fn test_corners_are_cut() {
        let mask = RoundedRectMask::new(1024, 1024, 100);

        assert!(!mask.contains(0, 0));
        assert!(!mask.contains(1023, 0));
        assert!(!mask.contains(0, 1023));
        assert!(!mask.contains(1023, 1023));
        // Just outside the arc along the diagonal
        assert!(!mask.contains(28, 28));
    }

    #[test]
    fn test_straight_edges_are_covered() {
        let mask = RoundedRectMask::new(1024, 1024, 100);

        assert!(mask.contains(0, 512));
        assert!(mask.contains(512, 0));
        assert!(mask.contains(1023, 512));
        assert!(mask.contains(512, 1023));
        // Edge pixels right where the arcs start
        assert!(mask.contains(0, 100));
        assert!(mask.contains(100, 0));
    }

    #[test]
    fn test_inside_arc_is_covered() {
        let mask = RoundedRectMask::new(1024, 1024, 100);

        // Diagonal point at distance ~ r * 0.7 from the arc centre (100, 100)
        assert!(mask.contains(50, 50));
        assert!(mask.contains(512, 512));
    }

    #[test]
    fn test_corners_are_symmetric() {
        let mask = RoundedRectMask::new(200, 200, 60);

        for y in 0..200 {
            for x in 0..200 {
                let c = mask.contains(x, y);
                assert_eq!(c, mask.contains(199 - x, y), "mirror x at ({x}, {y})");
                assert_eq!(c, mask.contains(x, 199 - y), "mirror y at ({x}, {y})");
                assert_eq!(c, mask.contains(y, x), "transpose at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_oversized_radius_saturates_to_circle() {
        let clamped = RoundedRectMask::new(1024, 1024, 512);
        let huge = RoundedRectMask::new(1024, 1024, 5000);

        assert_eq!(huge.effective_radius(), 512.0);
        assert_eq!(clamped.render(), huge.render());

        // Inscribed circle: the edge midpoints are covered, the corners well
        // inside the bounding square are not
        assert!(huge.contains(0, 512));
        assert!(huge.contains(512, 512));
        assert!(!huge.contains(100, 100));
    }

    #[test]
    fn test_non_square_radius_clamps_to_short_side() {
        let mask = RoundedRectMask::new(100, 40, 1000);
        assert_eq!(mask.effective_radius(), 20.0);

        // Stadium: the straight top edge between the end caps is covered
        assert!(mask.contains(50, 0));
        assert!(!mask.contains(0, 0));
    }

    #[test]
    fn test_out_of_bounds_is_not_contained() {
        let mask = RoundedRectMask::new(10, 10, 0);
        assert!(!mask.contains(10, 0));
        assert!(!mask.contains(0, 10));
    }

    #[test]
    fn test_render_dimensions() {
        let rendered = RoundedRectMask::new(30, 20, 5).render();
        assert_eq!(rendered.dimensions(), (30, 20));
        assert!(rendered
            .pixels()
            .all(|p| p.0[0] == MASK_OPAQUE || p.0[0] == MASK_TRANSPARENT));
    }
}
