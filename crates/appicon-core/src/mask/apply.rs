//! Masked compositing
//!
//! This module pastes a source bitmap onto a canvas, blending each pixel
//! by the source alpha scaled by an optional single-channel mask.

use image::{GrayImage, Rgba, RgbaImage};

use super::MASK_OPAQUE;

/// Paste `source` onto `canvas` with its top-left corner at `(x, y)`.
///
/// # Arguments
/// * `canvas` - Destination bitmap, modified in place
/// * `source` - Bitmap to paste
/// * `x`, `y` - Offset of the source's top-left corner on the canvas
/// * `mask` - Optional L bitmap with the source's dimensions. When omitted
///   the source's own alpha channel is the blend mask.
///
/// # Algorithm
/// For each source pixel that lands on the canvas:
/// 1. Effective alpha: `a = source_alpha * mask / 255`
/// 2. If `a` is zero the canvas pixel is left untouched
/// 3. Otherwise blend source-over: `out_a = a + canvas_a * (1 - a)` and each
///    colour channel is the alpha-weighted mean of source and canvas
///
/// On a fully transparent canvas this yields the source colour with alpha
/// `a`, so a fully covered pixel is copied exactly.
///
/// An intermediate mask value only scales coverage: the source colour is
/// kept and its alpha drops, which is the premultiplied-space blend toward
/// a clear canvas. A straight per-channel lerp (Pillow's `paste`) would also
/// pull the colour toward the canvas's black RGB. The corner and inset
/// transforms only use masks of 0 and 255, where both agree.
pub fn paste_masked(
    canvas: &mut RgbaImage,
    source: &RgbaImage,
    x: u32,
    y: u32,
    mask: Option<&GrayImage>,
) {
    debug_assert!(
        mask.map_or(true, |m| m.dimensions() == source.dimensions()),
        "Mask size mismatch"
    );

    let (canvas_w, canvas_h) = canvas.dimensions();
    if x >= canvas_w || y >= canvas_h {
        return;
    }

    // Clip the pasted region to the canvas
    let paste_w = source.width().min(canvas_w - x);
    let paste_h = source.height().min(canvas_h - y);

    for sy in 0..paste_h {
        for sx in 0..paste_w {
            let mask_val = match mask {
                Some(m) => m.get_pixel_checked(sx, sy).map_or(0, |p| p.0[0]),
                None => MASK_OPAQUE,
            };
            if mask_val == 0 {
                continue;
            }

            let src = source.get_pixel(sx, sy);
            let dst = canvas.get_pixel_mut(x + sx, y + sy);
            *dst = blend_over(*dst, *src, mask_val);
        }
    }
}

/// Blend `src` over `dst` with the source alpha scaled by `mask_val`.
///
/// The mask multiplies coverage only; colour channels stay straight.
#[inline]
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, mask_val: u8) -> Rgba<u8> {
    let a = (src.0[3] as f32 / 255.0) * (mask_val as f32 / 255.0);
    if a <= 0.0 {
        return dst;
    }

    // Fully covered: the source replaces the canvas
    if src.0[3] == 255 && mask_val == MASK_OPAQUE {
        return src;
    }

    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = a + dst_a * (1.0 - a);

    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = src.0[c] as f32;
        let d = dst.0[c] as f32;
        let v = (s * a + d * dst_a * (1.0 - a)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgba(out)
}
