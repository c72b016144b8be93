//! WASM bindings for the icon transforms.
//!
//! Each binding decodes the given bytes, runs the validating core transform,
//! and returns the result encoded as PNG. Errors are thrown as strings.

use appicon_core::decode::decode_icon as core_decode;
use appicon_core::encode::encode_rgba_png;
use appicon_core::{BorderInsetOptions, IconError, PrepareOptions, RoundedCornerOptions};
use image::RgbaImage;
use wasm_bindgen::prelude::*;

use crate::types::JsIconImage;

/// Helper struct for deserializing JS prepare options via serde.
///
/// Missing fields fall back to the core defaults.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct PrepareOptionsJs {
    corner_radius: Option<u32>,
    border_fraction: Option<f64>,
}

impl From<PrepareOptionsJs> for PrepareOptions {
    fn from(js: PrepareOptionsJs) -> Self {
        let defaults = PrepareOptions::default();
        PrepareOptions::new(
            js.corner_radius.unwrap_or(defaults.rounded.corner_radius),
            js.border_fraction.unwrap_or(defaults.border.border_fraction),
        )
    }
}

fn to_js_error(err: IconError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn transform_bytes(
    bytes: &[u8],
    op: impl FnOnce(&RgbaImage) -> Result<RgbaImage, IconError>,
) -> Result<Vec<u8>, IconError> {
    let image = core_decode(bytes)?;
    let output = op(&image)?;
    Ok(encode_rgba_png(&output)?)
}

fn round_corners_bytes(bytes: &[u8], corner_radius: u32) -> Result<Vec<u8>, IconError> {
    let options = RoundedCornerOptions { corner_radius };
    transform_bytes(bytes, |img| appicon_core::round_corners(img, &options))
}

fn add_border_bytes(bytes: &[u8], border_fraction: f64) -> Result<Vec<u8>, IconError> {
    let options = BorderInsetOptions {
        border_fraction,
        ..Default::default()
    };
    transform_bytes(bytes, |img| appicon_core::add_border(img, &options))
}

fn prepare_icon_bytes(bytes: &[u8], options: &PrepareOptions) -> Result<Vec<u8>, IconError> {
    transform_bytes(bytes, |img| appicon_core::prepare_icon(img, options))
}

/// Round the corners of a 1024x1024 icon.
///
/// # Arguments
///
/// * `bytes` - Encoded source image (PNG or JPEG)
/// * `corner_radius` - Corner radius in pixels (recommended: 100)
///
/// # Returns
///
/// PNG bytes of the rounded icon.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = round_corners(bytes, 100);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn round_corners(bytes: &[u8], corner_radius: u32) -> Result<Vec<u8>, JsValue> {
    round_corners_bytes(bytes, corner_radius).map_err(to_js_error)
}

/// Scale a 1024x1024 icon down and centre it inside a transparent border.
///
/// # Arguments
///
/// * `bytes` - Encoded source image (PNG or JPEG)
/// * `border_fraction` - Margin on each side as a fraction of the side
///   length (recommended: 0.05)
#[wasm_bindgen]
pub fn add_border(bytes: &[u8], border_fraction: f64) -> Result<Vec<u8>, JsValue> {
    add_border_bytes(bytes, border_fraction).map_err(to_js_error)
}

/// Round the corners of a 1024x1024 icon and inset it in a border.
///
/// # Arguments
///
/// * `bytes` - Encoded source image (PNG or JPEG)
/// * `options` - `{ corner_radius?: number, border_fraction?: number }`;
///   `undefined` uses the defaults
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = prepare_icon(bytes, { corner_radius: 180 });
/// ```
#[wasm_bindgen]
pub fn prepare_icon(bytes: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: PrepareOptionsJs = if options.is_undefined() || options.is_null() {
        PrepareOptionsJs::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid prepare options: {}", e)))?
    };

    prepare_icon_bytes(bytes, &options.into()).map_err(to_js_error)
}

/// Decode image bytes into RGBA pixels for previewing on a canvas.
#[wasm_bindgen]
pub fn decode_icon(bytes: &[u8]) -> Result<JsIconImage, JsValue> {
    core_decode(bytes)
        .map(JsIconImage::from_rgba)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
