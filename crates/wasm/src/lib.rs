#![deny(unsafe_code)]
//! WASM bindings for the blob-engine.
//!
//! Exposes blob generation to a browser page. Parameters cross the boundary
//! as JSON strings; results come back as SVG path data, an SVG document, or
//! JSON. Every export has a plain-Rust twin returning `Result<_, String>` so
//! the logic is testable off the wasm target.

use blob_engine_core::params::param_schema;
use blob_engine_core::shuffle::shuffle_seed;
use blob_engine_core::svg::{path_data, svg_document};
use blob_engine_core::{
    generate_blob, generate_blob_points, BlobParams, BlobPath, Srgb, StitchMethod, Xorshift64,
};
use wasm_bindgen::prelude::*;

fn to_js(msg: String) -> JsValue {
    JsValue::from_str(&msg)
}

/// Parses a params JSON string and clamps it to slider ranges.
fn parse_params(params_json: &str) -> Result<BlobParams, String> {
    let value: serde_json::Value =
        serde_json::from_str(params_json).map_err(|e| format!("invalid params JSON: {e}"))?;
    Ok(BlobParams::from_json(&value).clamped())
}

fn build_path(params_json: &str, method: &str) -> Result<BlobPath, String> {
    let params = parse_params(params_json)?;
    let method = StitchMethod::from_name(method).map_err(|e| e.to_string())?;
    generate_blob(&params, method).map_err(|e| e.to_string())
}

fn path_data_for(params_json: &str, method: &str) -> Result<String, String> {
    build_path(params_json, method).map(|p| path_data(&p))
}

fn svg_for(params_json: &str, method: &str, fill: &str) -> Result<String, String> {
    let fill = Srgb::from_hex(fill).map_err(|e| e.to_string())?;
    build_path(params_json, method).map(|p| svg_document(&p, fill))
}

fn points_for(params_json: &str) -> Result<String, String> {
    let params = parse_params(params_json)?;
    let points = generate_blob_points(&params).map_err(|e| e.to_string())?;
    let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    serde_json::to_string(&pairs).map_err(|e| e.to_string())
}

/// SVG path data (`d` attribute) for a blob.
#[wasm_bindgen(js_name = generatePathData)]
pub fn generate_path_data(params_json: &str, method: &str) -> Result<String, JsValue> {
    path_data_for(params_json, method).map_err(to_js)
}

/// A standalone SVG document for a blob filled with `fill` ("#rrggbb").
#[wasm_bindgen(js_name = generateSvg)]
pub fn generate_svg(params_json: &str, method: &str, fill: &str) -> Result<String, JsValue> {
    svg_for(params_json, method, fill).map_err(to_js)
}

/// Blob vertices as a JSON array of `[x, y]` pairs.
#[wasm_bindgen(js_name = generatePoints)]
pub fn generate_points(params_json: &str) -> Result<String, JsValue> {
    points_for(params_json).map_err(to_js)
}

/// Draws a fresh blob seed from a PRNG seeded with `rng_seed`.
///
/// Pass something like `Date.now()` for a new shape on every click.
#[wasm_bindgen(js_name = shuffleSeed)]
pub fn shuffle(rng_seed: u64) -> f64 {
    shuffle_seed(&mut Xorshift64::new(rng_seed))
}

/// Parameter schema (types, ranges, defaults) as a JSON string, for building sliders.
#[wasm_bindgen(js_name = paramSchema)]
pub fn schema() -> String {
    param_schema().to_string()
}
