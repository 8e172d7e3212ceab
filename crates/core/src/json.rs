//! Lenient helpers for pulling typed values out of a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key or
//! a value of the wrong type yields the default, so a half-filled params object
//! from a web form still produces a usable blob.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// JSON integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative integers are accepted; `2.5` or `-1` fall back to `default`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}
