//! Shape parameters for a blob and the slider ranges that bound them.
//!
//! [`BlobParams`] is an immutable value passed to every generation call.
//! Range enforcement is the caller's contract: UI sliders (and the CLI via
//! [`BlobParams::clamped`]) keep values inside the documented ranges, while
//! the generator itself only rejects an edge count below [`MIN_EDGE_COUNT`].

use crate::json::{param_f64, param_usize};
use crate::shuffle::{shuffle_seed, Xorshift64};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fewest vertices that still form a closed, non-degenerate polygon.
pub const MIN_EDGE_COUNT: usize = 3;
/// Largest edge count offered by the edge slider.
pub const MAX_EDGE_COUNT: usize = 64;

/// Inclusive `(min, max)` bounds for `growth`.
pub const GROWTH_RANGE: (f64, f64) = (1.0, 10.0);
/// Inclusive `(min, max)` bounds for `complexity`.
pub const COMPLEXITY_RANGE: (f64, f64) = (0.0, 1.0);
/// Inclusive `(min, max)` bounds for `smoothness`.
pub const SMOOTHNESS_RANGE: (f64, f64) = (0.0, 1.0);
/// Inclusive `(min, max)` bounds for `frequency`.
pub const FREQUENCY_RANGE: (f64, f64) = (1.0, 20.0);
/// Inclusive `(min, max)` bounds for `amplitude`.
pub const AMPLITUDE_RANGE: (f64, f64) = (0.0, 1.0);

const DEFAULT_EDGE_COUNT: usize = 8;
const DEFAULT_GROWTH: f64 = 6.0;
const DEFAULT_COMPLEXITY: f64 = 0.7;
const DEFAULT_SMOOTHNESS: f64 = 0.5;
const DEFAULT_FREQUENCY: f64 = 4.0;
const DEFAULT_AMPLITUDE: f64 = 0.5;
const DEFAULT_SEED: f64 = 123.45;

/// Parameters controlling the shape of a generated blob.
///
/// Use [`Default`] for the tool's initial slider positions. Missing keys in
/// serialized form take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobParams {
    /// Number of vertices around the center. Must be at least 3.
    pub edge_count: usize,
    /// Base size in [1, 10], interpolating between the min and max radius.
    pub growth: f64,
    /// Scale of the seeded per-vertex noise, in [0, 1].
    pub complexity: f64,
    /// Low-frequency wobble strength and curve pull-back, in [0, 1].
    pub smoothness: f64,
    /// Angular frequency of the sinusoidal ripple, at least 1.
    pub frequency: f64,
    /// Strength of the sinusoidal ripple, in [0, 1].
    pub amplitude: f64,
    /// Deterministic noise seed. Same seed, same blob.
    pub seed: f64,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            edge_count: DEFAULT_EDGE_COUNT,
            growth: DEFAULT_GROWTH,
            complexity: DEFAULT_COMPLEXITY,
            smoothness: DEFAULT_SMOOTHNESS,
            frequency: DEFAULT_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
            seed: DEFAULT_SEED,
        }
    }
}

impl BlobParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Never fails and never clamps; an `edge_count` of 2 is passed through so
    /// the generator can reject it.
    pub fn from_json(params: &Value) -> Self {
        Self {
            edge_count: param_usize(params, "edge_count", DEFAULT_EDGE_COUNT),
            growth: param_f64(params, "growth", DEFAULT_GROWTH),
            complexity: param_f64(params, "complexity", DEFAULT_COMPLEXITY),
            smoothness: param_f64(params, "smoothness", DEFAULT_SMOOTHNESS),
            frequency: param_f64(params, "frequency", DEFAULT_FREQUENCY),
            amplitude: param_f64(params, "amplitude", DEFAULT_AMPLITUDE),
            seed: param_f64(params, "seed", DEFAULT_SEED),
        }
    }

    /// Current parameter values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "edge_count": self.edge_count,
            "growth": self.growth,
            "complexity": self.complexity,
            "smoothness": self.smoothness,
            "frequency": self.frequency,
            "amplitude": self.amplitude,
            "seed": self.seed,
        })
    }

    /// Returns a copy with every real parameter clamped to its slider range.
    ///
    /// Non-finite values are replaced by their defaults. `edge_count` is capped
    /// at [`MAX_EDGE_COUNT`] but is never raised to 3: an edge count below the
    /// minimum stays invalid input.
    pub fn clamped(&self) -> Self {
        Self {
            edge_count: self.edge_count.min(MAX_EDGE_COUNT),
            growth: clamp_or_default(self.growth, GROWTH_RANGE, DEFAULT_GROWTH),
            complexity: clamp_or_default(self.complexity, COMPLEXITY_RANGE, DEFAULT_COMPLEXITY),
            smoothness: clamp_or_default(self.smoothness, SMOOTHNESS_RANGE, DEFAULT_SMOOTHNESS),
            frequency: clamp_or_default(self.frequency, FREQUENCY_RANGE, DEFAULT_FREQUENCY),
            amplitude: clamp_or_default(self.amplitude, AMPLITUDE_RANGE, DEFAULT_AMPLITUDE),
            seed: if self.seed.is_finite() {
                self.seed
            } else {
                DEFAULT_SEED
            },
        }
    }

    /// Returns a copy with a freshly drawn seed; every other parameter is kept.
    pub fn reshuffled(&self, rng: &mut Xorshift64) -> Self {
        Self {
            seed: shuffle_seed(rng),
            ..*self
        }
    }

    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns a copy with the given edge count.
    pub fn with_edge_count(mut self, edge_count: usize) -> Self {
        self.edge_count = edge_count;
        self
    }
}

fn clamp_or_default(value: f64, (min, max): (f64, f64), default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

/// Schema describing every blob parameter: type, range, slider step, default.
pub fn param_schema() -> Value {
    json!({
        "edge_count": {
            "type": "integer",
            "default": DEFAULT_EDGE_COUNT,
            "min": MIN_EDGE_COUNT,
            "max": MAX_EDGE_COUNT,
            "step": 1,
            "description": "Number of vertices spaced evenly around the center"
        },
        "growth": {
            "type": "number",
            "default": DEFAULT_GROWTH,
            "min": GROWTH_RANGE.0,
            "max": GROWTH_RANGE.1,
            "step": 0.1,
            "description": "Base size between the minimum and maximum radius"
        },
        "complexity": {
            "type": "number",
            "default": DEFAULT_COMPLEXITY,
            "min": COMPLEXITY_RANGE.0,
            "max": COMPLEXITY_RANGE.1,
            "step": 0.01,
            "description": "How far seeded noise may push each vertex"
        },
        "smoothness": {
            "type": "number",
            "default": DEFAULT_SMOOTHNESS,
            "min": SMOOTHNESS_RANGE.0,
            "max": SMOOTHNESS_RANGE.1,
            "step": 0.01,
            "description": "Three-lobe wobble strength and curve pull-back"
        },
        "frequency": {
            "type": "number",
            "default": DEFAULT_FREQUENCY,
            "min": FREQUENCY_RANGE.0,
            "max": FREQUENCY_RANGE.1,
            "step": 1,
            "description": "Angular frequency of the edge ripple"
        },
        "amplitude": {
            "type": "number",
            "default": DEFAULT_AMPLITUDE,
            "min": AMPLITUDE_RANGE.0,
            "max": AMPLITUDE_RANGE.1,
            "step": 0.01,
            "description": "Strength of the edge ripple"
        },
        "seed": {
            "type": "number",
            "default": DEFAULT_SEED,
            "description": "Deterministic noise seed; shuffle draws a new one"
        }
    })
}
