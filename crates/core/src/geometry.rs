//! Fixed canvas geometry every blob is generated on.
//!
//! The radius bounds are derived from the canvas size, not from user input:
//! a blob never touches the canvas edge and never collapses to its center.

use crate::error::BlobError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A vertex of a blob, in canvas coordinates.
pub type BlobPoint = DVec2;

/// Logical width and height of the square canvas (and SVG viewBox).
pub const CANVAS_SIZE: f64 = 480.0;
/// Largest allowed radius as a fraction of the half canvas.
pub const MAX_RADIUS_FRACTION: f64 = 0.8;
/// Smallest allowed radius as a fraction of the half canvas.
pub const MIN_RADIUS_FRACTION: f64 = 0.2;

/// Center and radius bounds of a square blob canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlobBounds {
    pub size: f64,
    pub center: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl BlobBounds {
    /// Bounds of the standard 480x480 canvas: center 240, radius in [48, 192].
    pub const STANDARD: BlobBounds = BlobBounds {
        size: CANVAS_SIZE,
        center: CANVAS_SIZE / 2.0,
        min_radius: 48.0,
        max_radius: 192.0,
    };

    /// Derives center and radius bounds for a square canvas of `size`.
    ///
    /// Returns `BlobError::InvalidParameter` unless `size` is finite and positive.
    pub fn for_canvas(size: f64) -> Result<Self, BlobError> {
        let center = size / 2.0;
        let bounds = Self {
            size,
            center,
            min_radius: center * MIN_RADIUS_FRACTION,
            max_radius: center * MAX_RADIUS_FRACTION,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks that the bounds describe a real canvas: finite, positive size
    /// and `0 < min_radius <= max_radius`.
    pub fn validate(&self) -> Result<(), BlobError> {
        let fields = [self.size, self.center, self.min_radius, self.max_radius];
        if fields.iter().any(|v| !v.is_finite()) || self.size <= 0.0 {
            return Err(BlobError::invalid(
                "size",
                format!("canvas size must be finite and positive, got {}", self.size),
            ));
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(BlobError::invalid(
                "radius",
                format!(
                    "need 0 < min_radius <= max_radius, got [{}, {}]",
                    self.min_radius, self.max_radius
                ),
            ));
        }
        Ok(())
    }

    /// The canvas center as a point.
    pub fn center_point(&self) -> BlobPoint {
        DVec2::splat(self.center)
    }

    /// Nominal radius for a growth value: `growth / 10` of the way from min to max.
    pub fn base_radius(&self, growth: f64) -> f64 {
        self.min_radius + (self.max_radius - self.min_radius) * (growth / 10.0)
    }

    /// Clamps a radius into `[min_radius, max_radius]`.
    ///
    /// NaN maps to `min_radius` and infinities to the nearer bound; unlike
    /// `f64::clamp` this never returns NaN and never panics.
    pub fn clamp_radius(&self, radius: f64) -> f64 {
        radius.max(self.min_radius).min(self.max_radius)
    }

    /// Whether `radius` lies within the bounds, allowing `tolerance` on both sides.
    pub fn contains_radius(&self, radius: f64, tolerance: f64) -> bool {
        radius >= self.min_radius - tolerance && radius <= self.max_radius + tolerance
    }

    /// Converts polar coordinates around the center to a canvas point.
    pub fn polar(&self, angle: f64, radius: f64) -> BlobPoint {
        self.center_point() + DVec2::new(angle.cos(), angle.sin()) * radius
    }
}

impl Default for BlobBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}
