//! Path stitching: turning blob vertices into a closed curve.
//!
//! A [`PathStitcher`] connects an ordered, cyclic list of vertices with
//! quadratic segments. Two strategies ship with the engine:
//!
//! - [`AdvancedStitcher`]: one quad per vertex pair, its control point pulled
//!   back from the next vertex toward the current one by `smoothness`.
//! - [`SimpleStitcher`]: each vertex is the control point of a quad ending at
//!   the midpoint to the next vertex. Ignores `smoothness`.
//!
//! The trait is object-safe, so callers can hold a `Box<dyn PathStitcher>`
//! and new strategies can be added without touching call sites.

use serde::{Deserialize, Serialize};

use crate::error::BlobError;
use crate::geometry::BlobPoint;
use crate::params::MIN_EDGE_COUNT;

/// All stitch method names, in declaration order.
const METHOD_NAMES: &[&str] = &["simple", "advanced"];

/// One drawing instruction after the path's start point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    /// Quadratic curve from the current position through `control` to `to`.
    Quad { control: BlobPoint, to: BlobPoint },
    /// Straight line from the current position to `to`.
    Line { to: BlobPoint },
}

impl PathSegment {
    /// The point this segment ends on.
    pub fn end(&self) -> BlobPoint {
        match *self {
            PathSegment::Quad { to, .. } | PathSegment::Line { to } => to,
        }
    }
}

/// A closed blob outline: a start point, the segments that follow it, and
/// the method that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobPath {
    start: BlobPoint,
    segments: Vec<PathSegment>,
    method: StitchMethod,
}

impl BlobPath {
    /// The first vertex; the path starts and ends here.
    pub fn start(&self) -> BlobPoint {
        self.start
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Stitch method that produced this path.
    pub fn method(&self) -> StitchMethod {
        self.method
    }

    /// Endpoint of the last segment, or the start for an empty path.
    pub fn end(&self) -> BlobPoint {
        self.segments.last().map_or(self.start, PathSegment::end)
    }

    /// Whether the last segment returns exactly to the start point.
    pub fn is_closed(&self) -> bool {
        self.end() == self.start
    }
}

/// Strategy for connecting blob vertices into a closed path.
pub trait PathStitcher {
    /// The method this stitcher implements.
    fn method(&self) -> StitchMethod;

    /// Stitches `points` (cyclic, in angular order) into a closed path.
    ///
    /// Returns `BlobError::InvalidParameter` for fewer than 3 points.
    fn stitch(&self, points: &[BlobPoint]) -> Result<BlobPath, BlobError>;
}

/// Midpoint rounding: every vertex becomes a control point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimpleStitcher;

impl PathStitcher for SimpleStitcher {
    fn method(&self) -> StitchMethod {
        StitchMethod::Simple
    }

    fn stitch(&self, points: &[BlobPoint]) -> Result<BlobPath, BlobError> {
        check_point_count(points)?;
        let start = points[0];
        let mut segments: Vec<PathSegment> = cyclic_pairs(points)
            .map(|(current, next)| PathSegment::Quad {
                control: current,
                to: (current + next) * 0.5,
            })
            .collect();
        // The last quad lands between the last and first vertex.
        segments.push(PathSegment::Line { to: start });
        Ok(BlobPath {
            start,
            segments,
            method: StitchMethod::Simple,
        })
    }
}

/// Pull-back rounding: control points slide from the next vertex toward the
/// current one as `smoothness` grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedStitcher {
    pub smoothness: f64,
}

impl AdvancedStitcher {
    pub fn new(smoothness: f64) -> Self {
        Self { smoothness }
    }

    /// Control point for the segment `current -> next`.
    pub fn control_point(&self, current: BlobPoint, next: BlobPoint) -> BlobPoint {
        next - (next - current) * self.smoothness
    }
}

impl PathStitcher for AdvancedStitcher {
    fn method(&self) -> StitchMethod {
        StitchMethod::Advanced
    }

    fn stitch(&self, points: &[BlobPoint]) -> Result<BlobPath, BlobError> {
        check_point_count(points)?;
        let segments = cyclic_pairs(points)
            .map(|(current, next)| PathSegment::Quad {
                control: self.control_point(current, next),
                to: next,
            })
            .collect();
        Ok(BlobPath {
            start: points[0],
            segments,
            method: StitchMethod::Advanced,
        })
    }
}

/// Selectable stitch strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StitchMethod {
    Simple,
    #[default]
    Advanced,
}

impl StitchMethod {
    /// Parses a method by name.
    ///
    /// Returns `BlobError::UnknownMethod` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, BlobError> {
        match name {
            "simple" => Ok(StitchMethod::Simple),
            "advanced" => Ok(StitchMethod::Advanced),
            _ => Err(BlobError::UnknownMethod(name.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            StitchMethod::Simple => "simple",
            StitchMethod::Advanced => "advanced",
        }
    }

    /// Returns a slice of all recognized method names.
    pub fn list_names() -> &'static [&'static str] {
        METHOD_NAMES
    }

    /// Builds the stitcher for this method. `smoothness` only affects `Advanced`.
    pub fn stitcher(self, smoothness: f64) -> Box<dyn PathStitcher> {
        match self {
            StitchMethod::Simple => Box::new(SimpleStitcher),
            StitchMethod::Advanced => Box::new(AdvancedStitcher::new(smoothness)),
        }
    }
}

/// Stitches `points` into a closed path with the chosen method.
pub fn stitch_path(
    points: &[BlobPoint],
    method: StitchMethod,
    smoothness: f64,
) -> Result<BlobPath, BlobError> {
    method.stitcher(smoothness).stitch(points)
}

fn check_point_count(points: &[BlobPoint]) -> Result<(), BlobError> {
    if points.len() < MIN_EDGE_COUNT {
        return Err(BlobError::invalid(
            "points",
            format!(
                "need at least {MIN_EDGE_COUNT} points to close a path, got {}",
                points.len()
            ),
        ));
    }
    Ok(())
}

/// `(points[i], points[i + 1])` for every `i`, wrapping the last to the first.
fn cyclic_pairs(points: &[BlobPoint]) -> impl Iterator<Item = (BlobPoint, BlobPoint)> + '_ {
    points
        .iter()
        .copied()
        .zip(points.iter().copied().cycle().skip(1))
}
