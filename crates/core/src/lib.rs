#![deny(unsafe_code)]
//! Core geometry for the blob-engine organic shape generator.
//!
//! Provides `BlobParams` (shape parameters and slider ranges), deterministic
//! vertex generation, the `PathStitcher` strategies that close vertices into a
//! `BlobPath`, SVG path serialization, seed shuffling, and `Recipe`.

pub mod color;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod json;
pub mod params;
pub mod recipe;
pub mod shuffle;
pub mod stitch;
pub mod svg;

pub use color::Srgb;
pub use error::BlobError;
pub use generator::{generate_blob, generate_blob_points};
pub use geometry::{BlobBounds, BlobPoint};
pub use params::BlobParams;
pub use recipe::Recipe;
pub use shuffle::Xorshift64;
pub use stitch::{stitch_path, BlobPath, PathSegment, PathStitcher, StitchMethod};
