//! Reproducible description of a blob.
//!
//! A [`Recipe`] captures everything needed to recreate a blob: shape
//! parameters, stitch method, and fill color. Two identical recipes produce
//! bit-identical paths.

use crate::color::Srgb;
use crate::error::BlobError;
use crate::generator::{generate_blob, validate_params};
use crate::params::BlobParams;
use crate::stitch::{BlobPath, StitchMethod};
use serde::{Deserialize, Serialize};

/// Reproducible specification for a blob. Missing keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub params: BlobParams,
    pub method: StitchMethod,
    pub fill: Srgb,
}

impl Recipe {
    /// Creates a recipe with the default fill.
    pub fn new(params: BlobParams, method: StitchMethod) -> Self {
        Self {
            params,
            method,
            fill: Srgb::default(),
        }
    }

    /// Checks that the recipe can produce a blob, with the same rules
    /// generation applies.
    pub fn validate(&self) -> Result<(), BlobError> {
        validate_params(&self.params)
    }

    /// Generates the blob path this recipe describes.
    pub fn generate(&self) -> Result<BlobPath, BlobError> {
        generate_blob(&self.params, self.method)
    }
}
