//! Error types for the blob-engine core.

use thiserror::Error;

/// Errors produced by blob generation, stitching, and parsing.
#[derive(Debug, Error, PartialEq)]
pub enum BlobError {
    /// A parameter made the blob impossible to build (e.g. fewer than 3 edges).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A stitch method name was not recognized.
    #[error("unknown stitch method: {0}")]
    UnknownMethod(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl BlobError {
    /// Shorthand for [`BlobError::InvalidParameter`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        BlobError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_includes_name_and_reason() {
        let err = BlobError::invalid("edge_count", "must be at least 3, got 2");
        let msg = format!("{err}");
        assert!(msg.contains("edge_count"), "missing param name in: {msg}");
        assert!(msg.contains("at least 3"), "missing reason in: {msg}");
    }

    #[test]
    fn unknown_method_includes_name() {
        let err = BlobError::UnknownMethod("spline".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("spline"),
            "expected message containing 'spline', got: {msg}"
        );
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = BlobError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn blob_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BlobError>();
    }

    #[test]
    fn blob_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<BlobError>();
    }
}
