//! # Error Types
//!
//! Structured errors for the regview workspace, built with `thiserror`.
//!
//! The view-model operations themselves never fail: unknown framework
//! keys degrade to identity behavior and malformed IDs parse best-effort.
//! Errors exist only at the boundaries where something is explicitly
//! parsed or loaded (framework keys, dataset files).

use thiserror::Error;

/// Top-level error type for the regview workspace.
#[derive(Error, Debug)]
pub enum RegviewError {
    /// Input validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for explicitly parsed inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The string is neither a canonical framework key nor a registered
    /// alias.
    #[error("unknown framework key: \"{0}\"")]
    UnknownFramework(String),
}
