//! Error types for scene descriptions

use thiserror::Error;

/// Result type alias using the scene error type
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised while loading or building a scene description
#[derive(Error, Debug)]
pub enum SceneError {
    /// A node of the description was rejected by the kernel
    #[error("Shape construction failed: {0}")]
    Shape(#[from] sdforge_core::Error),

    /// Malformed JSON or a description that does not match the schema
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Union with no operands
    #[error("Union needs at least one shape")]
    EmptyUnion,

    /// Blend kind used where only its min-type form exists
    #[error("Blend '{0}' has no max-type form")]
    UnsupportedBlend(&'static str),
}
