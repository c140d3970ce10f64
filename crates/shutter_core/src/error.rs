//! Error types for shutter_core

use thiserror::Error;

/// Errors produced by core primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A color string was not `#RRGGBB` or `#AARRGGBB`
    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}

/// Result type for shutter_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
