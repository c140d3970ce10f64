//! Error types for shutter_widgets

use thiserror::Error;

/// Errors raised while building widgets
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// Widget size was negative, NaN or infinite
    #[error("invalid widget size {0}: must be finite and non-negative")]
    InvalidSize(f32),
}

/// Result type for shutter_widgets operations
pub type Result<T> = std::result::Result<T, WidgetError>;
