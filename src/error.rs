//! Error types for treenav
//!
//! Uses `thiserror` for library errors. Rendering is infallible except for
//! structurally broken input (a menu item with no label), so the error
//! surface stays small.

use thiserror::Error;

/// Result type alias for treenav operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Main error type for treenav operations
#[derive(Error, Debug)]
pub enum RenderError {
    /// Menu item without the required `label` field
    #[error("menu item at {path} is missing the required 'label' field")]
    MissingLabel { path: String },

    /// Sidebar config rejected by the deserializer
    #[error("invalid sidebar config: {message}")]
    InvalidConfig { message: String },
}
