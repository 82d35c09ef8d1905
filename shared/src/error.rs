//! Unified error handling
//!
//! The allocation core is total over well-typed input, so the error
//! surface of the workspace is confined to the data boundary:
//! - [`AppError::Validation`] - a roster row from the query layer is
//!   structurally invalid (empty name, over-long field)
//! - [`AppError::InvalidConfig`] - a configured value that cannot be used
//!   (a bus layout with no rows or no seats)
//!
//! Unknown room categories and odd group numbers are NOT errors: the
//! category falls back to `altro` with a warning, and group numbers are
//! accepted as-is and merely affect ordering.

use thiserror::Error;

/// Application error enum
#[derive(Debug, Error)]
pub enum AppError {
    /// Boundary validation failed for a fetched record
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A configuration value is unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for boundary operations
pub type AppResult<T> = Result<T, AppError>;
