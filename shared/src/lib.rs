//! Shared types for the Gita back-office core
//!
//! Common types used by the allocation and printing crates: domain models
//! for trips, participants, room categories and bus layouts, the unified
//! error type, and the text utilities printed lists are ordered with.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
