//! # gita-print
//!
//! Printable document rendering - HTML layout only.
//!
//! ## Scope
//!
//! This crate handles HOW documents are laid out:
//! - HTML document building with automatic escaping
//! - Rooming-list table rendering (merged group cells)
//! - Timestamp formatting in the agency timezone
//!
//! Planning logic (WHAT goes on the document) should stay upstream:
//! - Room allocation → gita-alloc
//! - Roster validation → shared
//!
//! ## Example
//!
//! ```ignore
//! use gita_print::{RoomingListContext, RoomingListRenderer};
//!
//! let renderer = RoomingListRenderer::rome();
//! let html = renderer.render(&RoomingListContext {
//!     trip: &trip,
//!     allocation: &allocation,
//!     generated_at: now_millis,
//! });
//! std::fs::write("rooming.html", html)?;
//! ```

mod escape;
mod html;
mod rooming;

// Re-exports
pub use escape::escape_html;
pub use html::HtmlBuilder;
pub use rooming::{RoomingListContext, RoomingListRenderer};
