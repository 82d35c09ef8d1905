//! Data models
//!
//! Typed projections of the rows the external query service returns.
//! Validation happens here at the boundary, so the allocation core only
//! ever sees well-formed types.

pub mod bus;
pub mod participant;
pub mod room;
pub mod trip;

// Re-exports
pub use bus::*;
pub use participant::*;
pub use room::*;
pub use trip::*;
