//! # gita-alloc
//!
//! Rooming and seating allocation - pure planning logic only.
//!
//! ## Scope
//!
//! This crate decides WHO goes WHERE:
//! - Room allocation (group-preserving, capacity-aware partitioning)
//! - Seat geometry (row/column to seat number and back)
//! - Seat map construction with occupancy state
//!
//! Presentation (HOW the plan is shown) stays in application code:
//! - Rooming list rendering → gita-print
//! - Seat map screens → frontend
//!
//! ## Example
//!
//! ```ignore
//! use gita_alloc::{AllocOptions, RoomAllocator};
//!
//! let allocator = RoomAllocator::new(AllocOptions::default());
//! let allocation = allocator.allocate(&roster);
//! for unit in allocation.units() {
//!     println!("camera {} - {:?}", unit.index, unit.category);
//! }
//! ```

mod allocator;
mod seatmap;
mod types;

// Re-exports
pub use allocator::{AllocOptions, CategoryOrder, RoomAllocator};
pub use seatmap::{build_seat_map, seat_number, seat_state, SeatCell, SeatMapView, SeatState};
pub use types::{Allocation, Occupant, Unit};
