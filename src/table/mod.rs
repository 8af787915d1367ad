//! Table Module
//!
//! Fixed-capacity, append-only storage for one row type.
//!
//! ## Responsibilities
//! - Assign row indices in append order (0-based, stable once assigned)
//! - Enforce the capacity bound set at construction
//! - Indexed reads within the occupied range
//!
//! ## Data Structure Choice
//! A `Vec` preallocated to capacity: rows never move or get removed, so
//! the row index is simply the position in the vector.

mod store;

pub use store::TableStore;
