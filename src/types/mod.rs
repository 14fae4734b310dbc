//! Strongly-typed domain types for safer APIs.
//!
//! The cell-index newtype keeps cell ids from being mixed up with face
//! positions in the addressing-heavy kernel code. It is
//! `#[repr(transparent)]` and costs nothing at runtime.

mod indices;

pub use indices::CellIndex;
