//! Mesh connectivity in LDU addressing form.
//!
//! The limiter consumes connectivity produced by an external mesh provider:
//! owner/neighbour cell ids per interior face, per-cell owner-side face
//! ranges, a neighbour-grouped face ordering (`losort`), and per-patch
//! face-to-cell maps. This module holds those containers, the validating
//! builders that derive the grouped orderings, and small structured meshes
//! for tests and benchmarks.

mod ldu;
mod patch;
mod structured;

pub use ldu::{LduMesh, MeshError};
pub use patch::Patch;
