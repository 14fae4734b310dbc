//! Tensor-offloaded limiter stages using Burn.
//!
//! The elementwise stages (final blend, per-face tightening) are expressed
//! as batched tensor operations and run on any Burn backend: NdArray on the
//! host, WGPU or CUDA on accelerators. Kernels reproduce the host drivers'
//! numerics exactly, so a device pass and a host pass agree bit-for-bit on
//! the same inputs.
//!
//! The accumulation stage traverses variable-length per-cell face ranges
//! and remains on the host drivers; the typical split is host accumulate,
//! device blend + tighten.

pub mod backend;
pub mod connectivity;
pub mod kernels;

pub use backend::{tensor_from_field, tensor_from_indices, tensor_to_field, LimiterBackend};
pub use connectivity::{DeviceConnectivity, DevicePatch};
pub use kernels::{
    blend_negative_batched, blend_positive_batched, gather_cell_values, tighten_interior_batched,
    tighten_patch_batched,
};
