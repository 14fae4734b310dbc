//! Limiter solver components.
//!
//! # Submodules
//!
//! - [`kernels`]: Pure per-cell and per-face stage functions
//! - [`accumulate`]: Corrective-flux accumulation drivers
//! - [`blend`]: Final per-cell limiter blend
//! - [`limit`]: Per-face limiter-coefficient tightening
//! - [`pass`]: One-pass composition and scratch buffers
//! - [`burn`]: Tensor-offloaded stages (feature `burn`)
//!
//! Every stage comes in a sequential flavour and, behind the `parallel`
//! feature, a rayon flavour with identical numerics.

pub mod accumulate;
pub mod blend;
#[cfg(feature = "burn")]
pub mod burn;
pub mod kernels;
pub mod limit;
pub mod pass;

// Re-export kernels
pub use kernels::{
    accumulate_cell, accumulate_patch_group, blend_negative, blend_positive, tighten_interior,
    tighten_patch,
};

// Re-export drivers
pub use accumulate::{accumulate_interior, accumulate_patch};
pub use blend::{blend_limiter_negative, blend_limiter_positive, LimiterConfig, SMALL};
pub use limit::{update_interior_lambda, update_patch_lambda};
pub use pass::{limiter_pass, PatchFields, Workspace};

#[cfg(feature = "parallel")]
pub use accumulate::{accumulate_interior_parallel, accumulate_patch_parallel};

#[cfg(feature = "parallel")]
pub use blend::{blend_limiter_negative_parallel, blend_limiter_positive_parallel};

#[cfg(feature = "parallel")]
pub use limit::{update_interior_lambda_parallel, update_patch_lambda_parallel};

#[cfg(feature = "parallel")]
pub use pass::limiter_pass_parallel;
