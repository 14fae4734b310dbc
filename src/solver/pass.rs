//! One full limiter pass: accumulate, blend, tighten.
//!
//! The pass driver owns the stage sequencing that the concurrency model
//! requires: all accumulation (interior plus every patch) completes before
//! the blend reads the totals, and both blend branches complete before any
//! face coefficient is tightened. The outer fixed-point loop (repeating
//! passes until `lambda` stabilizes or an iteration budget runs out) belongs
//! to the calling solver, as does any inter-process exchange of coupled
//! patch values between passes.
//!
//! Per pass, `lambda` only ever decreases element-wise, so repeated passes
//! converge monotonically regardless of the iteration budget.

use crate::mesh::{LduMesh, Patch};

use super::accumulate::{accumulate_interior, accumulate_patch};
use super::blend::{blend_limiter_negative, blend_limiter_positive, LimiterConfig};
use super::limit::{update_interior_lambda, update_patch_lambda};

/// Transient per-pass buffers, owned by the driver side and zeroed before
/// each accumulation.
///
/// The limiter core itself holds no state between passes; this container
/// just keeps the four scratch arrays together and the same length.
#[derive(Clone, Debug)]
pub struct Workspace {
    /// Per-cell positive corrective sums
    pub suml_phip: Vec<f64>,
    /// Per-cell sign-flipped negative corrective sums
    pub m_suml_phim: Vec<f64>,
    /// Per-cell positive-branch blend output
    pub lambda_plus: Vec<f64>,
    /// Per-cell negative-branch blend output
    pub lambda_minus: Vec<f64>,
}

impl Workspace {
    /// Allocate zeroed buffers for `n_cells` cells.
    pub fn new(n_cells: usize) -> Self {
        Self {
            suml_phip: vec![0.0; n_cells],
            m_suml_phim: vec![0.0; n_cells],
            lambda_plus: vec![0.0; n_cells],
            lambda_minus: vec![0.0; n_cells],
        }
    }

    /// Number of cells the workspace is sized for.
    pub fn n_cells(&self) -> usize {
        self.suml_phip.len()
    }

    /// Zero the accumulators ahead of a new accumulation pass.
    pub fn reset(&mut self) {
        self.suml_phip.fill(0.0);
        self.m_suml_phim.fill(0.0);
    }
}

/// One patch's per-pass fields: addressing plus its face arrays.
pub struct PatchFields<'a> {
    /// Patch addressing
    pub patch: &'a Patch,
    /// Patch-local corrective fluxes, length `patch.n_faces()`
    pub phi_corr: &'a [f64],
    /// Patch-local limiter coefficients, length `patch.n_faces()`
    /// (tightened in place)
    pub lambda: &'a mut [f64],
}

/// Run one limiter pass over the whole mesh.
///
/// Stages, in order: zero accumulators, accumulate interior faces,
/// accumulate each patch, blend both branches, tighten interior `lambda`,
/// tighten each patch's `lambda`. All per-cell inputs are read-only for the
/// duration of the pass.
///
/// # Arguments
/// * `mesh` - Interior connectivity
/// * `phi_corr` - Interior corrective fluxes, length `n_faces`
/// * `psi_min`, `psi_max` - Per-cell admissible bounds, length `n_cells`
/// * `sum_phi` - Per-cell total flux reference, length `n_cells`
/// * `lambda` - Interior limiter coefficients, length `n_faces` (tightened in place)
/// * `patches` - Per-patch addressing and fields
/// * `config` - Blend parameters
/// * `ws` - Scratch buffers sized for `n_cells`
#[allow(clippy::too_many_arguments)]
pub fn limiter_pass(
    mesh: &LduMesh,
    phi_corr: &[f64],
    psi_min: &[f64],
    psi_max: &[f64],
    sum_phi: &[f64],
    lambda: &mut [f64],
    patches: &mut [PatchFields<'_>],
    config: &LimiterConfig,
    ws: &mut Workspace,
) {
    ws.reset();

    accumulate_interior(mesh, lambda, phi_corr, &mut ws.suml_phip, &mut ws.m_suml_phim);
    for p in patches.iter() {
        accumulate_patch(
            p.patch,
            p.lambda,
            p.phi_corr,
            &mut ws.suml_phip,
            &mut ws.m_suml_phim,
        );
    }

    blend_limiter_positive(&ws.suml_phip, psi_max, sum_phi, config, &mut ws.lambda_plus);
    blend_limiter_negative(&ws.m_suml_phim, psi_min, sum_phi, config, &mut ws.lambda_minus);

    update_interior_lambda(mesh, phi_corr, &ws.lambda_plus, &ws.lambda_minus, lambda);
    for p in patches.iter_mut() {
        update_patch_lambda(p.patch, p.phi_corr, &ws.lambda_plus, &ws.lambda_minus, p.lambda);
    }
}

/// Parallel version of [`limiter_pass`] using Rayon.
///
/// Stage boundaries double as synchronization barriers: each parallel stage
/// joins before the next starts, so accumulate-before-blend ordering holds
/// exactly as in the sequential driver, and the results are bit-identical.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn limiter_pass_parallel(
    mesh: &LduMesh,
    phi_corr: &[f64],
    psi_min: &[f64],
    psi_max: &[f64],
    sum_phi: &[f64],
    lambda: &mut [f64],
    patches: &mut [PatchFields<'_>],
    config: &LimiterConfig,
    ws: &mut Workspace,
) {
    use super::accumulate::{accumulate_interior_parallel, accumulate_patch_parallel};
    use super::blend::{blend_limiter_negative_parallel, blend_limiter_positive_parallel};
    use super::limit::{update_interior_lambda_parallel, update_patch_lambda_parallel};

    ws.reset();

    accumulate_interior_parallel(mesh, lambda, phi_corr, &mut ws.suml_phip, &mut ws.m_suml_phim);
    for p in patches.iter() {
        accumulate_patch_parallel(
            p.patch,
            p.lambda,
            p.phi_corr,
            &mut ws.suml_phip,
            &mut ws.m_suml_phim,
        );
    }

    blend_limiter_positive_parallel(&ws.suml_phip, psi_max, sum_phi, config, &mut ws.lambda_plus);
    blend_limiter_negative_parallel(&ws.m_suml_phim, psi_min, sum_phi, config, &mut ws.lambda_minus);

    update_interior_lambda_parallel(mesh, phi_corr, &ws.lambda_plus, &ws.lambda_minus, lambda);
    for p in patches.iter_mut() {
        update_patch_lambda_parallel(p.patch, p.phi_corr, &ws.lambda_plus, &ws.lambda_minus, p.lambda);
    }
}
