//! Accumulation drivers: per-cell sums of limited corrective fluxes.
//!
//! The interior pass is cell-parallel with no mutable aliasing: each cell
//! reads its own faces and writes only its own accumulator slots. The patch
//! pass scatters into global cell slots that interior accumulation (or
//! another patch) may also touch, so its parallel variant reduces locally
//! per patch-cell group and merges sequentially afterwards.
//!
//! Callers zero `suml_phip`/`m_suml_phim` once before the first accumulation
//! of a pass; every driver here adds into the existing values
//! (read-modify-write), so interior and per-patch calls compose into the
//! same global arrays.

use crate::mesh::{LduMesh, Patch};
use crate::types::CellIndex;

use super::kernels::{accumulate_cell, accumulate_patch_group};

/// Accumulate interior-face corrective fluxes into the per-cell sums.
///
/// # Arguments
/// * `mesh` - Interior connectivity
/// * `lambda` - Per-face limiter coefficients, length `n_faces`
/// * `phi_corr` - Per-face corrective fluxes, length `n_faces`
/// * `suml_phip` - Per-cell positive sums, length `n_cells` (updated in place)
/// * `m_suml_phim` - Per-cell negative sums, length `n_cells` (updated in place)
pub fn accumulate_interior(
    mesh: &LduMesh,
    lambda: &[f64],
    phi_corr: &[f64],
    suml_phip: &mut [f64],
    m_suml_phim: &mut [f64],
) {
    for cell in 0..mesh.n_cells {
        let (dp, dm) = accumulate_cell(mesh, CellIndex::new(cell), lambda, phi_corr);
        suml_phip[cell] += dp;
        m_suml_phim[cell] += dm;
    }
}

/// Accumulate one patch's corrective fluxes into the global per-cell sums.
///
/// Single-sided owner logic; each group's contribution is scattered into the
/// slot of the global cell given by the patch addressing.
pub fn accumulate_patch(
    patch: &Patch,
    lambda: &[f64],
    phi_corr: &[f64],
    suml_phip: &mut [f64],
    m_suml_phim: &mut [f64],
) {
    for group in 0..patch.n_groups() {
        let (dp, dm) = accumulate_patch_group(patch, group, lambda, phi_corr);
        let cell = patch.group_cell(group);
        suml_phip[cell] += dp;
        m_suml_phim[cell] += dm;
    }
}

/// Parallel version of [`accumulate_interior`] using Rayon.
///
/// Cell accumulators are disjoint, so each cell is an independent unit of
/// work. Traversal order within a cell is unchanged, keeping results
/// bit-identical to the sequential driver.
#[cfg(feature = "parallel")]
pub fn accumulate_interior_parallel(
    mesh: &LduMesh,
    lambda: &[f64],
    phi_corr: &[f64],
    suml_phip: &mut [f64],
    m_suml_phim: &mut [f64],
) {
    use rayon::prelude::*;

    suml_phip
        .par_iter_mut()
        .zip(m_suml_phim.par_iter_mut())
        .enumerate()
        .for_each(|(cell, (p, m))| {
            let (dp, dm) = accumulate_cell(mesh, CellIndex::new(cell), lambda, phi_corr);
            *p += dp;
            *m += dm;
        });
}

/// Parallel version of [`accumulate_patch`] using Rayon.
///
/// Uses local-reduce-then-merge: group contributions are computed in
/// parallel (pure reads), then scattered sequentially so that groups from
/// this patch and values already present from interior accumulation or other
/// patches are never updated concurrently.
#[cfg(feature = "parallel")]
pub fn accumulate_patch_parallel(
    patch: &Patch,
    lambda: &[f64],
    phi_corr: &[f64],
    suml_phip: &mut [f64],
    m_suml_phim: &mut [f64],
) {
    use rayon::prelude::*;

    // Step 1: Local reduction per group, embarrassingly parallel.
    let deltas: Vec<(f64, f64)> = (0..patch.n_groups())
        .into_par_iter()
        .map(|group| accumulate_patch_group(patch, group, lambda, phi_corr))
        .collect();

    // Step 2: Sequential merge into the shared global slots.
    for (group, (dp, dm)) in deltas.into_iter().enumerate() {
        let cell = patch.group_cell(group);
        suml_phip[cell] += dp;
        m_suml_phim[cell] += dm;
    }
}
