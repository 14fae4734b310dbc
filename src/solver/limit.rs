//! Limiter-coefficient update drivers: per-face tightening of `lambda`.
//!
//! Each face is written at most once per pass and only ever decreases, so
//! the face loop is embarrassingly parallel for both interior and patch
//! faces. Interior faces gather the owner's and neighbour's branch values;
//! patch faces gather a single cell's values through `p_cell`.

use crate::mesh::{LduMesh, Patch};

use super::kernels::{tighten_interior, tighten_patch};

/// Tighten the interior-face limiter coefficients in place.
///
/// # Arguments
/// * `mesh` - Interior connectivity
/// * `phi_corr` - Per-face corrective fluxes, length `n_faces`
/// * `lambda_plus` - Per-cell positive-branch values, length `n_cells`
/// * `lambda_minus` - Per-cell negative-branch values, length `n_cells`
/// * `lambda` - Per-face limiter coefficients, length `n_faces` (tightened in place)
pub fn update_interior_lambda(
    mesh: &LduMesh,
    phi_corr: &[f64],
    lambda_plus: &[f64],
    lambda_minus: &[f64],
    lambda: &mut [f64],
) {
    for (face, l) in lambda.iter_mut().enumerate() {
        let own = mesh.owner[face];
        let nei = mesh.neighbour[face];
        *l = tighten_interior(
            *l,
            phi_corr[face],
            lambda_plus[own],
            lambda_minus[own],
            lambda_plus[nei],
            lambda_minus[nei],
        );
    }
}

/// Tighten one patch's limiter coefficients in place.
pub fn update_patch_lambda(
    patch: &Patch,
    phi_corr: &[f64],
    lambda_plus: &[f64],
    lambda_minus: &[f64],
    lambda: &mut [f64],
) {
    for (face, l) in lambda.iter_mut().enumerate() {
        let cell = patch.p_cell[face];
        *l = tighten_patch(*l, phi_corr[face], lambda_plus[cell], lambda_minus[cell]);
    }
}

/// Parallel version of [`update_interior_lambda`] using Rayon.
#[cfg(feature = "parallel")]
pub fn update_interior_lambda_parallel(
    mesh: &LduMesh,
    phi_corr: &[f64],
    lambda_plus: &[f64],
    lambda_minus: &[f64],
    lambda: &mut [f64],
) {
    use rayon::prelude::*;

    lambda.par_iter_mut().enumerate().for_each(|(face, l)| {
        let own = mesh.owner[face];
        let nei = mesh.neighbour[face];
        *l = tighten_interior(
            *l,
            phi_corr[face],
            lambda_plus[own],
            lambda_minus[own],
            lambda_plus[nei],
            lambda_minus[nei],
        );
    });
}

/// Parallel version of [`update_patch_lambda`] using Rayon.
#[cfg(feature = "parallel")]
pub fn update_patch_lambda_parallel(
    patch: &Patch,
    phi_corr: &[f64],
    lambda_plus: &[f64],
    lambda_minus: &[f64],
    lambda: &mut [f64],
) {
    use rayon::prelude::*;

    lambda.par_iter_mut().enumerate().for_each(|(face, l)| {
        let cell = patch.p_cell[face];
        *l = tighten_patch(*l, phi_corr[face], lambda_plus[cell], lambda_minus[cell]);
    });
}
