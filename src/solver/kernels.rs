//! Pure per-cell and per-face limiter kernels.
//!
//! Each function here is a pure function of its inputs and the single output
//! slot it produces, so the same code backs the sequential drivers, the
//! rayon-parallel drivers, and (for the elementwise stages) the tensor
//! backend. Traversal order is fixed: owner-side faces in ascending face id,
//! then neighbour-side faces in `losort` order. This keeps results
//! bit-identical across backends.
//!
//! Sign conventions follow the owner's perspective: a positive corrective
//! flux leaves the owner and enters the neighbour. A zero flux is classified
//! by the strict `> 0` comparison into the negative branch; this tie-break
//! is deliberate and must not be changed.

use crate::mesh::{LduMesh, Patch};
use crate::types::CellIndex;

/// Accumulate the limited corrective-flux sums for one cell's interior faces.
///
/// Returns the `(sumlPhip, mSumlPhim)` contribution of `cell`: the sum of
/// positive `lambda * phiCorr` magnitudes and the (sign-flipped) sum of
/// negative ones, with owner-side and neighbour-side sign roles inverted
/// because flux direction is defined from the owner's perspective.
#[inline]
pub fn accumulate_cell(
    mesh: &LduMesh,
    cell: CellIndex,
    lambda: &[f64],
    phi_corr: &[f64],
) -> (f64, f64) {
    let mut suml_phip = 0.0;
    let mut m_suml_phim = 0.0;

    for face in mesh.owner_faces(cell) {
        let lambda_phi_corr = lambda[face] * phi_corr[face];
        if lambda_phi_corr > 0.0 {
            suml_phip += lambda_phi_corr;
        } else {
            m_suml_phim -= lambda_phi_corr;
        }
    }

    for &face in mesh.neighbour_faces(cell) {
        let lambda_phi_corr = lambda[face] * phi_corr[face];
        if lambda_phi_corr > 0.0 {
            m_suml_phim += lambda_phi_corr;
        } else {
            suml_phip -= lambda_phi_corr;
        }
    }

    (suml_phip, m_suml_phim)
}

/// Accumulate the limited corrective-flux sums for one patch cell group.
///
/// Patch faces have no interior neighbour, so only the owner-side logic
/// applies. Returns the `(sumlPhip, mSumlPhim)` contribution for the group's
/// global cell; the caller scatters it into the global accumulators.
#[inline]
pub fn accumulate_patch_group(
    patch: &Patch,
    group: usize,
    lambda: &[f64],
    phi_corr: &[f64],
) -> (f64, f64) {
    let mut suml_phip = 0.0;
    let mut m_suml_phim = 0.0;

    for &face in patch.group_faces(group) {
        let lambda_phi_corr = lambda[face] * phi_corr[face];
        if lambda_phi_corr > 0.0 {
            suml_phip += lambda_phi_corr;
        } else {
            m_suml_phim -= lambda_phi_corr;
        }
    }

    (suml_phip, m_suml_phim)
}

/// Positive-branch blend: the per-cell limiter value against the upper bound.
///
/// Computes `min(max((sumlPhip + psiMax) / (sumPhi + epsilon), 0), 1)`. The
/// epsilon biases the denominator away from zero, making the function total.
/// The min/max pair (not `clamp`) is deliberate: `f64::min`/`f64::max`
/// return the non-NaN operand, so a 0/0 ratio (numerator zero with
/// `sumPhi == -epsilon` exactly) resolves to 1 instead of propagating NaN.
#[inline]
pub fn blend_positive(suml_phip: f64, psi_max: f64, sum_phi: f64, epsilon: f64) -> f64 {
    ((suml_phip + psi_max) / (sum_phi + epsilon)).min(1.0).max(0.0)
}

/// Negative-branch blend: the per-cell limiter value against the lower bound.
///
/// Computes `min(max((mSumlPhim + psiMin) / (sumPhi - epsilon), 0), 1)`; the
/// epsilon is subtracted so the denominator is biased in the branch-
/// appropriate direction. The min/max pair absorbs a 0/0 ratio the same way
/// as [`blend_positive`].
#[inline]
pub fn blend_negative(m_suml_phim: f64, psi_min: f64, sum_phi: f64, epsilon: f64) -> f64 {
    ((m_suml_phim + psi_min) / (sum_phi - epsilon)).min(1.0).max(0.0)
}

/// Tighten one interior face's limiter coefficient.
///
/// A face with positive corrective flux feeds `sumlPhip` on the owner side
/// and `mSumlPhim` on the neighbour side, so it is constrained by the
/// owner's positive-branch value and the neighbour's negative-branch value;
/// the roles swap for non-positive flux. The result never exceeds the
/// incoming `lambda`.
#[inline]
pub fn tighten_interior(
    lambda: f64,
    phi_corr: f64,
    plus_own: f64,
    minus_own: f64,
    plus_nei: f64,
    minus_nei: f64,
) -> f64 {
    if phi_corr > 0.0 {
        lambda.min(plus_own.min(minus_nei))
    } else {
        lambda.min(minus_own.min(plus_nei))
    }
}

/// Tighten one patch face's limiter coefficient.
///
/// Single-sided variant of [`tighten_interior`]: only the owning cell's
/// branch value applies.
#[inline]
pub fn tighten_patch(lambda: f64, phi_corr: f64, plus_cell: f64, minus_cell: f64) -> f64 {
    if phi_corr > 0.0 {
        lambda.min(plus_cell)
    } else {
        lambda.min(minus_cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::LduMesh;

    #[test]
    fn test_accumulate_cell_two_cell_positive_flux() {
        // One face between cells 0 (owner) and 1 (neighbour), phiCorr = 1.
        let mesh = LduMesh::from_owner_neighbour(2, vec![0], vec![1]).unwrap();
        let lambda = [1.0];
        let phi_corr = [1.0];

        let (p0, m0) = accumulate_cell(&mesh, CellIndex::new(0), &lambda, &phi_corr);
        let (p1, m1) = accumulate_cell(&mesh, CellIndex::new(1), &lambda, &phi_corr);

        assert_eq!((p0, m0), (1.0, 0.0));
        assert_eq!((p1, m1), (0.0, 1.0));
    }

    #[test]
    fn test_accumulate_cell_negative_flux() {
        let mesh = LduMesh::from_owner_neighbour(2, vec![0], vec![1]).unwrap();
        let lambda = [0.5];
        let phi_corr = [-2.0];

        // v = -1.0: owner takes it in mSumlPhim, neighbour in sumlPhip.
        let (p0, m0) = accumulate_cell(&mesh, CellIndex::new(0), &lambda, &phi_corr);
        let (p1, m1) = accumulate_cell(&mesh, CellIndex::new(1), &lambda, &phi_corr);

        assert_eq!((p0, m0), (0.0, 1.0));
        assert_eq!((p1, m1), (1.0, 0.0));
    }

    #[test]
    fn test_accumulate_cell_zero_flux_takes_negative_branch() {
        // v == 0 must classify into the else branch on both sides; the
        // contribution is zero either way, but the branch assignment is
        // part of the contract.
        let mesh = LduMesh::from_owner_neighbour(2, vec![0], vec![1]).unwrap();
        let (p, m) = accumulate_cell(&mesh, CellIndex::new(0), &[1.0], &[0.0]);
        assert_eq!((p, m), (0.0, 0.0));
    }

    #[test]
    fn test_accumulate_patch_group() {
        // Two patch faces on the same cell, one positive one negative.
        let patch = crate::mesh::Patch::from_face_cells(1, vec![0, 0]).unwrap();
        let (p, m) = accumulate_patch_group(&patch, 0, &[1.0, 1.0], &[3.0, -2.0]);
        assert_eq!((p, m), (3.0, 2.0));
    }

    #[test]
    fn test_blend_positive_capped() {
        // (3 + 1) / (4 + 1e-6) is just below 1 and stays after the clamp.
        let r = blend_positive(3.0, 1.0, 4.0, 1e-6);
        assert!(r <= 1.0 && (r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_blend_positive_interior_value() {
        // (0.5 + 0.25) / (3 + 0) = 0.25
        let r = blend_positive(0.5, 0.25, 3.0, 0.0);
        assert!((r - 0.25).abs() < 1e-14);
    }

    #[test]
    fn test_blend_total_at_zero_sum_phi() {
        let rp = blend_positive(1.0, 1.0, 0.0, 1e-15);
        let rn = blend_negative(1.0, 1.0, 0.0, 1e-15);
        assert!((0.0..=1.0).contains(&rp));
        assert!((0.0..=1.0).contains(&rn));
    }

    #[test]
    fn test_blend_absorbs_zero_over_zero() {
        // Zero numerator with sumPhi cancelling the epsilon exactly makes
        // the ratio 0/0; min/max must resolve it to 1, not NaN.
        let eps = 1e-15;
        assert_eq!(blend_positive(0.0, 0.0, -eps, eps), 1.0);
        assert_eq!(blend_negative(0.0, 0.0, eps, eps), 1.0);
    }

    #[test]
    fn test_blend_negative_inputs_clamped() {
        assert_eq!(blend_positive(-5.0, 1.0, 1.0, 1e-15), 0.0);
        assert_eq!(blend_negative(-5.0, 1.0, 1.0, 1e-15), 0.0);
    }

    #[test]
    fn test_tighten_interior_sign_selection() {
        // Positive flux: min(lambda, min(plus_own, minus_nei)) = 0.3
        let l = tighten_interior(1.0, 2.0, 0.4, 0.9, 0.8, 0.3);
        assert_eq!(l, 0.3);

        // Negative flux: min(lambda, min(minus_own, plus_nei)) = 0.8
        let l = tighten_interior(1.0, -2.0, 0.4, 0.9, 0.8, 0.3);
        assert_eq!(l, 0.8);
    }

    #[test]
    fn test_tighten_interior_zero_flux_takes_negative_pair() {
        // phiCorr == 0 selects the negative-branch pair (strict >).
        let l = tighten_interior(1.0, 0.0, 0.1, 0.9, 0.7, 0.2);
        assert_eq!(l, 0.7);
    }

    #[test]
    fn test_tighten_never_increases() {
        let l = tighten_interior(0.2, 1.0, 0.9, 0.9, 0.9, 0.9);
        assert_eq!(l, 0.2);
        let l = tighten_patch(0.1, -1.0, 0.9, 0.9);
        assert_eq!(l, 0.1);
    }

    #[test]
    fn test_tighten_patch_sign_selection() {
        assert_eq!(tighten_patch(1.0, 1.0, 0.4, 0.6), 0.4);
        assert_eq!(tighten_patch(1.0, -1.0, 0.4, 0.6), 0.6);
        assert_eq!(tighten_patch(1.0, 0.0, 0.4, 0.6), 0.6);
    }
}
