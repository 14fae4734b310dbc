//! Final limiter blend: per-cell bound ratios from accumulated sums.
//!
//! After accumulation, each cell combines its positive or negative sum with
//! the branch-appropriate admissible bound and the total flux reference into
//! a clamped ratio in [0, 1]. The two branches are explicit functions rather
//! than a specialization parameter so both paths have identical, inspectable
//! numerics.
//!
//! The blend stage must only run after all accumulation (interior and every
//! patch) has completed; the pass driver sequences this barrier.

use super::kernels::{blend_negative, blend_positive};

/// Default denominator bias for the blend.
pub const SMALL: f64 = 1e-15;

/// Parameters for the final limiter blend.
///
/// The epsilon biases the blend denominator away from zero: added for the
/// positive branch, subtracted for the negative branch.
#[derive(Clone, Copy, Debug)]
pub struct LimiterConfig {
    /// Denominator bias (small positive)
    pub epsilon: f64,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self { epsilon: SMALL }
    }
}

impl LimiterConfig {
    /// Create a config with an explicit denominator bias.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

/// Compute the positive-branch per-cell limiter values.
///
/// # Arguments
/// * `suml_phip` - Accumulated positive sums, length `n_cells`
/// * `psi_max` - Upper admissible bounds, length `n_cells`
/// * `sum_phi` - Total flux reference, length `n_cells`
/// * `config` - Blend parameters
/// * `lambda_plus` - Output per-cell values, length `n_cells`
pub fn blend_limiter_positive(
    suml_phip: &[f64],
    psi_max: &[f64],
    sum_phi: &[f64],
    config: &LimiterConfig,
    lambda_plus: &mut [f64],
) {
    for (cell, out) in lambda_plus.iter_mut().enumerate() {
        *out = blend_positive(suml_phip[cell], psi_max[cell], sum_phi[cell], config.epsilon);
    }
}

/// Compute the negative-branch per-cell limiter values.
///
/// # Arguments
/// * `m_suml_phim` - Accumulated (sign-flipped) negative sums, length `n_cells`
/// * `psi_min` - Lower admissible bounds, length `n_cells`
/// * `sum_phi` - Total flux reference, length `n_cells`
/// * `config` - Blend parameters
/// * `lambda_minus` - Output per-cell values, length `n_cells`
pub fn blend_limiter_negative(
    m_suml_phim: &[f64],
    psi_min: &[f64],
    sum_phi: &[f64],
    config: &LimiterConfig,
    lambda_minus: &mut [f64],
) {
    for (cell, out) in lambda_minus.iter_mut().enumerate() {
        *out = blend_negative(m_suml_phim[cell], psi_min[cell], sum_phi[cell], config.epsilon);
    }
}

/// Parallel version of [`blend_limiter_positive`] using Rayon.
#[cfg(feature = "parallel")]
pub fn blend_limiter_positive_parallel(
    suml_phip: &[f64],
    psi_max: &[f64],
    sum_phi: &[f64],
    config: &LimiterConfig,
    lambda_plus: &mut [f64],
) {
    use rayon::prelude::*;

    lambda_plus
        .par_iter_mut()
        .enumerate()
        .for_each(|(cell, out)| {
            *out = blend_positive(suml_phip[cell], psi_max[cell], sum_phi[cell], config.epsilon);
        });
}

/// Parallel version of [`blend_limiter_negative`] using Rayon.
#[cfg(feature = "parallel")]
pub fn blend_limiter_negative_parallel(
    m_suml_phim: &[f64],
    psi_min: &[f64],
    sum_phi: &[f64],
    config: &LimiterConfig,
    lambda_minus: &mut [f64],
) {
    use rayon::prelude::*;

    lambda_minus
        .par_iter_mut()
        .enumerate()
        .for_each(|(cell, out)| {
            *out = blend_negative(m_suml_phim[cell], psi_min[cell], sum_phi[cell], config.epsilon);
        });
}
