//! # Multivariate normal distribution
//!
//! The [multivariate normal distribution](https://en.wikipedia.org/wiki/Multivariate_normal_distribution)
//! of `k` correlated measurements, given by a central value (the mean vector)
//! and a covariance matrix.
//!
//! To avoid numerical problems when the variances of the components differ by
//! many orders of magnitude, the density is evaluated on the **rescaled** problem:
//!
//! ```text
//! err_i = sqrt(cov_ii)
//! corr  = diag(1/err) * cov * diag(1/err)
//! z     = (x - mean) / err
//!
//! log_pdf(x) = log_pdf_std(z; corr) + 0.5 * (ln|corr| - ln|cov|)
//! ```
//!
//! where `log_pdf_std` is the density of a zero mean normal with covariance `corr`.
//! The correction term accounts for the change of variables, and since
//! `ln|cov| = ln|corr| + 2 * sum(ln(err_i))` it reduces to `-sum(ln(err_i))`.
//!

use nalgebra::{Cholesky, DMatrix, DVector, Dyn};
use rand::Rng;
use rand_distr::{Distribution as RandDistribution, StandardNormal};

use crate::{
    distribution_trait::{InstanceId, MultivariateDistribution, impl_identity},
    domain::Support,
    errors::DistributionError,
    euclid::LN_SQRT_2PI,
};

/// Relative tolerance used to accept a covariance matrix as symmetric.
const SYMMETRY_TOLERANCE: f64 = 1e-12;

#[derive(Debug)]
pub struct MultivariateNormal {
    id: InstanceId,
    support: Support,
    central_value: DVector<f64>,
    covariance: DMatrix<f64>,
    /// Marginal standard deviations, `sqrt(diag(covariance))`
    standard_deviations: DVector<f64>,
    /// Cholesky decomposition of the correlation matrix
    correlation_cholesky: Cholesky<f64, Dyn>,
    /// `ln|corr|`
    log_det_correlation: f64,
    /// `ln|cov|`
    log_det_covariance: f64,
}

impl MultivariateNormal {
    /// Creates a new [MultivariateNormal] distribution.
    ///
    ///  - `central_value` must have `k >= 1` finite components.
    ///  - `covariance` must be a finite, symmetric `k x k` matrix.
    ///  - `covariance` must be (strictly) positive definite: all its eigenvalues
    ///     must be greater than `0.0`.
    pub fn new(central_value: DVector<f64>, covariance: DMatrix<f64>) -> Result<MultivariateNormal, DistributionError> {
        let k: usize = central_value.len();
        if k == 0 {
            return Err(DistributionError::NotEnoughPoints(1));
        }
        if covariance.nrows() != covariance.ncols() {
            return Err(DistributionError::DimensionMismatch {
                expected: covariance.nrows(),
                found: covariance.ncols(),
            });
        }
        if covariance.nrows() != k {
            return Err(DistributionError::DimensionMismatch {
                expected: k,
                found: covariance.nrows(),
            });
        }

        DistributionError::check_finite(central_value.as_slice())?;
        DistributionError::check_finite(covariance.as_slice())?;

        let scale: f64 = covariance.amax();
        for i in 0..k {
            for j in (i + 1)..k {
                if (covariance[(i, j)] - covariance[(j, i)]).abs() > SYMMETRY_TOLERANCE * scale {
                    return Err(DistributionError::NotSymmetric);
                }
            }
        }

        let min_eigenvalue: f64 = covariance.symmetric_eigenvalues().min();
        if min_eigenvalue <= 0.0 {
            return Err(DistributionError::NotPositiveDefinite(min_eigenvalue));
        }

        // positive definite => positive diagonal
        let standard_deviations: DVector<f64> = covariance.diagonal().map(f64::sqrt);
        let inv_std: DVector<f64> = standard_deviations.map(|s: f64| 1.0 / s);

        let mut correlation: DMatrix<f64> = covariance.clone();
        for i in 0..k {
            for j in 0..k {
                correlation[(i, j)] *= inv_std[i] * inv_std[j];
            }
        }

        let correlation_cholesky: Cholesky<f64, Dyn> =
            Cholesky::new(correlation).ok_or(DistributionError::NotPositiveDefinite(min_eigenvalue))?;

        let log_det_correlation: f64 = 2.0
            * correlation_cholesky
                .l_dirty()
                .diagonal()
                .iter()
                .map(|d: &f64| d.ln())
                .sum::<f64>();
        let log_det_covariance: f64 =
            log_det_correlation + 2.0 * standard_deviations.iter().map(|s: &f64| s.ln()).sum::<f64>();

        return Ok(MultivariateNormal {
            id: InstanceId::fresh(),
            support: Support::Unbounded,
            central_value,
            covariance,
            standard_deviations,
            correlation_cholesky,
            log_det_correlation,
            log_det_covariance,
        });
    }

    /// Creates a new [MultivariateNormal] distribution from the marginal standard
    /// deviations and a correlation matrix (`cov_ij = std_i * corr_ij * std_j`).
    ///
    /// The same conditions as [MultivariateNormal::new] apply to the resulting covariance.
    pub fn from_correlation(
        central_value: DVector<f64>,
        standard_deviations: &DVector<f64>,
        correlation: &DMatrix<f64>,
    ) -> Result<MultivariateNormal, DistributionError> {
        let k: usize = standard_deviations.len();
        if correlation.nrows() != k || correlation.ncols() != k {
            return Err(DistributionError::DimensionMismatch {
                expected: k,
                found: correlation.nrows(),
            });
        }

        let covariance: DMatrix<f64> = DMatrix::from_fn(k, k, |i: usize, j: usize| {
            standard_deviations[i] * correlation[(i, j)] * standard_deviations[j]
        });

        return MultivariateNormal::new(central_value, covariance);
    }

    pub const fn get_covariance(&self) -> &DMatrix<f64> {
        return &self.covariance;
    }

    /// The marginal standard deviations (square roots of the diagonal of the covariance).
    pub const fn get_standard_deviations(&self) -> &DVector<f64> {
        return &self.standard_deviations;
    }

    /// The natural logarithm of the determinant of the covariance matrix.
    pub const fn get_log_determinant(&self) -> f64 {
        return self.log_det_covariance;
    }
}

impl MultivariateDistribution for MultivariateNormal {
    fn get_central_value(&self) -> &DVector<f64> {
        return &self.central_value;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn dimension(&self) -> usize {
        return self.central_value.len();
    }

    fn log_pdf(&self, x: &DVector<f64>) -> f64 {
        let k: usize = self.dimension();
        if x.len() != k {
            std::panic!(
                "Tried to evaluate a MultivariateNormal of dimension {} at a point of dimension {}. \n",
                k,
                x.len()
            );
        }

        let z: DVector<f64> = (x - &self.central_value).component_div(&self.standard_deviations);
        // z^T * corr^-1 * z
        let quadratic_form: f64 = z.dot(&self.correlation_cholesky.solve(&z));

        let log_pdf_rescaled: f64 = -0.5 * quadratic_form - (k as f64) * LN_SQRT_2PI - 0.5 * self.log_det_correlation;

        return log_pdf_rescaled + 0.5 * (self.log_det_correlation - self.log_det_covariance);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64> {
        let k: usize = self.dimension();
        let mut z: DVector<f64> = DVector::<f64>::zeros(k);
        for i in 0..k {
            z[i] = StandardNormal.sample(rng);
        }

        let correlated: DVector<f64> = self.correlation_cholesky.l() * z;
        return &self.central_value + correlated.component_mul(&self.standard_deviations);
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }
}

impl_identity!(MultivariateNormal, MultivariateDistribution);
