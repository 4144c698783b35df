use thiserror::Error;

/// Everything that can go wrong while building or combining distributions.
///
/// Construction never returns a partially valid object: if any of the
/// parameters is invalid, one of these errors is returned instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// A number was infinite when only finite values are allowed.
    #[error("A number was infinite when only finite values are allowed. ")]
    InvalidNumber,
    /// A standard deviation (or half range) was negative or zero where it
    /// is not allowed to be.
    #[error("Invalid deviation `{0}`: {1}")]
    InvalidDeviation(f64, &'static str),
    /// The confidence level must be a probability stricly inside `(0, 1)`.
    #[error("The confidence level should be between 0 and 1, got `{0}`. ")]
    InvalidConfidenceLevel(f64),
    /// The covariance matrix is not (strictly) positive definite.
    #[error("The covariance matrix is not positive definite (smallest eigenvalue: `{0}`). ")]
    NotPositiveDefinite(f64),
    /// The covariance matrix is not symmetric.
    #[error("The covariance matrix is not symmetric. ")]
    NotSymmetric,
    /// The shapes of the given vectors/matrices do not agree.
    #[error("Dimension mismatch: expected `{expected}`, found `{found}`. ")]
    DimensionMismatch { expected: usize, found: usize },
    /// The given central value lies outside of the grid of the distribution.
    #[error("Central value `{0}` must be within range provided `[{1}, {2}]`. ")]
    CentralValueOutOfRange(f64, f64, f64),
    /// The points of a grid must be stricly increasing.
    #[error("The grid must be stricly increasing (failed at position {0}). ")]
    GridNotIncreasing(usize),
    /// The support of the distribution is unbounded, so it can't be discretized.
    #[error("The support of the distribution is unbounded and can't be discretized. ")]
    UnboundedSupport,
    /// The support of the distribution is a single point, so it can't be discretized.
    #[error("The support of the distribution is the single point `{0}` and can't be discretized. ")]
    DegenerateSupport(f64),
    /// There were not enough points to do the operation.
    #[error("There were not enough points to do the operation (need at least {0}). ")]
    NotEnoughPoints(usize),
    /// The weights of a tabulated density are negative or all zero.
    #[error("The weights must be non-negative and not all zero. ")]
    InvalidWeights,
    /// Nothing was given to combine.
    #[error("At least one distribution is needed to perform a combination. ")]
    EmptyInput,
    /// Only distributions with the exact same central value can be combined.
    #[error("Distributions must all have the same central value: expected `{expected}`, found `{found}`. ")]
    MismatchedCentralValues { expected: f64, found: f64 },
}

impl DistributionError {
    /// Classifies a non-finite parameter into [DistributionError::NanErr] or
    /// [DistributionError::InvalidNumber].
    ///
    /// Returns `None` if `x` is finite.
    pub fn from_non_finite(x: f64) -> Option<DistributionError> {
        return match x.classify() {
            std::num::FpCategory::Nan => Some(DistributionError::NanErr),
            std::num::FpCategory::Infinite => Some(DistributionError::InvalidNumber),
            _ => None,
        };
    }

    /// Same as [DistributionError::from_non_finite] but for multiple values at once.
    /// The first invalid value determines the error.
    pub fn check_finite(values: &[f64]) -> Result<(), DistributionError> {
        for &v in values {
            if let Some(err) = DistributionError::from_non_finite(v) {
                return Err(err);
            }
        }
        return Ok(());
    }
}
