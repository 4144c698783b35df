//! This file contains the deafult values and other value choices used trough the library.
//!

/// Number of points used to discretize a distribution when it is converted into a
/// [NumericalDistribution](crate::distributions::Numerical::NumericalDistribution)
/// (see [NumericalDistribution::from_distribution](crate::distributions::Numerical::NumericalDistribution::from_distribution)).
///
/// The points are spread uniformly over the support of the distribution.
pub static DEFAULT_DISCRETIZATION_STEPS: usize = 1000;

/// Number of points of the common grid where all the discretized distributions
/// are convolved by [convolve](crate::convolution::convolve).
///
/// There are no perfect values that will work with every distribution. Increasing the
/// resolution comes with an extra computational cost (`O(n log n)` for each convolution).
/// We recommend changing the values to fit your needs (see
/// [convolve_distributions](crate::convolution::convolve_distributions)).
pub static DEFAULT_CONVOLUTION_STEPS: usize = 1000;

/// Gaussian-like distributions are unbounded. In this library we cut them at this
/// many standard deviations from the center. The probability left out of the support
/// of a normal distribution is `1 - erf(6/sqrt(2)) ~= 1.97 * 10^-9`.
pub static SUPPORT_STANDARD_DEVIATIONS: f64 = 6.0;
