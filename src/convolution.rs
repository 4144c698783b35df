//! # Convolution
//!
//! Combination of independent uncertainties on a single quantity.
//!
//! Given several distributions that describe the uncertainty of the **same**
//! central value, [convolve] returns the distribution of the combined effect
//! ([convolution](https://en.wikipedia.org/wiki/Convolution_of_probability_distributions)),
//! again centered on that value.
//!
//!  - [Normal] distributions are combined exactly: the standard deviations are
//!     added in quadrature.
//!  - [Delta] distributions have no spread and are dropped.
//!  - Everything else is discretized into a [NumericalDistribution] and convolved
//!     numerically (trough the FFT) on a common grid.
//!
//! The result of [convolve] is again a [UnivariateDistribution], so it can be
//! combined again.
//!
//! ## Numerical caveats
//!
//! The numerical path uses "same" length convolutions, wich implicitly assume that
//! every density is (almost) `0.0` near the borders of the common grid. If that is
//! not the case the result is silently biased by the truncation. The resolution of
//! the grids trades accuracy for speed, see [convolve_distributions].
//!
//! [Normal]: crate::distributions::Normal::Normal
//! [Delta]: crate::distributions::Delta::Delta
//! [Uniform]: crate::distributions::Uniform::Uniform

use log::debug;

use crate::{
    configuration::{DEFAULT_CONVOLUTION_STEPS, DEFAULT_DISCRETIZATION_STEPS},
    distribution_trait::Distribution,
    distributions::{
        Delta::Delta, Normal::Normal, Numerical::NumericalDistribution, UnivariateDistribution,
    },
    domain::Support,
    errors::DistributionError,
    euclid,
};

/// Combines `distributions` with the deafult resolutions
/// ([DEFAULT_DISCRETIZATION_STEPS] and [DEFAULT_CONVOLUTION_STEPS]).
///
/// See [convolve_distributions] for the details.
pub fn convolve(distributions: Vec<UnivariateDistribution>) -> Result<UnivariateDistribution, DistributionError> {
    return convolve_distributions().distributions(distributions).call();
}

/// Combines a set of univariate distributions that share the same central value.
///
/// ## Inputs:
///
/// 1. `distributions`: the distributions to combine.
///      - There must be at least one.
///      - All of them must have **exactly** the same central value.
/// 2. `discretization_steps`: (optional) number of points used to turn every
///     non-Gaussian distribution into a [NumericalDistribution].
///      - The default is [DEFAULT_DISCRETIZATION_STEPS].
/// 3. `convolution_steps`: (optional) number of points of the common grid
///     where the numerical convolution is done.
///      - The default is [DEFAULT_CONVOLUTION_STEPS].
///
/// ## Results
///
///  - A single distribution is returned unchanged (the same instance).
///  - If there are only [Normal]s (and [Delta]s), the result is a new [Normal]
///     with `sigma = sqrt(sum(sigma_i^2))`.
///  - If there are only [Delta]s, the result is a new [Delta]. A [Uniform] with
///     `half_range = 0` counts as a [Delta].
///  - A single non-Gaussian distribution with only [Delta]s is returned unchanged.
///  - Otherwise the result is a [NumericalDistribution].
///
/// Returns [DistributionError::EmptyInput] if there is nothing to combine and
/// [DistributionError::MismatchedCentralValues] if the central values differ.
#[bon::builder]
pub fn convolve_distributions(
    distributions: Vec<UnivariateDistribution>,
    #[builder(default = DEFAULT_DISCRETIZATION_STEPS)] discretization_steps: usize,
    #[builder(default = DEFAULT_CONVOLUTION_STEPS)] convolution_steps: usize,
) -> Result<UnivariateDistribution, DistributionError> {
    let central_value: f64 = match distributions.first() {
        Some(d) => d.get_central_value(),
        None => return Err(DistributionError::EmptyInput),
    };

    check_central_values(distributions.iter(), central_value)?;

    let mut distributions: Vec<UnivariateDistribution> = distributions;
    if distributions.len() == 1 {
        if let Some(single) = distributions.pop() {
            return Ok(single);
        }
    }

    let mut normals: Vec<Normal> = Vec::new();
    let mut others: Vec<UnivariateDistribution> = Vec::new();
    let mut number_of_deltas: usize = 0;

    for d in distributions {
        match d {
            UnivariateDistribution::Normal(n) => normals.push(n),
            UnivariateDistribution::Delta(_) => number_of_deltas += 1,
            // zero width, no spread
            UnivariateDistribution::Uniform(u) if u.get_half_range() <= 0.0 => number_of_deltas += 1,
            other => others.push(other),
        }
    }

    debug!(
        "combining around {central_value}: {} normal, {} delta, {} other",
        normals.len(),
        number_of_deltas,
        others.len()
    );

    let combined_normal: Option<Normal> = if normals.is_empty() {
        None
    } else {
        Some(combine_normals(&normals)?)
    };

    if others.is_empty() {
        return match combined_normal {
            Some(n) => {
                debug!("analytic result: Normal with sigma = {}", n.get_standard_deviation());
                Ok(UnivariateDistribution::Normal(n))
            }
            None => {
                debug!("only deltas, the result is a delta");
                Ok(UnivariateDistribution::Delta(Delta::new(central_value)?))
            }
        };
    }

    if let Some(n) = combined_normal {
        others.push(UnivariateDistribution::Normal(n));
    }

    if others.len() == 1 {
        if let Some(single) = others.pop() {
            debug!("a single {} remains, returned unchanged", single.variant_name());
            return Ok(single);
        }
    }

    let mut numericals: Vec<NumericalDistribution> = Vec::with_capacity(others.len());
    for d in &others {
        numericals.push(NumericalDistribution::from_distribution_with_steps(d, discretization_steps)?);
    }

    let result: NumericalDistribution = convolve_numerical(&numericals, convolution_steps)?;
    return Ok(UnivariateDistribution::Numerical(result));
}

/// Combines [Normal] distributions analytically.
///
/// The result is a new [Normal] with the common mean and standard deviation
/// `sqrt(sum(sigma_i^2))`.
///
/// Returns an error if `normals` is empty or the means are not all equal.
pub fn combine_normals(normals: &[Normal]) -> Result<Normal, DistributionError> {
    let mean: f64 = match normals.first() {
        Some(n) => n.get_mean(),
        None => return Err(DistributionError::EmptyInput),
    };

    check_central_values(normals.iter(), mean)?;

    let variance: f64 = normals
        .iter()
        .map(|n: &Normal| {
            let s: f64 = n.get_standard_deviation();
            s * s
        })
        .sum::<f64>();

    return Normal::new(mean, variance.sqrt());
}

/// Convolves [NumericalDistribution]s on a common grid.
///
/// The grid has `nsteps` points and spans all the individual supports. Every
/// density is evaluated on it and weighted by the spacing of the grid to get
/// discrete probability masses, wich are then convolved pairwise with
/// [euclid::fft_convolve_same].
///
/// Returns an error if `distributions` is empty, the central values are not all
/// equal or `nsteps < 2`.
pub fn convolve_numerical(
    distributions: &[NumericalDistribution],
    nsteps: usize,
) -> Result<NumericalDistribution, DistributionError> {
    let central_value: f64 = match distributions.first() {
        Some(d) => d.get_central_value(),
        None => return Err(DistributionError::EmptyInput),
    };
    check_central_values(distributions.iter(), central_value)?;

    if nsteps < 2 {
        return Err(DistributionError::NotEnoughPoints(2));
    }

    let support: Support = distributions
        .iter()
        .skip(1)
        .fold(distributions[0].get_support().clone(), |acc: Support, d: &NumericalDistribution| {
            acc.join(d.get_support())
        });
    let (lo, hi): (f64, f64) = support.get_bounds();

    let delta: f64 = (hi - lo) / ((nsteps - 1) as f64);
    let x: Vec<f64> = euclid::linspace(lo, hi, nsteps);

    debug!("numerical convolution of {} distributions on [{lo}, {hi}] with {nsteps} points", distributions.len());

    let mut masses = distributions
        .iter()
        .map(|d: &NumericalDistribution| x.iter().map(|&p: &f64| d.pdf(p) * delta).collect::<Vec<f64>>());

    let mut y: Vec<f64> = match masses.next() {
        Some(first) => first,
        None => return Err(DistributionError::EmptyInput),
    };
    for mass in masses {
        y = euclid::fft_convolve_same(&y, &mass);
    }

    // round off of the FFT
    for v in &mut y {
        if *v < 0.0 {
            *v = 0.0;
        }
    }

    return NumericalDistribution::new(x, y, Some(central_value));
}

/// Checks that every distribution has **exactly** `central_value` as central value.
#[allow(clippy::float_cmp)]
fn check_central_values<'a, D, I>(distributions: I, central_value: f64) -> Result<(), DistributionError>
where
    D: Distribution + 'a,
    I: Iterator<Item = &'a D>,
{
    for d in distributions {
        let found: f64 = d.get_central_value();
        if found != central_value {
            return Err(DistributionError::MismatchedCentralValues {
                expected: central_value,
                found,
            });
        }
    }
    return Ok(());
}
