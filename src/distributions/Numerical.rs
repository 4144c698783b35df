//! # Numerical distribution
//!
//! A distribution defined by a table of (non normalized) density values `y` at the
//! points of a grid `x`.
//!
//! From the table we derive:
//!  - The normalized log-density, interpolated linearly between the grid points
//!     (and `-inf` outside the grid).
//!  - The [cdf](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
//!     at every grid point (cumulative sum), forced to be exactly `0.0` at the
//!     first point and `1.0` at the last.
//!  - The [quantile function](https://en.wikipedia.org/wiki/Quantile_function), the
//!     interpolated inverse of the cdf, used for
//!     [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling).
//!
//! Any other distribution can be turned into a [NumericalDistribution] with
//! [NumericalDistribution::from_distribution], wich is what the
//! [convolution engine](crate::convolution) does with everything that can't be
//! combined analytically.
//!

use log::trace;
use rand::Rng;

use crate::{
    configuration::DEFAULT_DISCRETIZATION_STEPS,
    distribution_trait::{Distribution, InstanceId, impl_identity},
    domain::Support,
    errors::DistributionError,
    euclid::{self, LinearInterpolator},
};

#[derive(Debug)]
pub struct NumericalDistribution {
    id: InstanceId,
    support: Support,
    central_value: f64,
    /// `x -> ln(normalized y)`
    log_pdf_interpolator: LinearInterpolator,
    /// `cdf -> x`
    quantile_interpolator: LinearInterpolator,
}

impl NumericalDistribution {
    /// Creates a [NumericalDistribution] from the grid `x` and the density values `y`.
    ///
    ///  - `x` must have at least 2 finite points and be stricly increasing.
    ///  - `y` must have the same length as `x`, contain finite non-negative values
    ///     and not be all `0.0`. It does not need to be normalized.
    ///  - If `central_value` is given it must be within `[x[0], x[n - 1]]`.
    ///     Otherwise, the [mode](https://en.wikipedia.org/wiki/Mode_(statistics))
    ///     of the table (the point with the greatest `y`) is used.
    pub fn new(x: Vec<f64>, y: Vec<f64>, central_value: Option<f64>) -> Result<NumericalDistribution, DistributionError> {
        let n: usize = x.len();
        if n < 2 {
            return Err(DistributionError::NotEnoughPoints(2));
        }
        if y.len() != n {
            return Err(DistributionError::DimensionMismatch {
                expected: n,
                found: y.len(),
            });
        }

        DistributionError::check_finite(&x)?;
        DistributionError::check_finite(&y)?;

        if let Some(position) = x.windows(2).position(|w: &[f64]| w[1] <= w[0]) {
            return Err(DistributionError::GridNotIncreasing(position + 1));
        }

        let total: f64 = y.iter().sum::<f64>();
        if y.iter().any(|&v: &f64| v < 0.0) || total <= 0.0 {
            return Err(DistributionError::InvalidWeights);
        }

        let (lo, hi): (f64, f64) = (x[0], x[n - 1]);

        let central_value: f64 = match central_value {
            Some(c) => {
                if !(lo <= c && c <= hi) {
                    return Err(DistributionError::CentralValueOutOfRange(c, lo, hi));
                }
                c
            }
            None => {
                // first maximum
                let mut mode_index: usize = 0;
                for (i, &v) in y.iter().enumerate() {
                    if y[mode_index] < v {
                        mode_index = i;
                    }
                }
                x[mode_index]
            }
        };

        /*
            Normalize the pdf to 1, approximating the area as `sum(y) * bin_width`.

            The cumulative distribution at x[i] is `sum(y[..=i]) * bin_width`, wich is
            then just `sum(y[..=i]) / sum(y)`. The borders are forced to exactly 0 and 1
            so the quantile function is defined over all `[0, 1]`.
        */
        let bin_width: f64 = (hi - lo) / (n as f64);
        let inv_area: f64 = 1.0 / (total * bin_width);

        let log_pdf_values: Vec<f64> = y.iter().map(|&v: &f64| (v * inv_area).ln()).collect::<Vec<f64>>();

        let mut cdf_values: Vec<f64> = Vec::with_capacity(n);
        let mut accumulator: f64 = 0.0;
        for &v in &y {
            accumulator += v;
            cdf_values.push(accumulator / total);
        }
        cdf_values[0] = 0.0;
        cdf_values[n - 1] = 1.0;

        let log_pdf_interpolator: LinearInterpolator =
            LinearInterpolator::new(x.clone(), log_pdf_values, f64::NEG_INFINITY);
        let quantile_interpolator: LinearInterpolator = LinearInterpolator::new(cdf_values, x, f64::NAN);

        return Ok(NumericalDistribution {
            id: InstanceId::fresh(),
            support: Support::Interval(lo, hi),
            central_value,
            log_pdf_interpolator,
            quantile_interpolator,
        });
    }

    /// Discretizes `distribution` with `nsteps` points evenly distributed on its support
    /// and returns the resulting [NumericalDistribution]. The central value of the
    /// original distribution is kept.
    ///
    /// Returns [DistributionError::UnboundedSupport] or [DistributionError::DegenerateSupport]
    /// if the support is not an interval of positive width.
    ///
    /// See [NumericalDistribution::from_distribution] for the deafult resolution.
    pub fn from_distribution_with_steps<D: Distribution>(
        distribution: &D,
        nsteps: usize,
    ) -> Result<NumericalDistribution, DistributionError> {
        let support: &Support = distribution.get_support();
        if !support.is_bounded() {
            return Err(DistributionError::UnboundedSupport);
        }
        let (lo, hi): (f64, f64) = support.get_bounds();
        if hi <= lo {
            return Err(DistributionError::DegenerateSupport(lo));
        }

        trace!("discretizing [{lo}, {hi}] with {nsteps} points");

        let x: Vec<f64> = euclid::linspace(lo, hi, nsteps);
        let y: Vec<f64> = x.iter().map(|&p: &f64| distribution.pdf(p)).collect::<Vec<f64>>();

        return NumericalDistribution::new(x, y, Some(distribution.get_central_value()));
    }

    /// Same as [NumericalDistribution::from_distribution_with_steps] using
    /// [DEFAULT_DISCRETIZATION_STEPS] points.
    pub fn from_distribution<D: Distribution>(distribution: &D) -> Result<NumericalDistribution, DistributionError> {
        return NumericalDistribution::from_distribution_with_steps(distribution, DEFAULT_DISCRETIZATION_STEPS);
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// (the inverse of the cdf).
    ///  - if `p` is outside the range [0.0, 1.0], the bounds of the support will be returned.
    ///  - **Panicks** is `p` is a NaN.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() {
            std::panic!("Tried to evaluate the quantile function of a NumericalDistribution with a NaN value. \n");
        }
        return self.quantile_interpolator.evaluate(p.clamp(0.0, 1.0));
    }

    /// The grid of the table.
    pub fn get_x(&self) -> &[f64] {
        return self.log_pdf_interpolator.get_x();
    }

    /// The normalized log-density at every point of the grid.
    pub fn get_log_pdf_values(&self) -> &[f64] {
        return self.log_pdf_interpolator.get_y();
    }

    /// The cdf at every point of the grid.
    pub fn get_cdf_values(&self) -> &[f64] {
        return self.quantile_interpolator.get_x();
    }
}

impl Distribution for NumericalDistribution {
    fn get_central_value(&self) -> f64 {
        return self.central_value;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return self.log_pdf_interpolator.evaluate(x);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.quantile_interpolator.evaluate(rng.random::<f64>());
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }
}

impl_identity!(NumericalDistribution, Distribution);
