//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! It is the usual way to express a measured quantity with a symmetric uncertainty
//! (`central_value ± standard_deviation`). The sum of independent normal
//! variables is again normal, wich is why [convolve](crate::convolution::convolve)
//! can combine them exactly: the standard deviations are added in quadrature.
//!
//! The support is cut at [SUPPORT_STANDARD_DEVIATIONS] standard deviations
//! from the center.
//!

use rand::Rng;
use rand_distr::{Distribution as RandDistribution, StandardNormal};

use crate::{
    configuration::SUPPORT_STANDARD_DEVIATIONS,
    distribution_trait::{Distribution, InstanceId, impl_identity},
    domain::Support,
    errors::DistributionError,
    euclid,
};

#[derive(Debug)]
pub struct Normal {
    id: InstanceId,
    support: Support,
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, DistributionError> {
        DistributionError::check_finite(&[mean, standard_deviation])?;

        if standard_deviation <= 0.0 {
            return Err(DistributionError::InvalidDeviation(
                standard_deviation,
                "the standard deviation of a normal distribution must be positive",
            ));
        }

        let half_width: f64 = SUPPORT_STANDARD_DEVIATIONS * standard_deviation;

        return Ok(Normal {
            id: InstanceId::fresh(),
            support: Support::Interval(mean - half_width, mean + half_width),
            mean,
            standard_deviation,
        });
    }

    /// Returns the mean, the first parameter of the normal distribution.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }
}

impl Distribution for Normal {
    fn get_central_value(&self) -> f64 {
        return self.mean;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return euclid::normal_log_pdf(x, self.mean, self.standard_deviation);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        return z.mul_add(self.standard_deviation, self.mean);
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }
}

impl_identity!(Normal, Distribution);
