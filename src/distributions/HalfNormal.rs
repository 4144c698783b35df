//! # Half normal distribution
//!
//! The [half normal distribution](https://en.wikipedia.org/wiki/Half-normal_distribution)
//! is a [Normal](crate::distributions::Normal) folded over its center: all the density
//! lies on one side of the central value.
//!
//! The side is selected by the sign of the (signed) standard deviation: a positive one
//! puts the density on `[c, +inf)`, a negative one on `(-inf, c]`. As the normal
//! distribution, the support is cut at
//! [SUPPORT_STANDARD_DEVIATIONS](crate::configuration::SUPPORT_STANDARD_DEVIATIONS)
//! standard deviations.
//!

use std::f64::consts::LN_2;

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
pub struct HalfNormal {
    id: InstanceId,
    support: Support,
    central_value: f64,
    /// The sign selects the side.
    standard_deviation: f64,
}

impl HalfNormal {
    /// Creates a new [HalfNormal] distribution.
    ///
    ///  - `central_value` and `standard_deviation` must be finite.
    ///  - `standard_deviation` can be positive or negative but **not** `0.0`.
    pub fn new(central_value: f64, standard_deviation: f64) -> Result<HalfNormal, DistributionError> {
        DistributionError::check_finite(&[central_value, standard_deviation])?;

        if standard_deviation == 0.0 {
            return Err(DistributionError::InvalidDeviation(
                standard_deviation,
                "the standard deviation of a half normal distribution can't be 0",
            ));
        }

        let support: Support = Support::new_interval(
            central_value,
            central_value + SUPPORT_STANDARD_DEVIATIONS * standard_deviation,
        );

        return Ok(HalfNormal {
            id: InstanceId::fresh(),
            support,
            central_value,
            standard_deviation,
        });
    }

    /// Returns the signed standard deviation.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }
}

impl Distribution for HalfNormal {
    fn get_central_value(&self) -> f64 {
        return self.central_value;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if self.standard_deviation.signum() * (x - self.central_value) < 0.0 {
            // wrong side
            return f64::NEG_INFINITY;
        }
        return LN_2 + euclid::normal_log_pdf(x, self.central_value, self.standard_deviation.abs());
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        return self.central_value + self.standard_deviation * z.abs();
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }
}

impl_identity!(HalfNormal, Distribution);
