//! # Delta distribution
//!
//! The [Dirac delta](https://en.wikipedia.org/wiki/Dirac_delta_function) distribution
//! puts all the probability on a single value, the central value. For this reason it
//! always returns the same value when sampled.
//!
//! It represents a quantity without uncertainty. When combining uncertainties with
//! [convolve](crate::convolution::convolve) a [Delta] contributes nothing to the spread.

use rand::Rng;

use crate::{
    distribution_trait::{Distribution, InstanceId, impl_identity},
    domain::Support,
    errors::DistributionError,
};

#[derive(Debug)]
pub struct Delta {
    id: InstanceId,
    support: Support,
    central_value: f64,
}

impl Delta {
    /// Creates a [Delta] distribution at `central_value`, wich must be finite.
    pub fn new(central_value: f64) -> Result<Delta, DistributionError> {
        DistributionError::check_finite(&[central_value])?;

        return Ok(Delta {
            id: InstanceId::fresh(),
            support: Support::Interval(central_value, central_value),
            central_value,
        });
    }
}

impl Distribution for Delta {
    fn get_central_value(&self) -> f64 {
        return self.central_value;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    /// `0.0` at exactly the central value and `-inf` everywhere else.
    fn log_pdf(&self, x: f64) -> f64 {
        return if x == self.central_value { 0.0 } else { f64::NEG_INFINITY };
    }

    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        return self.central_value;
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }

    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Vec<f64> {
        return vec![self.central_value; n];
    }
}

impl_identity!(Delta, Distribution);
