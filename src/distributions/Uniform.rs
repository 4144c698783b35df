//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b)` have
//! equal likelyhood of happening.
//!
//! Here it is parametrized by its center and its half range: it describes a quantity
//! that is known to lie within `central_value ± half_range` without any
//! further preference.
//!

use rand::Rng;

use crate::{
    distribution_trait::{Distribution, InstanceId, impl_identity},
    domain::Support,
    errors::DistributionError,
};

#[derive(Debug)]
pub struct Uniform {
    id: InstanceId,
    support: Support,
    central_value: f64,
    half_range: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
    /// on `[central_value - half_range, central_value + half_range)`.
    ///
    ///  - `central_value` and `half_range` must both be finite values (no `+-inf` or NaNs)
    ///  - `half_range` must be non-negative.
    pub fn new(central_value: f64, half_range: f64) -> Result<Uniform, DistributionError> {
        DistributionError::check_finite(&[central_value, half_range])?;

        if half_range < 0.0 {
            return Err(DistributionError::InvalidDeviation(
                half_range,
                "the half range of a uniform distribution must be non-negative",
            ));
        }

        let support: Support = Support::Interval(central_value - half_range, central_value + half_range);

        return Ok(Uniform {
            id: InstanceId::fresh(),
            support,
            central_value,
            half_range,
        });
    }

    /// Returns the half range of the distribution.
    pub const fn get_half_range(&self) -> f64 {
        return self.half_range;
    }

    /// Returns `a` (minimum value).
    pub fn get_a(&self) -> f64 {
        return self.support.get_bounds().0;
    }

    /// Returns `b` (maximum value, **not** included).
    pub fn get_b(&self) -> f64 {
        return self.support.get_bounds().1;
    }
}

impl Distribution for Uniform {
    fn get_central_value(&self) -> f64 {
        return self.central_value;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let (a, b): (f64, f64) = self.support.get_bounds();
        if x < a || b <= x || x.is_nan() {
            return f64::NEG_INFINITY;
        }
        return -(2.0 * self.half_range).ln();
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (a, b): (f64, f64) = self.support.get_bounds();
        return a + rng.random::<f64>() * (b - a);
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }

    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let (a, b): (f64, f64) = self.support.get_bounds();
        let d: f64 = b - a;
        return (0..n).map(|_| a + rng.random::<f64>() * d).collect::<Vec<f64>>();
    }
}

impl_identity!(Uniform, Distribution);
