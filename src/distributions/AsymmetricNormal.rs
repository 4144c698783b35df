//! # Asymmetric normal distribution
//!
//! A two-piece Gaussian: a measurement `central_value (+right_deviation) (-left_deviation)`.
//!
//! Each side of the central value is a half of a [Normal](crate::distributions::Normal)
//! with its own standard deviation. Both halves are rescaled so that together they
//! integrate to `1.0`:
//!
//! ```text
//! p_l = pdf_left(c)       p_r = pdf_right(c)
//!
//! f(x) = 2 * p_r / (p_l + p_r) * pdf_left(x)      if x < c
//! f(x) = 2 * p_l / (p_l + p_r) * pdf_right(x)     if c <= x
//! ```
//!
//! Since `p = 1 / (sigma * sqrt(2π))`, the factors simplify to
//! `2 * sigma_l / (sigma_l + sigma_r)` and `2 * sigma_r / (sigma_l + sigma_r)`.
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
pub struct AsymmetricNormal {
    id: InstanceId,
    support: Support,
    central_value: f64,
    right_deviation: f64,
    left_deviation: f64,
    /// `ln(2 * sigma_l / (sigma_l + sigma_r))`
    log_left_scale: f64,
    /// `ln(2 * sigma_r / (sigma_l + sigma_r))`
    log_right_scale: f64,
}

impl AsymmetricNormal {
    /// Creates a new [AsymmetricNormal] distribution.
    ///
    ///  - All the parameters must be finite.
    ///  - `right_deviation` and `left_deviation` must be non-negative, and
    ///     at least one of them must be positive. A side with `0.0` deviation
    ///     carries no density.
    pub fn new(
        central_value: f64,
        right_deviation: f64,
        left_deviation: f64,
    ) -> Result<AsymmetricNormal, DistributionError> {
        DistributionError::check_finite(&[central_value, right_deviation, left_deviation])?;

        if right_deviation < 0.0 || left_deviation < 0.0 {
            return Err(DistributionError::InvalidDeviation(
                right_deviation.min(left_deviation),
                "left and right standard deviations must be positive numbers",
            ));
        }

        let total: f64 = right_deviation + left_deviation;
        if total <= 0.0 {
            return Err(DistributionError::InvalidDeviation(
                total,
                "at least one of the standard deviations must be stricly positive",
            ));
        }

        let support: Support = Support::Interval(
            central_value - SUPPORT_STANDARD_DEVIATIONS * left_deviation,
            central_value + SUPPORT_STANDARD_DEVIATIONS * right_deviation,
        );

        return Ok(AsymmetricNormal {
            id: InstanceId::fresh(),
            support,
            central_value,
            right_deviation,
            left_deviation,
            log_left_scale: (2.0 * left_deviation / total).ln(),
            log_right_scale: (2.0 * right_deviation / total).ln(),
        });
    }

    pub const fn get_right_deviation(&self) -> f64 {
        return self.right_deviation;
    }

    pub const fn get_left_deviation(&self) -> f64 {
        return self.left_deviation;
    }
}

impl Distribution for AsymmetricNormal {
    fn get_central_value(&self) -> f64 {
        return self.central_value;
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let (deviation, log_scale): (f64, f64) = if x < self.central_value {
            (self.left_deviation, self.log_left_scale)
        } else {
            (self.right_deviation, self.log_right_scale)
        };

        if deviation == 0.0 {
            // degenerate side
            return f64::NEG_INFINITY;
        }

        return log_scale + euclid::normal_log_pdf(x, self.central_value, deviation);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // probability of landing on the left side
        let a: f64 = self.left_deviation / (self.right_deviation + self.left_deviation);
        let r: f64 = rng.random::<f64>();
        let z: f64 = StandardNormal.sample(rng);
        let z: f64 = z.abs();

        return if a < r {
            self.central_value + z * self.right_deviation
        } else {
            self.central_value - z * self.left_deviation
        };
    }

    fn get_id(&self) -> InstanceId {
        return self.id;
    }
}

impl_identity!(AsymmetricNormal, Distribution);
