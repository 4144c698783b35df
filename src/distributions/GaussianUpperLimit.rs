//! # Gaussian upper limit
//!
//! An experimental upper limit (`x < limit` at a certain confidence level)
//! interpreted as a [HalfNormal] centered at `0.0`.
//!
//! The standard deviation is chosen so that the probability of `[0, limit]` is
//! exactly the confidence level:
//!
//! ```text
//! sigma = limit / quantile(0.5 + confidence_level / 2)
//! ```
//!
//! where `quantile` is the [standard normal quantile](crate::euclid::std_normal_quantile).
//! For example, a 95% limit at `10.0` gives `sigma = 10.0 / 1.959964 ~= 5.102`.
//!
//! The limit and the confidence level are only kept as descriptive information,
//! all the behaviour is the one of the underlying [HalfNormal].

use rand::Rng;

use crate::{
    distribution_trait::{Distribution, InstanceId, impl_identity},
    distributions::HalfNormal::HalfNormal,
    domain::Support,
    errors::DistributionError,
    euclid,
};

#[derive(Debug)]
pub struct GaussianUpperLimit {
    half_normal: HalfNormal,
    limit: f64,
    confidence_level: f64,
}

impl GaussianUpperLimit {
    /// Creates a new [GaussianUpperLimit].
    ///
    ///  - `limit` must be finite and not `0.0`.
    ///  - `confidence_level` must be a probability stricly between `0.0` and `1.0`
    ///     (at the endpoints the standard deviation degenerates to `inf` or `0.0`).
    pub fn new(limit: f64, confidence_level: f64) -> Result<GaussianUpperLimit, DistributionError> {
        DistributionError::check_finite(&[limit])?;

        if confidence_level.is_nan() || !(0.0 < confidence_level && confidence_level < 1.0) {
            return Err(DistributionError::InvalidConfidenceLevel(confidence_level));
        }

        let standard_deviation: f64 = GaussianUpperLimit::standard_deviation_for(limit, confidence_level);
        let half_normal: HalfNormal = HalfNormal::new(0.0, standard_deviation)?;

        return Ok(GaussianUpperLimit {
            half_normal,
            limit,
            confidence_level,
        });
    }

    /// Converts the confidence level into a Gaussian standard deviation.
    #[must_use]
    pub fn standard_deviation_for(limit: f64, confidence_level: f64) -> f64 {
        return limit / euclid::std_normal_quantile(0.5 + 0.5 * confidence_level);
    }

    pub const fn get_limit(&self) -> f64 {
        return self.limit;
    }

    pub const fn get_confidence_level(&self) -> f64 {
        return self.confidence_level;
    }

    /// The [HalfNormal] that implements this distribution.
    pub const fn as_half_normal(&self) -> &HalfNormal {
        return &self.half_normal;
    }

    /// Returns the (derived) standard deviation of the [HalfNormal].
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.half_normal.get_standard_deviation();
    }
}

impl Distribution for GaussianUpperLimit {
    fn get_central_value(&self) -> f64 {
        return self.half_normal.get_central_value();
    }

    fn get_support(&self) -> &Support {
        return self.half_normal.get_support();
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return self.half_normal.log_pdf(x);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.half_normal.sample(rng);
    }

    fn get_id(&self) -> InstanceId {
        return self.half_normal.get_id();
    }
}

impl_identity!(GaussianUpperLimit, Distribution);
