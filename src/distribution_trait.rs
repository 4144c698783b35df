//! This script contains the interfaces used to comunicate with the distributions.
//!
//! Every distribution provides the same small contract: a central value, a
//! [Support], random sampling and the evaluation of the natural logarithm of
//! the density. Univariate distributions implement [Distribution] and
//! multivariate ones implement [MultivariateDistribution].
//!
//! ## Identity
//!
//! Distributions are compared by **identity**, never by value: the tabulated
//! densities and interpolants inside them are not meaningfully comparable.
//! Every constructed instance receives a fresh [InstanceId] and `==` / `Hash`
//! only look at it. This is also why distributions do not implement `Clone`.
//!
//! ## Randomness
//!
//! There is no hidden global generator. Every sampling method receives the
//! random source explicitly, so seeding a [rand::rngs::StdRng] is enough
//! for reproducible results.

use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::DVector;
use rand::Rng;

use crate::domain::Support;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(0);

/// Unique token that identifies a distribution instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Returns a new id, different from all the previously created ones.
    pub fn fresh() -> InstanceId {
        return InstanceId(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed));
    }
}

/// The trait for any continuous univariate distribution.
pub trait Distribution {
    //Requiered method:

    /// Returns the central value of the distribution. It is the representative
    /// point estimate of the quantity, **not** necessarly the mean.
    fn get_central_value(&self) -> f64;

    /// Returns a reference to the support of the distribution. Outside of it the
    /// density is `0.0`.
    fn get_support(&self) -> &Support;

    /// Evaluates the natural logarithm of the
    /// [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// at point `x`.
    ///
    /// Evaluating outside the support is **not** an error: it returns `-inf`.
    fn log_pdf(&self, x: f64) -> f64;

    /// Samples the distribution at random using the random source `rng`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Returns the unique identity of this instance.
    fn get_id(&self) -> InstanceId;

    // Provided methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function).
    /// Same as `self.log_pdf(x).exp()`.
    fn pdf(&self, x: f64) -> f64 {
        return self.log_pdf(x).exp();
    }

    /// log_pdf_multiple allows to evaluate the [Distribution::log_pdf] at multiple points.
    fn log_pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        return points.iter().map(|&x| self.log_pdf(x)).collect::<Vec<f64>>();
    }

    /// sample_multiple draws `n` independent samples of the distribution.
    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);

        for _i in 0..n {
            ret.push(self.sample(rng));
        }

        return ret;
    }
}

/// The trait for any continuous multivariate distribution.
///
/// Points are represented as [DVector]s. Evaluating the density at a point
/// of the wrong dimension **panicks**.
pub trait MultivariateDistribution {
    /// Returns the central value (a vector) of the distribution.
    fn get_central_value(&self) -> &DVector<f64>;

    /// Returns the support of the distribution.
    fn get_support(&self) -> &Support;

    /// The number of components of every point.
    fn dimension(&self) -> usize;

    /// Evaluates the natural logarithm of the density at `x`.
    fn log_pdf(&self, x: &DVector<f64>) -> f64;

    /// Samples the distribution at random using the random source `rng`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64>;

    /// Returns the unique identity of this instance.
    fn get_id(&self) -> InstanceId;

    /// Evaluates [MultivariateDistribution::log_pdf] at multiple points.
    fn log_pdf_multiple(&self, points: &[DVector<f64>]) -> Vec<f64> {
        return points.iter().map(|x| self.log_pdf(x)).collect::<Vec<f64>>();
    }

    /// Draws `n` independent samples of the distribution.
    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<DVector<f64>> {
        return (0..n).map(|_| self.sample(rng)).collect::<Vec<DVector<f64>>>();
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` trough the [InstanceId] of a distribution.
macro_rules! impl_identity {
    ($t:ty, $tr:ident) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                return $tr::get_id(self) == $tr::get_id(other);
            }
        }

        impl Eq for $t {}

        impl std::hash::Hash for $t {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $tr::get_id(self).hash(state);
            }
        }
    };
}

pub(crate) use impl_identity;
