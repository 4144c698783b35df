//! All the implemented distributions.
//!
//! Every univariate variant can be wrapped in the closed set [UnivariateDistribution]
//! (with `.into()`), wich is what the [convolution engine](crate::convolution) works with.

// Analytic
pub mod AsymmetricNormal;
pub mod Delta;
pub mod GaussianUpperLimit;
pub mod HalfNormal;
pub mod Normal;
pub mod Uniform;

// Tabulated
pub mod Numerical;

// Multivariate
pub mod MultivariateNormal;

use rand::Rng;

use crate::{
    distribution_trait::{Distribution, InstanceId},
    domain::Support,
};

use AsymmetricNormal::AsymmetricNormal as AsymmetricNormalDistribution;
use Delta::Delta as DeltaDistribution;
use GaussianUpperLimit::GaussianUpperLimit as GaussianUpperLimitDistribution;
use HalfNormal::HalfNormal as HalfNormalDistribution;
use Normal::Normal as NormalDistribution;
use Numerical::NumericalDistribution;
use Uniform::Uniform as UniformDistribution;

/// The closed set of univariate distributions.
///
/// It implements [Distribution] by delegating to the wrapped variant, so the
/// identity (and therefore `==`) is the one of the inner distribution.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum UnivariateDistribution {
    Uniform(UniformDistribution),
    Delta(DeltaDistribution),
    Normal(NormalDistribution),
    AsymmetricNormal(AsymmetricNormalDistribution),
    HalfNormal(HalfNormalDistribution),
    GaussianUpperLimit(GaussianUpperLimitDistribution),
    Numerical(NumericalDistribution),
}

/// Evaluates `$call` with `$d` bound to the inner distribution.
macro_rules! delegate {
    ($self:ident, $d:ident => $call:expr) => {
        match $self {
            UnivariateDistribution::Uniform($d) => $call,
            UnivariateDistribution::Delta($d) => $call,
            UnivariateDistribution::Normal($d) => $call,
            UnivariateDistribution::AsymmetricNormal($d) => $call,
            UnivariateDistribution::HalfNormal($d) => $call,
            UnivariateDistribution::GaussianUpperLimit($d) => $call,
            UnivariateDistribution::Numerical($d) => $call,
        }
    };
}

impl UnivariateDistribution {
    /// A short human readable name of the variant (used for logging).
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        return match self {
            UnivariateDistribution::Uniform(_) => "Uniform",
            UnivariateDistribution::Delta(_) => "Delta",
            UnivariateDistribution::Normal(_) => "Normal",
            UnivariateDistribution::AsymmetricNormal(_) => "AsymmetricNormal",
            UnivariateDistribution::HalfNormal(_) => "HalfNormal",
            UnivariateDistribution::GaussianUpperLimit(_) => "GaussianUpperLimit",
            UnivariateDistribution::Numerical(_) => "Numerical",
        };
    }

    /// Returns the inner [NormalDistribution] if this is a [UnivariateDistribution::Normal].
    #[must_use]
    pub const fn as_normal(&self) -> Option<&NormalDistribution> {
        return match self {
            UnivariateDistribution::Normal(n) => Some(n),
            _ => None,
        };
    }

    /// Returns the inner [NumericalDistribution] if this is a [UnivariateDistribution::Numerical].
    #[must_use]
    pub const fn as_numerical(&self) -> Option<&NumericalDistribution> {
        return match self {
            UnivariateDistribution::Numerical(n) => Some(n),
            _ => None,
        };
    }
}

impl Distribution for UnivariateDistribution {
    fn get_central_value(&self) -> f64 {
        return delegate!(self, d => d.get_central_value());
    }

    fn get_support(&self) -> &Support {
        return delegate!(self, d => d.get_support());
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return delegate!(self, d => d.log_pdf(x));
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return delegate!(self, d => d.sample(rng));
    }

    fn get_id(&self) -> InstanceId {
        return delegate!(self, d => d.get_id());
    }

    fn log_pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        return delegate!(self, d => d.log_pdf_multiple(points));
    }

    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        return delegate!(self, d => d.sample_multiple(n, rng));
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $t:ty),* $(,)?) => {
        $(
            impl From<$t> for UnivariateDistribution {
                fn from(value: $t) -> Self {
                    return UnivariateDistribution::$variant(value);
                }
            }
        )*
    };
}

impl_from_variant!(
    Uniform => UniformDistribution,
    Delta => DeltaDistribution,
    Normal => NormalDistribution,
    AsymmetricNormal => AsymmetricNormalDistribution,
    HalfNormal => HalfNormalDistribution,
    GaussianUpperLimit => GaussianUpperLimitDistribution,
    Numerical => NumericalDistribution,
);
