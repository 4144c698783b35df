#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `UncertaintyConvolution` should have a snake case name convert the identifier to snake case: `uncertainty_convolution`"
// The rest of the names will follow the snake_case convention.

//! # Uncertainty Convolution
//!
//! This library represents the uncertainty of measured or predicted quantities
//! as probability distributions and combines independent uncertainties on the
//! same quantity into a single distribution.
//!
//! - [x] Common univariate distributions for uncertainties
//! - [x] Tabulated (numerical) distributions with inverse CDF sampling
//! - [x] Correlated measurements ([MultivariateNormal](distributions::MultivariateNormal))
//! - [x] Analytic combination of Gaussian uncertainties
//! - [x] Numerical combination (FFT convolution) of everything else
//! - [x] Updated to rust 2024 version
//!
//! ## Distributions
//!
//! Every univariate distribution implements the trait [Distribution]. The only
//! thing the rest of a program should rely on is this small contract:
//!  - [get_central_value](Distribution::get_central_value): the representative value.
//!  - [get_support](Distribution::get_support): where the density is not `0.0` ([domain::Support]).
//!  - [log_pdf](Distribution::log_pdf) / [log_pdf_multiple](Distribution::log_pdf_multiple):
//!     the natural logarithm of the density (`-inf` outside the support).
//!  - [sample](Distribution::sample) / [sample_multiple](Distribution::sample_multiple):
//!     random samples, drawn from an explicit random source.
//!
//! ### Univariate distributions:
//!
//!  - [x] [Uniform](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Delta](crate::distributions::Delta) ([Wiki](https://en.wikipedia.org/wiki/Dirac_delta_function))
//!  - [x] [Normal](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Asymmetric normal](crate::distributions::AsymmetricNormal)
//!  - [x] [Half normal](crate::distributions::HalfNormal) ([Wiki](https://en.wikipedia.org/wiki/Half-normal_distribution))
//!  - [x] [Gaussian upper limit](crate::distributions::GaussianUpperLimit)
//!  - [x] [Numerical](crate::distributions::Numerical)
//!
//! All of them can be put in a [UnivariateDistribution](distributions::UnivariateDistribution).
//!
//! ### Multivariate distributions:
//!
//!  - [x] [Multivariate normal](crate::distributions::MultivariateNormal) ([Wiki](https://en.wikipedia.org/wiki/Multivariate_normal_distribution))
//!
//! ## Combination
//!
//! Use [convolve](convolution::convolve) (or the builder
//! [convolve_distributions](convolution::convolve_distributions) to choose the resolutions).
//!
//! ```ignore
//! let total = convolve(vec![
//!     Normal::new(1.0, 0.3)?.into(),
//!     Uniform::new(1.0, 0.5)?.into(),
//! ])?;
//! let samples: Vec<f64> = total.sample_multiple(1000, &mut rng);
//! ```
//!
//! ## Logging
//!
//! The library logs trough the [log] facade (`debug` and `trace` levels) and
//! never installs a logger.
//!

pub mod configuration;
pub mod convolution;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;

pub use distribution_trait::{Distribution, MultivariateDistribution};
