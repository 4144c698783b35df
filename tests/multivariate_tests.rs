use UncertaintyConvolution::{
    distribution_trait::MultivariateDistribution, distributions::MultivariateNormal::MultivariateNormal,
    domain::Support, errors::DistributionError,
};
use assert_approx_eq::assert_approx_eq;
use nalgebra::{DMatrix, DVector};
use rand::{SeedableRng, rngs::StdRng};

use std::f64::consts::PI;

fn correlated_2d() -> MultivariateNormal {
    // sigma = (2, 1), rho = 0.6
    let mean: DVector<f64> = DVector::from_vec(vec![1.0, 2.0]);
    let covariance: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[4.0, 1.2, 1.2, 1.0]);
    return MultivariateNormal::new(mean, covariance).unwrap();
}

#[test]
fn log_pdf_matches_the_closed_form() {
    let distribution: MultivariateNormal = correlated_2d();
    assert_eq!(distribution.dimension(), 2);
    assert_eq!(distribution.get_support(), &Support::Unbounded);

    // d = (1, -0.5), det = 2.56, d^T cov^-1 d = 1.25
    let x: DVector<f64> = DVector::from_vec(vec![2.0, 1.5]);
    let expected: f64 = -0.5 * 1.25 - (2.0 * PI).ln() - 0.5 * 2.56_f64.ln();
    assert_approx_eq!(distribution.log_pdf(&x), expected, 1e-12);
    assert_approx_eq!(distribution.get_log_determinant(), 2.56_f64.ln(), 1e-12);

    let at_mean: f64 = distribution.log_pdf(distribution.get_central_value());
    assert_approx_eq!(at_mean, -(2.0 * PI).ln() - 0.5 * 2.56_f64.ln(), 1e-12);

    let values: Vec<f64> = distribution.log_pdf_multiple(&[x.clone(), x]);
    assert_eq!(values.len(), 2);
    assert_eq!(values[0], values[1]);
}

#[test]
fn very_different_scales() {
    let mean: DVector<f64> = DVector::from_vec(vec![0.0, 0.0]);
    let covariance: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[1e-10, 0.0, 0.0, 1e10]);
    let distribution: MultivariateNormal = MultivariateNormal::new(mean.clone(), covariance).unwrap();

    // det = 1
    assert_approx_eq!(distribution.log_pdf(&mean), -(2.0 * PI).ln(), 1e-10);

    let x: DVector<f64> = DVector::from_vec(vec![1e-5, 1e5]);
    assert_approx_eq!(distribution.log_pdf(&x), -(2.0 * PI).ln() - 1.0, 1e-10);
}

#[test]
fn from_correlation_is_equivalent() {
    let reference: MultivariateNormal = correlated_2d();
    let distribution: MultivariateNormal = MultivariateNormal::from_correlation(
        DVector::from_vec(vec![1.0, 2.0]),
        &DVector::from_vec(vec![2.0, 1.0]),
        &DMatrix::from_row_slice(2, 2, &[1.0, 0.6, 0.6, 1.0]),
    )
    .unwrap();

    assert_ne!(distribution, reference);
    let x: DVector<f64> = DVector::from_vec(vec![0.3, 2.7]);
    assert_approx_eq!(distribution.log_pdf(&x), reference.log_pdf(&x), 1e-12);
    assert_approx_eq!(distribution.get_covariance()[(0, 1)], 1.2, 1e-12);
    assert_approx_eq!(distribution.get_standard_deviations()[0], 2.0, 1e-12);
}

#[test]
fn not_positive_definite() {
    let covariance: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
    let result = MultivariateNormal::new(DVector::from_vec(vec![0.0, 0.0]), covariance);
    assert!(matches!(result, Err(DistributionError::NotPositiveDefinite(_))));

    let covariance: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[-1.0, 0.0, 0.0, 1.0]);
    let result = MultivariateNormal::new(DVector::from_vec(vec![0.0, 0.0]), covariance);
    assert!(matches!(result, Err(DistributionError::NotPositiveDefinite(_))));
}

#[test]
fn invalid_shapes() {
    let covariance: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 0.2, 1.0]);
    assert_eq!(
        MultivariateNormal::new(DVector::from_vec(vec![0.0, 0.0]), covariance).unwrap_err(),
        DistributionError::NotSymmetric
    );

    let covariance: DMatrix<f64> = DMatrix::identity(3, 3);
    assert_eq!(
        MultivariateNormal::new(DVector::from_vec(vec![0.0, 0.0]), covariance).unwrap_err(),
        DistributionError::DimensionMismatch { expected: 2, found: 3 }
    );

    let covariance: DMatrix<f64> = DMatrix::identity(2, 2);
    assert_eq!(
        MultivariateNormal::new(DVector::from_vec(vec![0.0, f64::NAN]), covariance).unwrap_err(),
        DistributionError::NanErr
    );
}

#[test]
#[should_panic]
fn wrong_dimension_panics() {
    let distribution: MultivariateNormal = correlated_2d();
    let _ = distribution.log_pdf(&DVector::from_vec(vec![1.0, 2.0, 3.0]));
}

#[test]
fn sample_covariance() {
    let mut rng: StdRng = StdRng::seed_from_u64(20);
    let distribution: MultivariateNormal = correlated_2d();
    let n: usize = 20_000;
    let samples: Vec<DVector<f64>> = distribution.sample_multiple(n, &mut rng);
    assert_eq!(samples.len(), n);
    assert!(samples.iter().all(|s| s.len() == 2));

    let mut mean: DVector<f64> = DVector::zeros(2);
    for s in &samples {
        mean += s;
    }
    mean /= n as f64;

    let mut covariance: DMatrix<f64> = DMatrix::zeros(2, 2);
    for s in &samples {
        let d: DVector<f64> = s - &mean;
        covariance += &d * d.transpose();
    }
    covariance /= (n - 1) as f64;

    assert_approx_eq!(mean[0], 1.0, 0.05);
    assert_approx_eq!(mean[1], 2.0, 0.03);
    assert_approx_eq!(covariance[(0, 0)], 4.0, 0.2);
    assert_approx_eq!(covariance[(1, 1)], 1.0, 0.05);
    assert_approx_eq!(covariance[(0, 1)], 1.2, 0.08);
}
