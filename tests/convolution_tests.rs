use UncertaintyConvolution::{
    convolution::{combine_normals, convolve, convolve_distributions, convolve_numerical},
    distribution_trait::Distribution,
    distributions::{
        AsymmetricNormal::AsymmetricNormal, Delta::Delta, Normal::Normal, Numerical::NumericalDistribution,
        Uniform::Uniform, UnivariateDistribution,
    },
    domain::Support,
    errors::DistributionError,
    euclid,
};
use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};

fn sample_mean_and_variance(distribution: &UnivariateDistribution, n: usize, seed: u64) -> (f64, f64) {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let samples: Vec<f64> = distribution.sample_multiple(n, &mut rng);
    let m: f64 = samples.len() as f64;
    let mean: f64 = samples.iter().sum::<f64>() / m;
    let variance: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (m - 1.0);
    return (mean, variance);
}

#[inline]
fn assert_relative_eq(a: f64, b: f64, relative: f64) {
    assert!(
        (a - b).abs() <= relative * b.abs(),
        "assertion failed: `(left ~= right)` \
         (left: `{:?}`, right: `{:?}`, relative tolerance: `{:?}`)",
        a,
        b,
        relative
    );
}

#[test]
fn normals_add_in_quadrature() {
    let result: UnivariateDistribution = convolve(vec![
        Normal::new(0.0, 3.0).unwrap().into(),
        Normal::new(0.0, 4.0).unwrap().into(),
    ])
    .unwrap();

    let normal: &Normal = result.as_normal().expect("the combination of normals is normal");
    assert_eq!(normal.get_mean(), 0.0);
    assert_eq!(normal.get_standard_deviation(), 5.0);
}

#[test]
fn single_distribution_is_returned_unchanged() {
    let normal: Normal = Normal::new(0.0, 1.0).unwrap();
    let id = normal.get_id();
    let result: UnivariateDistribution = convolve(vec![normal.into()]).unwrap();
    assert_eq!(result.get_id(), id);

    let uniform: Uniform = Uniform::new(1.0, 2.0).unwrap();
    let id = uniform.get_id();
    let result: UnivariateDistribution = convolve(vec![uniform.into()]).unwrap();
    assert_eq!(result.get_id(), id);
}

#[test]
fn deltas_add_no_spread() {
    let reference: Normal = Normal::new(2.0, 1.0).unwrap();
    let result: UnivariateDistribution = convolve(vec![
        Delta::new(2.0).unwrap().into(),
        Normal::new(2.0, 1.0).unwrap().into(),
    ])
    .unwrap();

    assert_eq!(result.variant_name(), "Normal");
    assert_eq!(result.get_central_value(), 2.0);
    assert_eq!(result.get_support(), reference.get_support());
    for x in [-1.0, 0.5, 2.0, 3.3, 8.0] {
        assert_eq!(result.log_pdf(x), reference.log_pdf(x));
    }
}

#[test]
fn only_deltas() {
    let result: UnivariateDistribution = convolve(vec![
        Delta::new(-1.5).unwrap().into(),
        Delta::new(-1.5).unwrap().into(),
    ])
    .unwrap();

    assert_eq!(result.variant_name(), "Delta");
    assert_eq!(result.get_central_value(), -1.5);
    assert_eq!(result.log_pdf(-1.5), 0.0);
}

#[test]
fn single_other_with_deltas_is_returned_unchanged() {
    let uniform: Uniform = Uniform::new(1.0, 2.0).unwrap();
    let id = uniform.get_id();
    let result: UnivariateDistribution =
        convolve(vec![Delta::new(1.0).unwrap().into(), uniform.into()]).unwrap();
    assert_eq!(result.get_id(), id);
}

#[test]
fn zero_width_uniforms_add_no_spread() {
    let reference: Normal = Normal::new(0.0, 1.0).unwrap();
    let result: UnivariateDistribution = convolve(vec![
        Normal::new(0.0, 1.0).unwrap().into(),
        Uniform::new(0.0, 0.0).unwrap().into(),
    ])
    .unwrap();
    assert_eq!(result.variant_name(), "Normal");
    assert_eq!(result.as_normal().map(|n| n.get_standard_deviation()), Some(1.0));
    for x in [-2.0, 0.0, 0.7] {
        assert_eq!(result.log_pdf(x), reference.log_pdf(x));
    }

    let result: UnivariateDistribution = convolve(vec![
        Uniform::new(0.0, 0.0).unwrap().into(),
        Uniform::new(0.0, 0.0).unwrap().into(),
    ])
    .unwrap();
    assert_eq!(result.variant_name(), "Delta");
    assert_eq!(result.get_central_value(), 0.0);

    let uniform: Uniform = Uniform::new(0.0, 1.0).unwrap();
    let id = uniform.get_id();
    let result: UnivariateDistribution =
        convolve(vec![Uniform::new(0.0, 0.0).unwrap().into(), uniform.into()]).unwrap();
    assert_eq!(result.get_id(), id);
}

#[test]
fn contract_violations() {
    assert_eq!(convolve(Vec::new()).unwrap_err(), DistributionError::EmptyInput);

    let result = convolve(vec![
        Normal::new(0.0, 1.0).unwrap().into(),
        Normal::new(1.0, 1.0).unwrap().into(),
    ]);
    assert_eq!(
        result.unwrap_err(),
        DistributionError::MismatchedCentralValues {
            expected: 0.0,
            found: 1.0
        }
    );

    assert_eq!(combine_normals(&[]).unwrap_err(), DistributionError::EmptyInput);
    assert_eq!(convolve_numerical(&[], 100).unwrap_err(), DistributionError::EmptyInput);

    let numerical: NumericalDistribution =
        NumericalDistribution::from_distribution(&Uniform::new(0.0, 1.0).unwrap()).unwrap();
    assert_eq!(
        convolve_numerical(&[numerical], 1).unwrap_err(),
        DistributionError::NotEnoughPoints(2)
    );
}

#[test]
fn normal_and_uniform() {
    // var = 2^2 + 3^2 / 3
    let result: UnivariateDistribution = convolve(vec![
        Normal::new(0.0, 2.0).unwrap().into(),
        Uniform::new(0.0, 3.0).unwrap().into(),
    ])
    .unwrap();

    let numerical: &NumericalDistribution = result.as_numerical().expect("a numerical result");
    assert_eq!(result.get_central_value(), 0.0);
    assert_eq!(result.get_support(), &Support::Interval(-12.0, 12.0));
    assert_eq!(numerical.get_x().len(), 1000);

    let (mean, variance): (f64, f64) = sample_mean_and_variance(&result, 50_000, 30);
    assert_approx_eq!(mean, 0.0, 0.05);
    assert_relative_eq(variance, 7.0, 0.05);

    let total: f64 = euclid::numerical_integration_finite(|x: f64| result.pdf(x), (-12.0, 12.0), 100_000);
    assert_approx_eq!(total, 1.0, 5e-3);
}

#[test]
fn combination_can_be_combined_again() {
    let first: UnivariateDistribution = convolve(vec![
        Normal::new(0.0, 2.0).unwrap().into(),
        Uniform::new(0.0, 3.0).unwrap().into(),
    ])
    .unwrap();

    let second: UnivariateDistribution =
        convolve(vec![first, Normal::new(0.0, 1.0).unwrap().into()]).unwrap();

    assert_eq!(second.get_central_value(), 0.0);
    let (_mean, variance): (f64, f64) = sample_mean_and_variance(&second, 50_000, 31);
    assert_relative_eq(variance, 8.0, 0.05);
}

#[test]
fn custom_resolution() {
    let result: UnivariateDistribution = convolve_distributions()
        .distributions(vec![
            Uniform::new(1.0, 0.5).unwrap().into(),
            AsymmetricNormal::new(1.0, 0.2, 0.2).unwrap().into(),
        ])
        .discretization_steps(500)
        .convolution_steps(2001)
        .call()
        .unwrap();

    let numerical: &NumericalDistribution = result.as_numerical().expect("a numerical result");
    assert_eq!(numerical.get_x().len(), 2001);
    assert_eq!(result.get_central_value(), 1.0);

    // var = 0.5^2 / 3 + 0.2^2
    let (mean, variance): (f64, f64) = sample_mean_and_variance(&result, 50_000, 32);
    assert_approx_eq!(mean, 1.0, 0.01);
    assert_relative_eq(variance, 0.25 / 3.0 + 0.04, 0.05);
}
