use UncertaintyConvolution::{
    convolution::{convolve, convolve_distributions},
    distribution_trait::Distribution,
    distributions::{
        AsymmetricNormal::AsymmetricNormal, Delta::Delta, GaussianUpperLimit::GaussianUpperLimit,
        Normal::Normal, Uniform::Uniform, UnivariateDistribution,
    },
};
use rand::{SeedableRng, rngs::StdRng};

fn summary(name: &str, distribution: &UnivariateDistribution, rng: &mut StdRng) {
    let samples: Vec<f64> = distribution.sample_multiple(100_000, rng);
    let n: f64 = samples.len() as f64;
    let mean: f64 = samples.iter().sum::<f64>() / n;
    let variance: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);
    let (lo, hi): (f64, f64) = distribution.get_support().get_bounds();

    println!(
        "{name}: {} centered at {:.4}, support [{:.3}, {:.3}], sample mean {:.4}, sample std {:.4}",
        distribution.variant_name(),
        distribution.get_central_value(),
        lo,
        hi,
        mean,
        variance.sqrt()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut rng: StdRng = StdRng::seed_from_u64(2024);

    println!("*****************************************************************\n\
    A quantity measured as 1.00 with a statistical uncertainty of 0.03, a systematic \
    uncertainty of 0.04 and no uncertainty from its input value. \n");

    let gaussian: UnivariateDistribution = convolve(vec![
        Normal::new(1.0, 0.03)?.into(),
        Normal::new(1.0, 0.04)?.into(),
        Delta::new(1.0)?.into(),
    ])?;
    summary("statistical + systematic", &gaussian, &mut rng);

    println!("\n*****************************************************************\n\
    Now we add a flat theory uncertainty of +-0.1 and an asymmetric one (+0.05 -0.02). \
    The result can only be computed numerically. \n");

    let numerical: UnivariateDistribution = convolve_distributions()
        .distributions(vec![
            gaussian,
            Uniform::new(1.0, 0.1)?.into(),
            AsymmetricNormal::new(1.0, 0.05, 0.02)?.into(),
        ])
        .convolution_steps(2001)
        .call()?;
    summary("total", &numerical, &mut rng);

    for x in [0.8, 0.9, 1.0, 1.1, 1.2] {
        println!("\tpdf({x:.2}) = {:.4}", numerical.pdf(x));
    }

    println!("\n*****************************************************************\n\
    An upper limit of 10 at 95% confidence level is a half normal with sigma = 10 / 1.96. \n");

    let limit: GaussianUpperLimit = GaussianUpperLimit::new(10.0, 0.95)?;
    println!("sigma = {:.4}", limit.get_standard_deviation());
    let limit: UnivariateDistribution = limit.into();
    summary("upper limit", &limit, &mut rng);

    return Ok(());
}
