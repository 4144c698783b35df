use UncertaintyConvolution::euclid::{self, LinearInterpolator};
use assert_approx_eq::assert_approx_eq;

fn assert_all_approx_eq(found: &[f64], expected: &[f64], eps: f64) {
    assert_eq!(found.len(), expected.len());
    for (&f, &e) in found.iter().zip(expected.iter()) {
        assert_approx_eq!(f, e, eps);
    }
}

#[cfg(test)]
mod convolution_tests {
    use super::*;

    #[test]
    fn same_mode_is_centered() {
        // full = [0, 1, 2.5, 4, 1.5], cropped from (3 - 1) / 2 = 1
        let result: Vec<f64> = euclid::fft_convolve_same(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
        assert_all_approx_eq(&result, &[1.0, 2.5, 4.0], 1e-12);
    }

    #[test]
    fn same_mode_with_even_kernel() {
        // full = [1, 3, 5, 3], cropped from (2 - 1) / 2 = 0
        let result: Vec<f64> = euclid::fft_convolve_same(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_all_approx_eq(&result, &[1.0, 3.0, 5.0], 1e-12);

        // full = [1, 2, 3, 4, 3, 2, 1], cropped from (4 - 1) / 2 = 1
        let result: Vec<f64> = euclid::fft_convolve_same(&[1.0, 1.0, 1.0, 1.0], &[1.0, 1.0, 1.0, 1.0]);
        assert_all_approx_eq(&result, &[2.0, 3.0, 4.0, 3.0], 1e-12);
    }

    #[test]
    fn identity_kernel() {
        let a: Vec<f64> = vec![0.5, 1.5, -2.0, 4.0, 0.25];
        let result: Vec<f64> = euclid::fft_convolve_same(&a, &[0.0, 1.0, 0.0]);
        assert_all_approx_eq(&result, &a, 1e-12);
    }

    #[test]
    fn empty_input() {
        assert!(euclid::fft_convolve_same(&[], &[1.0, 2.0]).is_empty());
        assert!(euclid::fft_convolve_same(&[1.0, 2.0], &[]).is_empty());
    }
}

#[cfg(test)]
mod quantile_tests {
    use super::*;

    #[test]
    fn tails() {
        assert_approx_eq!(euclid::std_normal_quantile(1e-10), -6.361_340_902_404_056, 1e-8);
        assert_approx_eq!(euclid::std_normal_quantile(0.001), -3.090_232_306_167_813_6, 1e-10);
        assert_approx_eq!(euclid::std_normal_quantile(0.999), 3.090_232_306_167_813_6, 1e-10);
        assert_approx_eq!(euclid::std_normal_quantile(0.01), -2.326_347_874_040_841, 1e-10);
    }

    #[test]
    fn central_region() {
        assert_approx_eq!(euclid::std_normal_quantile(0.5), 0.0, 1e-14);
        assert_approx_eq!(euclid::std_normal_quantile(0.975), 1.959_963_984_540_054, 1e-10);
        assert_approx_eq!(euclid::std_normal_quantile(0.2), -0.841_621_233_572_914_3, 1e-10);
    }

    #[test]
    fn bounds() {
        assert_eq!(euclid::std_normal_quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(euclid::std_normal_quantile(1.0), f64::INFINITY);
        assert_eq!(euclid::std_normal_quantile(-0.5), f64::NEG_INFINITY);
        assert_eq!(euclid::std_normal_quantile(1.5), f64::INFINITY);
    }

    #[test]
    #[should_panic]
    fn nan_panics() {
        let _ = euclid::std_normal_quantile(f64::NAN);
    }
}

#[cfg(test)]
mod interpolator_tests {
    use super::*;

    #[test]
    fn segments_touching_neg_infinity() {
        let interpolator: LinearInterpolator =
            LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, f64::NEG_INFINITY, 1.0], f64::NEG_INFINITY);

        assert_eq!(interpolator.evaluate(0.0), 0.0);
        assert_eq!(interpolator.evaluate(0.5), f64::NEG_INFINITY);
        assert_eq!(interpolator.evaluate(1.0), f64::NEG_INFINITY);
        assert_eq!(interpolator.evaluate(1.5), f64::NEG_INFINITY);
        assert_eq!(interpolator.evaluate(2.0), 1.0);
        // outside
        assert_eq!(interpolator.evaluate(-0.1), f64::NEG_INFINITY);
        assert_eq!(interpolator.evaluate(3.0), f64::NEG_INFINITY);
        assert_eq!(interpolator.evaluate(f64::NAN), f64::NEG_INFINITY);
    }

    #[test]
    fn flat_cdf_run() {
        // quantile interpolator of a cdf with a repeated value
        let interpolator: LinearInterpolator =
            LinearInterpolator::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 2.0, 3.0], f64::NAN);

        assert_eq!(interpolator.evaluate(0.5), 1.0);
        assert_approx_eq!(interpolator.evaluate(0.25), 0.5, 1e-14);
        assert_approx_eq!(interpolator.evaluate(0.75), 2.5, 1e-14);
        assert_eq!(interpolator.evaluate(1.0), 3.0);
        assert!(interpolator.evaluate(1.5).is_nan());
    }
}
