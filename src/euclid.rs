//! Euclid contains uscefull math functions.
//!
//! Here we keep all the numerical machinery shared by the distributions:
//!  - Gaussian densities and the standard normal [cdf](std_normal_cdf) / [quantile](std_normal_quantile).
//!  - Grids ([linspace]) and [numerical integration](numerical_integration_finite).
//!  - Piecewise [linear interpolation](LinearInterpolator).
//!  - Discrete convolution trough the [FFT](fft_convolve_same).
//!

use rustfft::{FftPlanner, num_complex::Complex};

/// `ln(sqrt(2π)) = 0.5*ln(2π)`
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// `1/sqrt(2π)`
pub const INV_SQRT_2_PI: f64 = 0.398_942_280_401_432_7;

// coefitients for the (aprox) computation of the cdf of the std normal
const B_ZERO_COEFITIENT: f64 = 2.92678600515804815402;
const B_ONE_COEFITIENTS: [f64; 5] = [
    8.97280659046817350354,
    10.27157061171363078863,
    12.72323261907760928036,
    16.88639562007936907786,
    24.12333774572479110372,
];

const B_TWO_COEFITIENTS: [f64; 5] = [
    5.81582518933527390512,
    5.70347935898051436684,
    5.51862483025707963145,
    5.26184239579604207321,
    4.92081346632882032881,
];

const C_ONE_COEFITIENTS: [f64; 5] = [
    11.61511226260603247078,
    18.25323235347346524796,
    18.38871225773938486923,
    18.61193318971775795045,
    24.14804072812762821134,
];

const C_TWO_COEFITIENTS: [f64; 5] = [
    3.83362947800146179416,
    7.30756258553673541139,
    8.42742300458043240405,
    5.66479518878470764762,
    4.91396098895240075156,
];

// Acklam's coefitients for the inverse cdf of the std normal
const ACKLAM_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const ACKLAM_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const ACKLAM_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const ACKLAM_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];
const ACKLAM_P_LOW: f64 = 0.02425;

/// Natural logarithm of the density of a [normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
/// `N(mean, standard_deviation)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mean)/sd)^2 - ln(sd) - ln(sqrt(2π))`
///
/// The `standard_deviation` is assumed to be stricly positive.
#[must_use]
pub fn normal_log_pdf(x: f64, mean: f64, standard_deviation: f64) -> f64 {
    let z: f64 = (x - mean) / standard_deviation;
    return -0.5 * z * z - standard_deviation.ln() - LN_SQRT_2PI;
}

/// Density of the standard normal distribution.
#[must_use]
pub fn std_normal_pdf(x: f64) -> f64 {
    return INV_SQRT_2_PI * (-x * x * 0.5).exp();
}

/// [Cumulative distribution function](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
/// of the standard normal distribution.
///
/// **Panicks** is `x` is a NaN.
#[must_use]
pub fn std_normal_cdf(x: f64) -> f64 {
    /*
        We will use the aproximation by:
        Dia, Yaya D. (2023). "Approximate Incomplete Integrals, Application to Complementary Error Function". SSRN. doi:10.2139/ssrn.4487559. S2CID 259689086.

        The precision of this method is extremly high: an error of less than
        `~1.1 * 10^-16 ~= 2^-53`. Considering that
        `f64::EPSILON = 2.220446049250313e-16 ~= 2.22 * 10^-16`, this solution
        may as well be considered exact if we are working with `f64`.

        To evaluate the polynomials we will do Horner's rule.
        `x.mul_add(a, b) = x * a + b`
    */

    if x.is_nan() {
        std::panic!("Tried to evaluate the cdf function of StdNormal with a NaN value. \n");
    }

    if x.is_infinite() {
        return if x.is_sign_positive() { 1.0 } else { 0.0 };
    }

    let (point, flipped): (f64, bool) = if x < 0.0 { (-x, true) } else { (x, false) };

    let mut numerator: f64 = 1.0;
    let mut denominator: f64 = point + B_ZERO_COEFITIENT;
    for i in 0..5 {
        numerator *= (point + C_TWO_COEFITIENTS[i]).mul_add(point, C_ONE_COEFITIENTS[i]);
        denominator *= (point + B_TWO_COEFITIENTS[i]).mul_add(point, B_ONE_COEFITIENTS[i]);
    }

    // `aproximation` = `1 - cdf(point)`
    let aproximation: f64 = numerator / denominator * std_normal_pdf(point);

    return if flipped { aproximation } else { 1.0 - aproximation };
}

/// The [quantile function](https://en.wikipedia.org/wiki/Quantile_function) of the
/// standard normal distribution (also called the probit function).
///
///  - Returns `-inf` for `p <= 0.0` and `inf` for `1.0 <= p`.
///  - **Panicks** is `p` is a NaN.
#[must_use]
pub fn std_normal_quantile(p: f64) -> f64 {
    /*
        Plan:

        Acklam's rational approximation gives a relative error smaller than
        `1.15 * 10^-9`. Then a single iteration of Newton's method on the (very
        precise) [std_normal_cdf] brings it to essentially full precision.

        g_n+1 = g_n - (cdf(g_n) - p) / pdf(g_n)
    */

    if p.is_nan() {
        std::panic!("Tried to evaluate the quantile function of StdNormal with a NaN value. \n");
    }

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if 1.0 <= p {
        return f64::INFINITY;
    }

    let horner = |coefs: &[f64], x: f64| coefs.iter().fold(0.0, |acc: f64, &c: &f64| acc.mul_add(x, c));

    let guess: f64 = if p < ACKLAM_P_LOW {
        let q: f64 = (-2.0 * p.ln()).sqrt();
        horner(&ACKLAM_C, q) / horner(&ACKLAM_D, q).mul_add(q, 1.0)
    } else if p <= 1.0 - ACKLAM_P_LOW {
        let q: f64 = p - 0.5;
        let r: f64 = q * q;
        horner(&ACKLAM_A, r) * q / horner(&ACKLAM_B, r).mul_add(r, 1.0)
    } else {
        let q: f64 = (-2.0 * (1.0 - p).ln()).sqrt();
        -horner(&ACKLAM_C, q) / horner(&ACKLAM_D, q).mul_add(q, 1.0)
    };

    let pdf_guess: f64 = std_normal_pdf(guess);
    if pdf_guess < f64::MIN_POSITIVE {
        // too far in the tails, Newton's step would not be reliable
        return guess;
    }

    return guess - (std_normal_cdf(guess) - p) / pdf_guess;
}

/// Returns `n` points evenly spaced in the closed interval `[start, end]`.
///
/// The first and last values are **exactly** `start` and `end` (if `2 <= n`).
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }

    let step: f64 = (end - start) / ((n - 1) as f64);
    let mut ret: Vec<f64> = (0..n).map(|i: usize| start + (i as f64) * step).collect::<Vec<f64>>();
    ret[n - 1] = end;

    return ret;
}

/// Numerically integrates `func` in the finite interval given by `bounds`
/// using [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule).
///
/// `num_steps` is rounded up to an even number (and at least 2).
pub fn numerical_integration_finite(func: impl Fn(f64) -> f64, bounds: (f64, f64), num_steps: u64) -> f64 {
    let steps: u64 = (num_steps.max(2) + 1) & !1;
    let step_length: f64 = (bounds.1 - bounds.0) / (steps as f64);

    let mut accumulator: f64 = func(bounds.0) + func(bounds.1);
    for i in 1..steps {
        let x: f64 = bounds.0 + (i as f64) * step_length;
        let weight: f64 = if i % 2 == 1 { 4.0 } else { 2.0 };
        accumulator += weight * func(x);
    }

    return accumulator * step_length / 3.0;
}

/// A piecewise [linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation)
/// of tabulated data `(x, y)`.
///
/// Outside of `[x[0], x[n-1]]` the `fill_value` is returned.
///
/// `-inf` is a valid node value (a zero density in log space): any segment
/// touching a `-inf` node evaluates to `-inf`, except exactly at the finite node.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    fill_value: f64,
}

impl LinearInterpolator {
    /// Creates a new [LinearInterpolator].
    ///
    /// The caller guarantees that:
    ///  - `x` and `y` have the same (non-zero) length.
    ///  - `x` is sorted (non-decreasing). Repeated nodes are allowed, the
    ///     first one of a run is used.
    ///  - there are no NaNs in `x` or `y`.
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, fill_value: f64) -> LinearInterpolator {
        assert_eq!(x.len(), y.len(), "LinearInterpolator: `x` and `y` must have the same length. ");
        assert!(!x.is_empty(), "LinearInterpolator: can't interpolate without nodes. ");
        return LinearInterpolator { x, y, fill_value };
    }

    pub fn get_x(&self) -> &[f64] {
        return &self.x;
    }

    pub fn get_y(&self) -> &[f64] {
        return &self.y;
    }

    #[must_use]
    pub fn evaluate(&self, point: f64) -> f64 {
        let n: usize = self.x.len();
        if point.is_nan() || point < self.x[0] || self.x[n - 1] < point {
            return self.fill_value;
        }

        // first index `i` with `point <= x[i]`
        let i: usize = self.x.partition_point(|&v: &f64| v < point);
        if i == 0 {
            // point == x[0]
            return self.y[0];
        }

        // here x[i - 1] < point <= x[i], so the segment is never degenerate
        let (x0, x1): (f64, f64) = (self.x[i - 1], self.x[i]);
        let (y0, y1): (f64, f64) = (self.y[i - 1], self.y[i]);

        if point == x1 {
            return y1;
        }
        if y0 == f64::NEG_INFINITY || y1 == f64::NEG_INFINITY {
            return f64::NEG_INFINITY;
        }

        let t: f64 = (point - x0) / (x1 - x0);
        return t.mul_add(y1 - y0, y0);
    }
}

/// Discrete [convolution](https://en.wikipedia.org/wiki/Convolution#Discrete_convolution)
/// of `a` and `b` computed trough the [FFT](https://en.wikipedia.org/wiki/Fast_Fourier_transform).
///
/// Only the central part of the full convolution is returned, with the same
/// length as `a` (the "same" mode): if the full convolution is `c` (of length
/// `a.len() + b.len() - 1`), the result is `c[s..s + a.len()]` with
/// `s = (b.len() - 1) / 2`.
///
/// Returns an empty vector if any of the inputs is empty.
#[must_use]
pub fn fft_convolve_same(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let full_len: usize = a.len() + b.len() - 1;
    let fft_len: usize = full_len.next_power_of_two();

    let mut planner: FftPlanner<f64> = FftPlanner::new();
    let forward = planner.plan_fft_forward(fft_len);
    let inverse = planner.plan_fft_inverse(fft_len);

    let zero_padded = |values: &[f64]| {
        let mut buffer: Vec<Complex<f64>> = vec![Complex::new(0.0, 0.0); fft_len];
        for (slot, &v) in buffer.iter_mut().zip(values.iter()) {
            slot.re = v;
        }
        buffer
    };

    let mut spectrum_a: Vec<Complex<f64>> = zero_padded(a);
    let mut spectrum_b: Vec<Complex<f64>> = zero_padded(b);
    forward.process(&mut spectrum_a);
    forward.process(&mut spectrum_b);

    for (p, q) in spectrum_a.iter_mut().zip(spectrum_b.iter()) {
        *p *= *q;
    }
    inverse.process(&mut spectrum_a);

    // rustfft does not normalize
    let norm: f64 = 1.0 / (fft_len as f64);
    let start: usize = (b.len() - 1) / 2;

    return spectrum_a[start..start + a.len()]
        .iter()
        .map(|c: &Complex<f64>| c.re * norm)
        .collect::<Vec<f64>>();
}
