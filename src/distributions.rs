//! Derived probability distributions.
//!
//! Each distribution is a small parameter type validated at construction.
//! Sampling goes through [`rand::distr::Distribution`], so every type here
//! works with any `rand` generator as well as with
//! [`RandomEngine`](crate::RandomEngine), whose convenience methods simply
//! build the type and draw once.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Method | Mean | Variance |
//! |---|---|---|---|---|
//! | [`Bernoulli`] | p | `U < p` | p | p(1−p) |
//! | [`Gaussian`] | μ, σ | polar Box–Muller | μ | σ² |
//! | [`Geometric`] | p | inversion | 1/p | (1−p)/p² |
//! | [`Poisson`] | λ | Knuth product | λ | λ |
//! | [`Pareto`] | α | inversion | 1/(α−1) | α/((α−1)²(α−2)) |
//! | [`Cauchy`] | — | inversion | undefined | undefined |
//! | [`Exponential`] | λ | inversion | 1/λ | 1/λ² |
//!
//! All methods draw from [`uniform::unit`], so a distribution consumes
//! only uniform reals from the underlying stream.

use rand::distr::Distribution;
use rand::Rng;

use crate::error::{Result, SampleError};
use crate::uniform;

fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SampleError::invalid(format!(
            "probability p must be between 0.0 and 1.0: {p}"
        )));
    }
    Ok(())
}

// ============================================================================
// Bernoulli Distribution
// ============================================================================

/// Bernoulli distribution: `true` with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a Bernoulli distribution with success probability `p`.
    ///
    /// # Errors
    /// `InvalidArgument` if `p` is outside `[0, 1]` or NaN.
    pub fn new(p: f64) -> Result<Self> {
        check_probability(p)?;
        Ok(Self { p })
    }

    /// A fair coin.
    pub fn fair() -> Self {
        Self { p: 0.5 }
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.p
    }

    pub fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }
}

impl Distribution<bool> for Bernoulli {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        uniform::unit(rng) < self.p
    }
}

// ============================================================================
// Gaussian Distribution
// ============================================================================

/// Gaussian (normal) distribution N(μ, σ²).
///
/// # Algorithm
/// Polar form of the Box–Muller transform (Marsaglia 1964): draw `x, y`
/// uniform in `[−1, 1)` until `r = x² + y²` lies in `(0, 1)`, then
/// `x·√(−2 ln r / r)` is a standard normal variate. The acceptance rate
/// is π/4, so the loop runs 1.27 times on average. The companion variate
/// `y·√(−2 ln r / r)` is discarded so that every sample costs the same
/// stream position regardless of call history.
///
/// No parameter validation is performed: a negative `σ` mirrors the
/// distribution, and non-finite parameters propagate into the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mu: f64,
    sigma: f64,
}

impl Gaussian {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// N(0, 1).
    pub fn standard() -> Self {
        Self { mu: 0.0, sigma: 1.0 }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution<f64> for Gaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z = loop {
            let x = uniform::unit_in(rng, -1.0, 1.0);
            let y = uniform::unit_in(rng, -1.0, 1.0);
            let r = x * x + y * y;
            if r < 1.0 && r != 0.0 {
                break x * (-2.0 * r.ln() / r).sqrt();
            }
        };
        self.mu + self.sigma * z
    }
}

// ============================================================================
// Geometric Distribution
// ============================================================================

/// Geometric distribution: number of Bernoulli(p) trials up to and
/// including the first success, support `{1, 2, …}`.
///
/// # Algorithm
/// Inversion: `⌈ln U / ln(1 − p)⌉`.
///
/// # Edge cases
/// The float-to-integer conversion saturates. With `p = 0` the quotient
/// is −∞ and the sample is `i64::MIN`; with `p = 1` the quotient is
/// `0` (or NaN when `U = 0`) and the sample is `0`. Values of `p` very
/// close to 0 produce very large samples. These results are returned
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// # Errors
    /// `InvalidArgument` if `p` is outside `[0, 1]` or NaN.
    pub fn new(p: f64) -> Result<Self> {
        check_probability(p)?;
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        1.0 / self.p
    }

    pub fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl Distribution<i64> for Geometric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        (uniform::unit(rng).ln() / (1.0 - self.p).ln()).ceil() as i64
    }
}

// ============================================================================
// Poisson Distribution
// ============================================================================

/// Poisson distribution with mean λ.
///
/// # Algorithm
/// Knuth, *TAOCP* Vol. 2, §3.4.1: multiply uniforms into a running
/// product until it drops below `e^{−λ}`; the number of factors minus one
/// is the sample. Cost is O(λ) draws per sample.
///
/// # Termination
/// Once `e^{−λ}` underflows to zero (λ ≳ 745) the product can never drop
/// below it and the loop does not finish. Use a different method for
/// large means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
    exp_neg_lambda: f64,
}

impl Poisson {
    /// # Errors
    /// `InvalidArgument` if `lambda` is not positive, is NaN, or is infinite.
    pub fn new(lambda: f64) -> Result<Self> {
        if !(lambda > 0.0) {
            return Err(SampleError::invalid(format!(
                "lambda must be positive: {lambda}"
            )));
        }
        if lambda.is_infinite() {
            return Err(SampleError::invalid(format!(
                "lambda must not be infinite: {lambda}"
            )));
        }
        Ok(Self {
            lambda,
            exp_neg_lambda: (-lambda).exp(),
        })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }

    pub fn variance(&self) -> f64 {
        self.lambda
    }
}

impl Distribution<i64> for Poisson {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let mut k: i64 = 0;
        let mut product = 1.0;
        loop {
            k += 1;
            product *= uniform::unit(rng);
            if product < self.exp_neg_lambda {
                return k - 1;
            }
        }
    }
}

// ============================================================================
// Pareto Distribution
// ============================================================================

/// Pareto distribution shifted to start at zero (Lomax, unit scale) with
/// shape α.
///
/// # Mathematical Definition
/// - CDF: F(x) = 1 − (1 + x)^(−α), x ≥ 0
/// - Sample: `(1 − U)^(−1/α) − 1`
/// - Mean: 1/(α−1) for α > 1, otherwise +∞
/// - Variance: α/((α−1)²(α−2)) for α > 2, otherwise +∞
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    alpha: f64,
}

impl Pareto {
    /// # Errors
    /// `InvalidArgument` if `alpha` is not positive or is NaN.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0) {
            return Err(SampleError::invalid(format!(
                "alpha must be positive: {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn mean(&self) -> f64 {
        if self.alpha > 1.0 {
            1.0 / (self.alpha - 1.0)
        } else {
            f64::INFINITY
        }
    }

    pub fn variance(&self) -> f64 {
        if self.alpha > 2.0 {
            let a = self.alpha;
            a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
        } else {
            f64::INFINITY
        }
    }
}

impl Default for Pareto {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl Distribution<f64> for Pareto {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (1.0 - uniform::unit(rng)).powf(-1.0 / self.alpha) - 1.0
    }
}

// ============================================================================
// Cauchy Distribution
// ============================================================================

/// Standard Cauchy distribution (location 0, scale 1).
///
/// Mean and variance do not exist; the median is 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cauchy;

impl Cauchy {
    pub fn median(&self) -> f64 {
        0.0
    }
}

impl Distribution<f64> for Cauchy {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (std::f64::consts::PI * (uniform::unit(rng) - 0.5)).tan()
    }
}

// ============================================================================
// Exponential Distribution
// ============================================================================

/// Exponential distribution with rate λ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// # Errors
    /// `InvalidArgument` if `lambda` is not positive or is NaN.
    pub fn new(lambda: f64) -> Result<Self> {
        if !(lambda > 0.0) {
            return Err(SampleError::invalid(format!(
                "rate lambda must be positive: {lambda}"
            )));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn mean(&self) -> f64 {
        1.0 / self.lambda
    }

    pub fn variance(&self) -> f64 {
        1.0 / (self.lambda * self.lambda)
    }
}

impl Distribution<f64> for Exponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        -(1.0 - uniform::unit(rng)).ln() / self.lambda
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::create_rng;
    use crate::error::ErrorKind;

    fn sample_mean<D: Distribution<f64>>(d: &D, seed: u64, n: usize) -> f64 {
        let mut rng = create_rng(seed);
        (0..n).map(|_| d.sample(&mut rng)).sum::<f64>() / n as f64
    }

    // --- Bernoulli ---

    #[test]
    fn test_bernoulli_invalid() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = Bernoulli::new(p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = create_rng(1);
        let never = Bernoulli::new(0.0).unwrap();
        let always = Bernoulli::new(1.0).unwrap();
        for _ in 0..1000 {
            assert!(!never.sample(&mut rng));
            assert!(always.sample(&mut rng));
        }
    }

    #[test]
    fn test_bernoulli_frequency() {
        let d = Bernoulli::new(0.3).unwrap();
        let mut rng = create_rng(42);
        let n = 20_000;
        let hits = (0..n).filter(|_| d.sample(&mut rng)).count();
        let freq = hits as f64 / n as f64;
        assert!((freq - 0.3).abs() < 0.02, "freq = {freq}");
    }

    #[test]
    fn test_bernoulli_moments() {
        let d = Bernoulli::new(0.25).unwrap();
        assert!((d.mean() - 0.25).abs() < 1e-15);
        assert!((d.variance() - 0.1875).abs() < 1e-15);
        assert_eq!(Bernoulli::fair().p(), 0.5);
    }

    // --- Gaussian ---

    #[test]
    fn test_gaussian_standard_moments() {
        let d = Gaussian::standard();
        let mut rng = create_rng(7);
        let n = 50_000;
        let xs: Vec<f64> = (0..n).map(|_| d.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert!(mean.abs() < 0.02, "mean = {mean}");
        assert!((var - 1.0).abs() < 0.03, "var = {var}");
    }

    #[test]
    fn test_gaussian_shift_and_scale() {
        let m = sample_mean(&Gaussian::new(10.0, 2.0), 11, 20_000);
        assert!((m - 10.0).abs() < 0.06, "mean = {m}");
    }

    #[test]
    fn test_gaussian_zero_sigma_is_constant() {
        let d = Gaussian::new(3.5, 0.0);
        let mut rng = create_rng(1);
        for _ in 0..100 {
            assert_eq!(d.sample(&mut rng), 3.5);
        }
    }

    // --- Geometric ---

    #[test]
    fn test_geometric_invalid() {
        assert!(Geometric::new(-0.01).is_err());
        assert!(Geometric::new(1.01).is_err());
        assert!(Geometric::new(f64::NAN).is_err());
    }

    #[test]
    fn test_geometric_support_and_mean() {
        let d = Geometric::new(0.25).unwrap();
        let mut rng = create_rng(3);
        let n = 20_000;
        let mut total = 0_i64;
        for _ in 0..n {
            let k = d.sample(&mut rng);
            assert!(k >= 1, "k = {k}");
            total += k;
        }
        let mean = total as f64 / n as f64;
        assert!((mean - d.mean()).abs() < 0.1, "mean = {mean}");
    }

    #[test]
    fn test_geometric_p_one_is_degenerate() {
        let d = Geometric::new(1.0).unwrap();
        let mut rng = create_rng(3);
        for _ in 0..100 {
            assert_eq!(d.sample(&mut rng), 0);
        }
    }

    #[test]
    fn test_geometric_p_zero_saturates() {
        let d = Geometric::new(0.0).unwrap();
        let mut rng = create_rng(3);
        assert_eq!(d.sample(&mut rng), i64::MIN);
    }

    // --- Poisson ---

    #[test]
    fn test_poisson_invalid() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Poisson::new(lambda).unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }
    }

    #[test]
    fn test_poisson_mean() {
        let d = Poisson::new(4.0).unwrap();
        let mut rng = create_rng(5);
        let n = 20_000;
        let total: i64 = (0..n).map(|_| d.sample(&mut rng)).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 4.0).abs() < 0.1, "mean = {mean}");
    }

    #[test]
    fn test_poisson_non_negative() {
        let d = Poisson::new(0.5).unwrap();
        let mut rng = create_rng(5);
        for _ in 0..1000 {
            assert!(d.sample(&mut rng) >= 0);
        }
    }

    // --- Pareto ---

    #[test]
    fn test_pareto_invalid() {
        assert!(Pareto::new(0.0).is_err());
        assert!(Pareto::new(-2.0).is_err());
        assert!(Pareto::new(f64::NAN).is_err());
    }

    #[test]
    fn test_pareto_moments() {
        assert_eq!(Pareto::default().mean(), f64::INFINITY);
        let d = Pareto::new(3.0).unwrap();
        assert!((d.mean() - 0.5).abs() < 1e-15);
        assert!((d.variance() - 0.75).abs() < 1e-15);
        assert_eq!(Pareto::new(1.5).unwrap().variance(), f64::INFINITY);
    }

    #[test]
    fn test_pareto_sample_mean() {
        let d = Pareto::new(5.0).unwrap();
        let m = sample_mean(&d, 13, 50_000);
        assert!((m - d.mean()).abs() < 0.02, "mean = {m}");
    }

    // --- Cauchy ---

    #[test]
    fn test_cauchy_median() {
        let mut rng = create_rng(17);
        let mut xs: Vec<f64> = (0..20_001).map(|_| Cauchy.sample(&mut rng)).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = xs[xs.len() / 2];
        assert!(median.abs() < 0.05, "median = {median}");
        assert_eq!(Cauchy.median(), 0.0);
    }

    // --- Exponential ---

    #[test]
    fn test_exponential_invalid() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::NAN).is_err());
    }

    #[test]
    fn test_exponential_mean() {
        let d = Exponential::new(2.0).unwrap();
        let m = sample_mean(&d, 19, 50_000);
        assert!((m - 0.5).abs() < 0.01, "mean = {m}");
        assert!((d.variance() - 0.25).abs() < 1e-15);
    }
}
