//! The seeded sampling engine.
//!
//! [`RandomEngine`] owns one bit-stream generator and exposes every
//! sampler in the crate as a method taking `&mut self`, so each call that
//! advances the stream is visible at the call site.
//!
//! # Reproducibility
//!
//! Two engines built with the same seed, or one engine reseeded with the
//! same value, produce identical output for identical call sequences.
//! The default generator (SmallRng) is deterministic for a given seed on
//! the same platform and `rand` version.
//!
//! # Concurrency
//!
//! An engine is a plain value. To use one stream from several threads,
//! wrap it in a `Mutex`; to sample in parallel, give each worker its own
//! engine with its own seed. See also [`thread_engine`](crate::thread_engine).

use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::discrete;
use crate::distributions::{
    Bernoulli, Cauchy, Exponential, Gaussian, Geometric, Pareto, Poisson,
};
use crate::error::Result;
use crate::sequence::{Sequence, SequenceMut};
use crate::shuffle;
use crate::uniform;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use seedsample::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Seeded pseudorandom sampling engine.
///
/// # Examples
/// ```
/// use seedsample::RandomEngine;
///
/// let mut engine = RandomEngine::with_seed(2024);
/// let die = engine.uniform_int_range(1, 7).unwrap();
/// assert!((1..7).contains(&die));
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// engine.shuffle(&mut deck).unwrap();
///
/// let z = engine.gaussian_with(100.0, 15.0);
/// assert!(z.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct RandomEngine<R = SmallRng> {
    rng: R,
    seed: u64,
}

impl RandomEngine<SmallRng> {
    /// Creates an engine seeded from the system clock.
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Creates an engine with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::seeded(seed)
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::seeded(config.resolve_seed())
    }
}

impl Default for RandomEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + SeedableRng> RandomEngine<R> {
    /// Creates an engine over any seedable generator.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use seedsample::RandomEngine;
    ///
    /// let mut engine = RandomEngine::<StdRng>::seeded(5);
    /// assert_eq!(engine.seed(), 5);
    /// assert!(engine.uniform_int(10).unwrap() < 10);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, "creating random engine");
        Self {
            rng: R::seed_from_u64(seed),
            seed,
        }
    }

    /// Discards the current stream and restarts it from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        tracing::debug!(old_seed = self.seed, seed, "reseeding random engine");
        self.rng = R::seed_from_u64(seed);
        self.seed = seed;
    }
}

impl<R: Rng> RandomEngine<R> {
    /// The seed the current stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one value from any [`Distribution`], including the types in
    /// [`distributions`](crate::distributions) and the precomputed
    /// discrete samplers.
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: &D) -> T {
        distribution.sample(&mut self.rng)
    }

    /// Direct access to the underlying generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ------------------------------------------------------------------
    // Uniform primitives
    // ------------------------------------------------------------------

    /// Real number uniformly in `[0, 1)`.
    pub fn uniform_double(&mut self) -> f64 {
        uniform::unit(&mut self.rng)
    }

    /// Integer uniformly in `[0, n)`; `InvalidArgument` if `n <= 0`.
    pub fn uniform_int(&mut self, n: i32) -> Result<i32> {
        uniform::below_i32(&mut self.rng, n)
    }

    /// 64-bit integer uniformly in `[0, n)`; `InvalidArgument` if `n <= 0`.
    ///
    /// See [`uniform::below_i64`] for the rejection scheme.
    pub fn uniform_long(&mut self, n: i64) -> Result<i64> {
        uniform::below_i64(&mut self.rng, n)
    }

    /// Integer uniformly in `[a, b)`.
    pub fn uniform_int_range(&mut self, a: i32, b: i32) -> Result<i32> {
        uniform::range_i32(&mut self.rng, a, b)
    }

    /// 64-bit integer uniformly in `[a, b)`.
    pub fn uniform_long_range(&mut self, a: i64, b: i64) -> Result<i64> {
        uniform::range_i64(&mut self.rng, a, b)
    }

    /// Real number uniformly in `[a, b)`.
    pub fn uniform_double_range(&mut self, a: f64, b: f64) -> Result<f64> {
        uniform::range_f64(&mut self.rng, a, b)
    }

    // ------------------------------------------------------------------
    // Derived distributions
    // ------------------------------------------------------------------

    /// `true` with probability `p`; `InvalidArgument` unless `0 <= p <= 1`.
    pub fn bernoulli(&mut self, p: f64) -> Result<bool> {
        let d = Bernoulli::new(p)?;
        Ok(self.sample(&d))
    }

    /// `true` with probability 1/2.
    pub fn bernoulli_fair(&mut self) -> bool {
        self.sample(&Bernoulli::fair())
    }

    /// Standard normal variate.
    pub fn gaussian(&mut self) -> f64 {
        self.sample(&Gaussian::standard())
    }

    /// Normal variate with mean `mu` and standard deviation `sigma`.
    pub fn gaussian_with(&mut self, mu: f64, sigma: f64) -> f64 {
        self.sample(&Gaussian::new(mu, sigma))
    }

    /// Geometric variate (trials until first success).
    ///
    /// `p` equal to 0 or 1 yields a saturated value; see [`Geometric`].
    pub fn geometric(&mut self, p: f64) -> Result<i64> {
        let d = Geometric::new(p)?;
        Ok(self.sample(&d))
    }

    /// Poisson variate with mean `lambda`; see [`Poisson`] for limits.
    pub fn poisson(&mut self, lambda: f64) -> Result<i64> {
        let d = Poisson::new(lambda)?;
        Ok(self.sample(&d))
    }

    /// Pareto variate with shape 1.
    pub fn pareto(&mut self) -> f64 {
        self.sample(&Pareto::default())
    }

    /// Pareto variate with shape `alpha`; `InvalidArgument` if `alpha <= 0`.
    pub fn pareto_with(&mut self, alpha: f64) -> Result<f64> {
        let d = Pareto::new(alpha)?;
        Ok(self.sample(&d))
    }

    /// Standard Cauchy variate.
    pub fn cauchy(&mut self) -> f64 {
        self.sample(&Cauchy)
    }

    /// Exponential variate with rate `lambda`; `InvalidArgument` if `lambda <= 0`.
    pub fn exponential(&mut self, lambda: f64) -> Result<f64> {
        let d = Exponential::new(lambda)?;
        Ok(self.sample(&d))
    }

    // ------------------------------------------------------------------
    // Discrete sampling
    // ------------------------------------------------------------------

    /// Index `i` with probability `probabilities[i]`.
    ///
    /// See [`discrete::sample_probabilities`].
    pub fn discrete<S>(&mut self, probabilities: &S) -> Result<usize>
    where
        S: Sequence<Item = f64> + ?Sized,
    {
        discrete::sample_probabilities(&mut self.rng, probabilities)
    }

    /// Index `i` with probability proportional to `frequencies[i]`.
    ///
    /// See [`discrete::sample_frequencies`].
    pub fn discrete_frequencies<S>(&mut self, frequencies: &S) -> Result<usize>
    where
        S: Sequence<Item = i32> + ?Sized,
    {
        discrete::sample_frequencies(&mut self.rng, frequencies)
    }

    // ------------------------------------------------------------------
    // Shuffle and permutation
    // ------------------------------------------------------------------

    /// Shuffles `sequence` in place; `NullArgument` if it is absent.
    pub fn shuffle<S: SequenceMut + ?Sized>(&mut self, sequence: &mut S) -> Result<()> {
        shuffle::shuffle(&mut self.rng, sequence)
    }

    /// Shuffles `sequence[lo..hi]` in place.
    pub fn shuffle_range<S: SequenceMut + ?Sized>(
        &mut self,
        sequence: &mut S,
        lo: usize,
        hi: usize,
    ) -> Result<()> {
        shuffle::shuffle_range(&mut self.rng, sequence, lo, hi)
    }

    /// Uniformly random permutation of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        shuffle::permutation(&mut self.rng, n)
    }

    /// `k` distinct values from `0..n` in random order; `OutOfRange` if `k > n`.
    pub fn permutation_of(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        shuffle::permutation_of(&mut self.rng, n, k)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::StdRng;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_seed_getter() {
        let mut engine = RandomEngine::with_seed(17);
        assert_eq!(engine.seed(), 17);
        engine.reseed(99);
        assert_eq!(engine.seed(), 99);
    }

    #[test]
    fn test_reseed_replays_stream() {
        let mut engine = RandomEngine::with_seed(3);
        let first: Vec<i32> = (0..20).map(|_| engine.uniform_int(1000).unwrap()).collect();
        engine.reseed(3);
        let second: Vec<i32> = (0..20).map(|_| engine.uniform_int(1000).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_matches_raw_generator() {
        let mut engine = RandomEngine::with_seed(10);
        let mut rng = create_rng(10);
        for _ in 0..50 {
            assert_eq!(engine.uniform_double(), uniform::unit(&mut rng));
        }
    }

    #[test]
    fn test_generic_generator() {
        let mut a = RandomEngine::<StdRng>::seeded(8);
        let mut b = RandomEngine::<StdRng>::seeded(8);
        assert_eq!(a.gaussian(), b.gaussian());
        assert_eq!(a.permutation(6), b.permutation(6));
    }

    #[test]
    fn test_errors_by_kind() {
        let mut engine = RandomEngine::with_seed(1);
        assert_eq!(engine.uniform_int(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine.uniform_long(-4).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine.bernoulli(1.5).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine.geometric(-0.5).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine.poisson(0.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine.pareto_with(0.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(engine.exponential(-1.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            engine.discrete(&[0.4, 0.4, 0.4]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            engine.shuffle(&mut None::<Vec<u8>>).unwrap_err().kind(),
            ErrorKind::NullArgument
        );
        assert_eq!(engine.permutation_of(5, 7).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_failed_calls_do_not_advance_stream() {
        let mut touched = RandomEngine::with_seed(21);
        let mut clean = RandomEngine::with_seed(21);

        let _ = touched.uniform_int(-1);
        let _ = touched.uniform_double_range(1.0, 0.0);
        let _ = touched.bernoulli(2.0);
        let _ = touched.poisson(f64::INFINITY);
        let _ = touched.discrete(&[0.9]);
        let _ = touched.discrete_frequencies(&[0, 0]);
        let _ = touched.shuffle_range(&mut vec![1, 2, 3], 1, 9);
        let _ = touched.permutation_of(2, 3);

        for _ in 0..10 {
            assert_eq!(touched.uniform_long(1 << 40).unwrap(), clean.uniform_long(1 << 40).unwrap());
        }
    }

    #[test]
    fn test_bernoulli_fair_balanced() {
        let mut engine = RandomEngine::with_seed(12);
        let n = 20_000;
        let heads = (0..n).filter(|_| engine.bernoulli_fair()).count();
        let freq = heads as f64 / n as f64;
        assert!((freq - 0.5).abs() < 0.02, "freq = {freq}");
    }

    #[test]
    fn test_sample_with_precomputed_sampler() {
        let sampler = discrete::DiscreteSampler::new(&[0.2, 0.8]).unwrap();
        let mut engine = RandomEngine::with_seed(4);
        for _ in 0..100 {
            assert!(engine.sample(&sampler) < 2);
        }
    }

    #[test]
    fn test_default_engine_samples() {
        let mut engine = RandomEngine::default();
        assert!((0.0..1.0).contains(&engine.uniform_double()));
        assert!(engine.pareto() >= 0.0);
    }
}
