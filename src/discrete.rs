//! Weighted discrete sampling.
//!
//! Two weight forms are supported:
//!
//! - **Probabilities**: strictly positive reals summing to 1 within
//!   [`PROBABILITY_SUM_TOLERANCE`].
//! - **Frequencies**: non-negative integer counts with a positive sum
//!   below `i32::MAX`.
//!
//! Both draw a uniform `r` and return the first index whose cumulative
//! weight strictly exceeds `r`. The one-shot functions scan linearly; the
//! precomputed [`DiscreteSampler`] and [`FrequencySampler`] store the
//! prefix sums once and binary-search them, returning the same index for
//! the same draw.

use rand::distr::Distribution;
use rand::Rng;

use crate::error::{Result, SampleError};
use crate::sequence::Sequence;
use crate::uniform;

/// Absolute tolerance on the sum of a probability vector.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-14;

fn present<S: Sequence + ?Sized>(weights: &S) -> Result<&[S::Item]> {
    weights
        .as_slice_opt()
        .ok_or_else(|| SampleError::null("argument array is absent"))
}

fn validate_probabilities(probabilities: &[f64]) -> Result<()> {
    let mut sum = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        if !(p > 0.0) {
            return Err(SampleError::invalid(format!(
                "array entry {i} must be positive: {p}"
            )));
        }
        sum += p;
    }
    if sum > 1.0 + PROBABILITY_SUM_TOLERANCE || sum < 1.0 - PROBABILITY_SUM_TOLERANCE {
        return Err(SampleError::invalid(format!(
            "sum of array entries does not approximately equal 1.0: {sum}"
        )));
    }
    Ok(())
}

/// Returns the positive frequency total.
fn validate_frequencies(frequencies: &[i32]) -> Result<i32> {
    let mut sum: i64 = 0;
    for (i, &f) in frequencies.iter().enumerate() {
        if f < 0 {
            return Err(SampleError::invalid(format!(
                "array entry {i} must be non-negative: {f}"
            )));
        }
        sum += i64::from(f);
    }
    if sum == 0 {
        return Err(SampleError::invalid("at least one array entry must be positive"));
    }
    if sum >= i64::from(i32::MAX) {
        return Err(SampleError::invalid(format!(
            "sum of frequencies overflows an i32: {sum}"
        )));
    }
    Ok(sum as i32)
}

/// Samples index `i` with probability `probabilities[i]`.
///
/// When `r` is within rounding error of 1 and the running sum falls just
/// short of it, no index qualifies; the draw is then repeated with a
/// fresh `r`. This happens with probability at most about 1e-14 per draw.
///
/// # Errors
/// - `NullArgument` if the vector is absent.
/// - `InvalidArgument` if any entry is not strictly positive or the sum
///   is not within 1e-14 of 1.
///
/// # Examples
/// ```
/// use seedsample::{create_rng, discrete};
/// let mut rng = create_rng(42);
/// let i = discrete::sample_probabilities(&mut rng, &[0.5, 0.3, 0.2]).unwrap();
/// assert!(i < 3);
/// ```
pub fn sample_probabilities<R, S>(rng: &mut R, probabilities: &S) -> Result<usize>
where
    R: Rng + ?Sized,
    S: Sequence<Item = f64> + ?Sized,
{
    let probabilities = present(probabilities)?;
    validate_probabilities(probabilities)?;

    loop {
        let r = uniform::unit(rng);
        let mut sum = 0.0;
        for (i, &p) in probabilities.iter().enumerate() {
            sum += p;
            if sum > r {
                return Ok(i);
            }
        }
        tracing::trace!(r, sum, "cumulative probability fell short of draw; retrying");
    }
}

/// Samples index `i` with probability proportional to `frequencies[i]`.
///
/// Entries with frequency zero are never returned.
///
/// # Errors
/// - `NullArgument` if the vector is absent.
/// - `InvalidArgument` if any entry is negative, all entries are zero, or
///   the sum reaches `i32::MAX`.
pub fn sample_frequencies<R, S>(rng: &mut R, frequencies: &S) -> Result<usize>
where
    R: Rng + ?Sized,
    S: Sequence<Item = i32> + ?Sized,
{
    let frequencies = present(frequencies)?;
    let total = validate_frequencies(frequencies)?;

    let r = i64::from(uniform::int_below(rng, total));
    let mut sum: i64 = 0;
    for (i, &f) in frequencies.iter().enumerate() {
        sum += i64::from(f);
        if sum > r {
            return Ok(i);
        }
    }
    unreachable!("r < total, so the cumulative sum must exceed it")
}

// ============================================================================
// Precomputed samplers
// ============================================================================

/// Pre-validated probability vector for repeated O(log n) sampling.
///
/// # Examples
/// ```
/// use seedsample::{create_rng, DiscreteSampler};
/// let sampler = DiscreteSampler::new(&[0.1, 0.2, 0.7]).unwrap();
/// let mut rng = create_rng(42);
/// assert!(sampler.sample(&mut rng) < 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSampler {
    cumulative: Vec<f64>,
}

impl DiscreteSampler {
    /// # Errors
    /// Same conditions as [`sample_probabilities`].
    pub fn new<S: Sequence<Item = f64> + ?Sized>(probabilities: &S) -> Result<Self> {
        let probabilities = present(probabilities)?;
        validate_probabilities(probabilities)?;
        let cumulative = probabilities
            .iter()
            .scan(0.0, |sum, &p| {
                *sum += p;
                Some(*sum)
            })
            .collect();
        Ok(Self { cumulative })
    }

    /// Samples an index; consumes the same draws as [`sample_probabilities`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        loop {
            let r = uniform::unit(rng);
            let i = self.cumulative.partition_point(|&c| c <= r);
            if i < self.cumulative.len() {
                return i;
            }
            tracing::trace!(r, "cumulative probability fell short of draw; retrying");
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Probability of index `i`, or `None` if out of bounds.
    pub fn probability(&self, i: usize) -> Option<f64> {
        let upper = *self.cumulative.get(i)?;
        let lower = if i == 0 { 0.0 } else { self.cumulative[i - 1] };
        Some(upper - lower)
    }
}

/// Pre-validated frequency vector for repeated O(log n) sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySampler {
    cumulative: Vec<i64>,
    total: i32,
}

impl FrequencySampler {
    /// # Errors
    /// Same conditions as [`sample_frequencies`].
    pub fn new<S: Sequence<Item = i32> + ?Sized>(frequencies: &S) -> Result<Self> {
        let frequencies = present(frequencies)?;
        let total = validate_frequencies(frequencies)?;
        let cumulative = frequencies
            .iter()
            .scan(0_i64, |sum, &f| {
                *sum += i64::from(f);
                Some(*sum)
            })
            .collect();
        Ok(Self { cumulative, total })
    }

    /// Samples an index; consumes the same draws as [`sample_frequencies`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r = i64::from(uniform::int_below(rng, self.total));
        self.cumulative.partition_point(|&c| c <= r)
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> i32 {
        self.total
    }
}

impl Distribution<usize> for DiscreteSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        DiscreteSampler::sample(self, rng)
    }
}

impl Distribution<usize> for FrequencySampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        FrequencySampler::sample(self, rng)
    }
}

// ============================================================================
// Tests
// ============================================================================
