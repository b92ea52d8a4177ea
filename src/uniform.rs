//! Uniform primitives over a raw bit-stream.
//!
//! Every other sampler in the crate is built from these functions. They
//! are generic over any [`rand::Rng`], so they can also be used without a
//! [`RandomEngine`](crate::RandomEngine).
//!
//! Argument checks run before the first draw, so an `Err` never consumes
//! randomness.

use rand::Rng;

use crate::error::{Result, SampleError};

/// Returns a real number uniformly distributed in `[0, 1)`.
///
/// One 64-bit draw, 53 bits of precision.
///
/// # Examples
/// ```
/// use seedsample::{create_rng, uniform};
/// let mut rng = create_rng(42);
/// let x = uniform::unit(&mut rng);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[inline]
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Returns an integer uniformly distributed in `[0, n)`.
///
/// # Errors
/// `InvalidArgument` if `n <= 0`.
pub fn below_i32<R: Rng + ?Sized>(rng: &mut R, n: i32) -> Result<i32> {
    if n <= 0 {
        return Err(SampleError::invalid(format!(
            "argument must be positive: {n}"
        )));
    }
    Ok(int_below(rng, n))
}

/// Returns a 64-bit integer uniformly distributed in `[0, n)`.
///
/// # Algorithm
/// Draws 64 raw bits `r`. When `n` is a power of two the low bits of `r`
/// are already uniform, so `r & (n − 1)` is returned after a single draw.
/// Otherwise the top 63 bits `u = r >>> 1` are reduced modulo `n`,
/// rejecting any `u` that falls in the final incomplete block of size
/// `2⁶³ mod n`. A `u` is in that block exactly when `u + (n − 1) − (u mod n)`
/// wraps past `i64::MAX`, which is tested with wrapping arithmetic.
///
/// Expected draws per call are below 2 for every `n`.
///
/// # Errors
/// `InvalidArgument` if `n <= 0`.
pub fn below_i64<R: Rng + ?Sized>(rng: &mut R, n: i64) -> Result<i64> {
    if n <= 0 {
        return Err(SampleError::invalid(format!(
            "argument must be positive: {n}"
        )));
    }

    let r = rng.next_u64();
    let m = n - 1;

    if n & m == 0 {
        return Ok((r as i64) & m);
    }

    let mut u = (r >> 1) as i64;
    loop {
        let candidate = u % n;
        if u.wrapping_add(m).wrapping_sub(candidate) >= 0 {
            return Ok(candidate);
        }
        tracing::trace!(n, "uniform_long rejected a draw in the biased tail");
        u = (rng.next_u64() >> 1) as i64;
    }
}

/// Returns an integer uniformly distributed in `[a, b)`.
///
/// # Errors
/// `InvalidArgument` if `b <= a` or `b − a` does not fit in an `i32`.
pub fn range_i32<R: Rng + ?Sized>(rng: &mut R, a: i32, b: i32) -> Result<i32> {
    if b <= a || i64::from(b) - i64::from(a) > i64::from(i32::MAX) {
        return Err(SampleError::invalid(format!("invalid range: [{a}, {b})")));
    }
    Ok(a + below_i32(rng, b - a)?)
}

/// Returns a 64-bit integer uniformly distributed in `[a, b)`.
///
/// # Errors
/// `InvalidArgument` if `b <= a` or `b − a` overflows an `i64`.
pub fn range_i64<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64) -> Result<i64> {
    let span = match b.checked_sub(a) {
        Some(span) if b > a => span,
        _ => return Err(SampleError::invalid(format!("invalid range: [{a}, {b})"))),
    };
    Ok(a + below_i64(rng, span)?)
}

/// Returns a real number uniformly distributed in `[a, b)`.
///
/// `unit · (b − a) + a` can round up to exactly `b` when the range is only
/// a few ulps wide; such draws are discarded and redrawn.
///
/// # Errors
/// `InvalidArgument` unless `a < b` and `a`, `b` and `b − a` are all finite.
pub fn range_f64<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> Result<f64> {
    if !(a < b) || !(b - a).is_finite() {
        return Err(SampleError::invalid(format!("invalid range: [{a}, {b})")));
    }
    loop {
        let x = unit_in(rng, a, b);
        if x < b {
            return Ok(x);
        }
        tracing::trace!(a, b, "uniform_double_range rounded up to the excluded bound");
    }
}

/// Unchecked `[a, b)` draw for callers whose bounds are constants.
#[inline]
pub(crate) fn unit_in<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    unit(rng) * (b - a) + a
}

/// Unchecked `[0, n)` draw behind [`below_i32`]; `n` must be positive.
#[inline]
pub(crate) fn int_below<R: Rng + ?Sized>(rng: &mut R, n: i32) -> i32 {
    debug_assert!(n > 0);
    rng.random_range(0..n)
}

/// Unchecked index draw in `[0, n)`; `n` must be non-zero.
#[inline]
pub(crate) fn index_below<R: Rng + ?Sized>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0);
    rng.random_range(0..n)
}

// ============================================================================
// Tests
// ============================================================================
