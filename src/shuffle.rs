//! Uniform shuffles and random permutations.
//!
//! Every function here draws only uniform indices, one per position
//! visited.

use std::collections::HashMap;

use rand::Rng;

use crate::error::{Result, SampleError};
use crate::sequence::SequenceMut;
use crate::uniform;

/// Fisher–Yates shuffle of a whole sequence, in place.
///
/// Produces a uniformly random permutation: each of the n! orderings is
/// equally likely.
///
/// # Algorithm
/// Forward pass: for each `i` in `0..n`, swap position `i` with a position
/// chosen uniformly from `[i, n)`. The prefix `[0, i]` is final after step
/// `i`.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Errors
/// `NullArgument` if the sequence is absent.
///
/// # Examples
/// ```
/// use seedsample::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle::shuffle(&mut rng, &mut v).unwrap();
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<R, S>(rng: &mut R, sequence: &mut S) -> Result<()>
where
    R: Rng + ?Sized,
    S: SequenceMut + ?Sized,
{
    let slice = sequence
        .as_mut_slice_opt()
        .ok_or_else(|| SampleError::null("sequence to shuffle is absent"))?;
    shuffle_slice(rng, slice);
    Ok(())
}

/// Fisher–Yates shuffle of the half-open subrange `[lo, hi)`, in place.
///
/// Elements outside the subrange are untouched.
///
/// # Errors
/// - `NullArgument` if the sequence is absent.
/// - `OutOfRange` if `lo > hi` or `hi` exceeds the sequence length.
pub fn shuffle_range<R, S>(rng: &mut R, sequence: &mut S, lo: usize, hi: usize) -> Result<()>
where
    R: Rng + ?Sized,
    S: SequenceMut + ?Sized,
{
    let slice = sequence
        .as_mut_slice_opt()
        .ok_or_else(|| SampleError::null("sequence to shuffle is absent"))?;
    if lo > hi || hi > slice.len() {
        return Err(SampleError::out_of_range(format!(
            "subarray indices out of bounds: [{lo}, {hi}) for length {}",
            slice.len()
        )));
    }
    shuffle_slice(rng, &mut slice[lo..hi]);
    Ok(())
}

fn shuffle_slice<R: Rng + ?Sized, T>(rng: &mut R, slice: &mut [T]) {
    let n = slice.len();
    for i in 0..n {
        let r = i + uniform::index_below(rng, n - i);
        slice.swap(i, r);
    }
}

/// Returns a uniformly random permutation of `0..n`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use seedsample::{create_rng, shuffle};
/// let mut rng = create_rng(42);
/// let mut p = shuffle::permutation(&mut rng, 5);
/// p.sort();
/// assert_eq!(p, vec![0, 1, 2, 3, 4]);
/// ```
pub fn permutation<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle_slice(rng, &mut indices);
    indices
}

/// Returns `k` distinct values drawn uniformly from `0..n`, in random
/// order.
///
/// # Algorithm
/// The first `k` steps of a forward Fisher–Yates pass over the virtual
/// identity array `0..n`. Only displaced positions are stored, in a
/// sparse map, so the full array is never built.
///
/// # Complexity
/// Time: O(k), Space: O(k), independent of `n`.
///
/// # Errors
/// `OutOfRange` if `k > n`.
pub fn permutation_of<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Result<Vec<usize>> {
    if k > n {
        return Err(SampleError::out_of_range(format!(
            "k must be between 0 and n: k = {k}, n = {n}"
        )));
    }

    let mut displaced: HashMap<usize, usize> = HashMap::with_capacity(k);
    let mut sample = Vec::with_capacity(k);
    for i in 0..k {
        let j = i + uniform::index_below(rng, n - i);
        let at_i = displaced.remove(&i).unwrap_or(i);
        let at_j = if j == i {
            at_i
        } else {
            displaced.insert(j, at_i).unwrap_or(j)
        };
        sample.push(at_j);
    }
    Ok(sample)
}

// ============================================================================
// Tests
// ============================================================================
