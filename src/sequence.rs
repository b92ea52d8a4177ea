//! Sequence abstractions accepted by shuffles and discrete samplers.
//!
//! Samplers take any contiguous, indexable container: slices, arrays,
//! `Vec`, and (for in-place operations) `VecDeque`. A `VecDeque` is only
//! [`SequenceMut`]: its elements may wrap around the ring buffer, and
//! joining them into one slice needs a mutable borrow. Wrapping a container
//! in `Option` models a sequence that may be absent; `None` makes the
//! operation fail with [`SampleError::NullArgument`](crate::SampleError::NullArgument)
//! instead of touching the generator.

use std::collections::VecDeque;

/// A read-only sequence that may be absent.
pub trait Sequence {
    type Item;

    /// Returns the elements, or `None` if the sequence is absent.
    fn as_slice_opt(&self) -> Option<&[Self::Item]>;
}

/// A mutable sequence that may be absent.
pub trait SequenceMut {
    type Item;

    /// Returns the elements mutably, or `None` if the sequence is absent.
    fn as_mut_slice_opt(&mut self) -> Option<&mut [Self::Item]>;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_slice_opt(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_slice_opt(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_slice_opt(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn as_slice_opt(&self) -> Option<&[S::Item]> {
        (**self).as_slice_opt()
    }
}

impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn as_slice_opt(&self) -> Option<&[S::Item]> {
        self.as_ref().and_then(Sequence::as_slice_opt)
    }
}

impl<T> SequenceMut for [T] {
    type Item = T;

    fn as_mut_slice_opt(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    type Item = T;

    fn as_mut_slice_opt(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T> SequenceMut for Vec<T> {
    type Item = T;

    fn as_mut_slice_opt(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    type Item = T;

    /// Rotates the ring buffer into one contiguous run first, which keeps
    /// logical element order.
    fn as_mut_slice_opt(&mut self) -> Option<&mut [T]> {
        Some(self.make_contiguous())
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for &mut S {
    type Item = S::Item;

    fn as_mut_slice_opt(&mut self) -> Option<&mut [S::Item]> {
        (**self).as_mut_slice_opt()
    }
}

impl<S: SequenceMut> SequenceMut for Option<S> {
    type Item = S::Item;

    fn as_mut_slice_opt(&mut self) -> Option<&mut [S::Item]> {
        self.as_mut().and_then(SequenceMut::as_mut_slice_opt)
    }
}
