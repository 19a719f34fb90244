//! The structural iterator hierarchy.
//!
//! Each trait adds the operations of one capability level. The traits are
//! checked by the compiler; the tags in [`super::tag`] only name them.

use core::borrow::Borrow;

/// Pre- and post-increment.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be incremented",
    label = "missing pre-increment",
    note = "implement `Incrementable::inc`"
)]
pub trait Incrementable: Sized {
    fn inc(&mut self);

    /// Increment, returning a copy of the prior state.
    fn post_inc(&mut self) -> Self
    where
        Self: Clone,
    {
        let prior = self.clone();
        self.inc();
        prior
    }
}

/// Single-pass reading.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an input iterator",
    label = "missing read-dereference, increment or equality",
    note = "input iterators need `InputIter::get`, `Incrementable::inc` and `PartialEq`"
)]
pub trait InputIter: Incrementable + PartialEq {
    type Value;
    /// What dereferencing yields: the value itself or a reference to it.
    type Item: Borrow<Self::Value>;

    fn get(&self) -> Self::Item;
}

/// Multi-pass reading: copies may be advanced independently.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a forward iterator",
    label = "not multi-pass",
    note = "forward iterators are input iterators that are also `Clone + Eq`"
)]
pub trait ForwardIter: InputIter + Clone + Eq {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bidirectional iterator",
    label = "missing decrement",
    note = "implement `BidirectionalIter::dec`"
)]
pub trait BidirectionalIter: ForwardIter {
    fn dec(&mut self);

    fn post_dec(&mut self) -> Self {
        let prior = self.clone();
        self.dec();
        prior
    }
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a random access iterator",
    label = "missing offset, subscript, ordering or difference",
    note = "random access iterators need `jump`, `diff` and `PartialOrd`"
)]
pub trait RandomAccessIter: BidirectionalIter + PartialOrd {
    /// `+= n`; negative `n` moves backwards.
    fn jump(&mut self, n: isize);

    /// Signed distance from `origin` to `self`.
    fn diff(&self, origin: &Self) -> isize;

    /// `-= n`
    fn back(&mut self, n: isize) {
        self.jump(-n);
    }

    /// `self[n]`
    fn at(&self, n: isize) -> Self::Item {
        let mut it = self.clone();
        it.jump(n);
        it.get()
    }
}

/// Elements live in one unbroken block of memory.
///
/// # Safety
///
/// `as_ptr` must point at the current element, and `remaining()` elements
/// from there must be initialized and readable through it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a contiguous iterator",
    label = "elements are not known to be contiguous",
    note = "implement `ContiguousIter::as_ptr` for iterators over one memory block"
)]
pub unsafe trait ContiguousIter: RandomAccessIter {
    fn as_ptr(&self) -> *const Self::Value;

    /// Readable elements from the current position to the end of the block.
    fn remaining(&self) -> usize;
}

/// Assign-through writing.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an output iterator for `{T}`",
    label = "missing write-dereference",
    note = "implement `OutputIter::put`"
)]
pub trait OutputIter<T>: Incrementable {
    /// `*it = value`. Does not advance.
    fn put(&mut self, value: T);
}

/// Output into one unbroken block of memory.
///
/// # Safety
///
/// `as_mut_ptr` must point at the current slot and `room` slots from there
/// must be writable through it. `skip(n)` must leave the iterator `n` slots
/// further on.
pub unsafe trait ContiguousOutput<T>: OutputIter<T> {
    fn as_mut_ptr(&mut self) -> *mut T;

    /// Writable slots from the current position.
    fn room(&self) -> usize;

    /// Move past `n` slots written through `as_mut_ptr`.
    fn skip(&mut self, n: usize);
}

/// Exchange the elements two iterators point at.
#[diagnostic::on_unimplemented(
    message = "elements of `{Self}` cannot be swapped in place",
    note = "implement `SwapIter::swap_with` for mutable iterators"
)]
pub trait SwapIter: ForwardIter {
    fn swap_with(&self, other: &Self);
}
