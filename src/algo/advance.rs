//! Tag-dispatched movement.
//!
//! `advance` and `distance` pick their strategy from the iterator's native
//! tag: constant time for random access, a step loop otherwise.

use crate::iter::{BidirectionalIter, Category, Classified, Measure};

/// Move `it` by `n`. Negative `n` requires a bidirectional iterator.
#[inline]
#[track_caller]
pub fn advance<I: Classified>(it: &mut I, n: isize) {
    <I::Category as Category<I>>::advance(it, n);
}

/// Number of increments from `first` to `last`.
#[inline]
pub fn distance<I>(first: I, last: &I) -> isize
where
    I: Classified,
    I::Category: Measure<I>,
{
    <I::Category as Measure<I>>::distance(first, last)
}

pub fn next<I: Classified>(mut it: I, n: isize) -> I {
    advance(&mut it, n);
    it
}

pub fn prev<I: Classified + BidirectionalIter>(mut it: I, n: isize) -> I {
    advance(&mut it, -n);
    it
}
