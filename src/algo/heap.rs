//! Binary heaps over random access ranges.
//!
//! `comp(a, b)` is a strict weak ordering read as "a before b"; the element
//! at `first` is one that no other element is ordered after. With `<` that
//! is a max-heap, and `sort_heap` sorts ascending. With `>` it is a min-heap
//! and `sort_heap` sorts descending.
//!
//! ```
//! use tola_traits::algo::{make_heap_by, sort_heap_by};
//! use tola_traits::iter::PtrMut;
//!
//! let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
//! let (first, last) = PtrMut::range(&mut data);
//! make_heap_by(first, last, |a, b| a > b);
//! sort_heap_by(first, last, |a, b| a > b);
//! assert_eq!(data, [9, 6, 5, 4, 3, 2, 1, 1]);
//! ```
//!
//! Heaps need random access. A forward iterator does not compile:
//!
//! ```compile_fail
//! use tola_traits::algo::make_heap;
//! use tola_traits::iter::{PtrMut, archetypes::Forward};
//!
//! let mut data = [3, 1, 2];
//! let (first, last) = PtrMut::range(&mut data);
//! make_heap(Forward::new(first), Forward::new(last));
//! ```

use core::borrow::Borrow;

use crate::debug::{self, CheckFailure};
use crate::iter::{RandomAccessIter, SwapIter};

/// Iterators the heap functions accept.
pub trait HeapIter: RandomAccessIter + SwapIter {}

impl<I: RandomAccessIter + SwapIter> HeapIter for I {}

struct Heap<I, C> {
    first: I,
    comp: C,
}

impl<I: HeapIter, C: FnMut(&I::Value, &I::Value) -> bool> Heap<I, C> {
    fn at(&self, i: isize) -> I {
        let mut it = self.first.clone();
        it.jump(i);
        it
    }

    fn before(&mut self, i: isize, j: isize) -> bool {
        let a = self.first.at(i);
        let b = self.first.at(j);
        (self.comp)(a.borrow(), b.borrow())
    }

    fn swap(&self, i: isize, j: isize) {
        self.at(i).swap_with(&self.at(j));
    }

    fn sift_down(&mut self, mut root: isize, len: isize) {
        loop {
            let mut child = 2 * root + 1;
            if child >= len {
                return;
            }
            if child + 1 < len && self.before(child, child + 1) {
                child += 1;
            }
            if !self.before(root, child) {
                return;
            }
            self.swap(root, child);
            root = child;
        }
    }

    fn sift_up(&mut self, mut child: isize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.before(parent, child) {
                return;
            }
            self.swap(parent, child);
            child = parent;
        }
    }

    fn first_violation(&mut self, len: isize) -> isize {
        (1..len).find(|&i| self.before((i - 1) / 2, i)).unwrap_or(len)
    }
}

#[track_caller]
fn span<I: RandomAccessIter>(first: &I, last: &I) -> isize {
    let len = last.diff(first);
    debug::check(len >= 0, || CheckFailure::InvertedRange);
    len.max(0)
}

pub fn make_heap_by<I, C>(first: I, last: I, comp: C)
where
    I: HeapIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    let len = span(&first, &last);
    let mut heap = Heap { first, comp };
    for root in (0..len / 2).rev() {
        heap.sift_down(root, len);
    }
}

/// Extend the heap `[first, last - 1)` to include `last - 1`.
pub fn push_heap_by<I, C>(first: I, last: I, comp: C)
where
    I: HeapIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    let len = span(&first, &last);
    if len > 1 {
        Heap { first, comp }.sift_up(len - 1);
    }
}

/// Move the top to `last - 1` and restore the heap on `[first, last - 1)`.
pub fn pop_heap_by<I, C>(first: I, last: I, comp: C)
where
    I: HeapIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    let len = span(&first, &last);
    if len > 1 {
        let mut heap = Heap { first, comp };
        heap.swap(0, len - 1);
        heap.sift_down(0, len - 1);
    }
}

/// Sort a heap in place. With debug checks on, the heap property is
/// verified first.
#[track_caller]
pub fn sort_heap_by<I, C>(first: I, last: I, comp: C)
where
    I: HeapIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    let len = span(&first, &last);
    let mut heap = Heap { first, comp };
    if debug::enabled() && heap.first_violation(len) != len {
        debug::fail(CheckFailure::NotAHeap);
    }
    for end in (1..len).rev() {
        heap.swap(0, end);
        heap.sift_down(0, end);
    }
}

/// First position at which `[first, last)` stops being a heap.
pub fn is_heap_until_by<I, C>(first: I, last: I, comp: C) -> I
where
    I: HeapIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    let len = span(&first, &last);
    let mut heap = Heap { first, comp };
    let end = heap.first_violation(len);
    heap.at(end)
}

pub fn is_heap_by<I, C>(first: I, last: I, comp: C) -> bool
where
    I: HeapIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    let len = span(&first, &last);
    Heap { first, comp }.first_violation(len) == len
}

macro_rules! by_less {
    ($($(#[$meta:meta])* $name:ident => $by:ident $(-> $ret:ty)?;)*) => {
        $(
            $(#[$meta])*
            #[track_caller]
            pub fn $name<I>(first: I, last: I) $(-> $ret)?
            where
                I: HeapIter,
                I::Value: PartialOrd,
            {
                $by(first, last, |a, b| a < b)
            }
        )*
    };
}

by_less! {
    /// Max-heap under `<`.
    make_heap => make_heap_by;
    push_heap => push_heap_by;
    pop_heap => pop_heap_by;
    sort_heap => sort_heap_by;
    is_heap_until => is_heap_until_by -> I;
    is_heap => is_heap_by -> bool;
}
