//! Minimal iterators for each capability level.
//!
//! An archetype wraps a stronger iterator and exposes exactly the operations
//! of one level, so algorithms can be exercised against the weakest iterator
//! they claim to accept. [`Counting`] keeps the wrapped iterator's category
//! and records how it was moved.

use core::cell::Cell;
use core::cmp::Ordering;

use super::tag::{
    BidirectionalTag, Category, Classified, ContiguousTag, Destination, ForwardTag, InputTag,
    OutputTag, RandomAccessTag,
};
use super::traits::{
    BidirectionalIter, ContiguousIter, ContiguousOutput, ForwardIter, Incrementable, InputIter,
    OutputIter, RandomAccessIter, SwapIter,
};
use crate::primitives::False;

macro_rules! archetype {
    ($(#[$meta:meta])* $name:ident: $bound:ident => $tag:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<I>(I);

        impl<I: $bound> $name<I> {
            pub const fn new(inner: I) -> Self {
                Self(inner)
            }

            pub fn into_inner(self) -> I {
                self.0
            }
        }

        impl<I: Incrementable> Incrementable for $name<I> {
            fn inc(&mut self) {
                self.0.inc();
            }
        }

        impl<I: $bound> Classified for $name<I> {
            type Category = $tag;
        }
    };
}

macro_rules! readable {
    ($($name:ident),*) => {
        $(
            impl<I: PartialEq> PartialEq for $name<I> {
                fn eq(&self, other: &Self) -> bool {
                    self.0 == other.0
                }
            }

            impl<I: InputIter> InputIter for $name<I> {
                type Value = I::Value;
                type Item = I::Item;

                fn get(&self) -> I::Item {
                    self.0.get()
                }
            }
        )*
    };
}

macro_rules! multipass {
    ($($name:ident),*) => {
        $(
            impl<I: Clone> Clone for $name<I> {
                fn clone(&self) -> Self {
                    Self(self.0.clone())
                }
            }

            impl<I: Eq> Eq for $name<I> {}

            impl<I: ForwardIter> ForwardIter for $name<I> {}

            impl<I: SwapIter> SwapIter for $name<I> {
                fn swap_with(&self, other: &Self) {
                    self.0.swap_with(&other.0);
                }
            }
        )*
    };
}

macro_rules! backwards {
    ($($name:ident),*) => {
        $(
            impl<I: BidirectionalIter> BidirectionalIter for $name<I> {
                fn dec(&mut self) {
                    self.0.dec();
                }
            }
        )*
    };
}

macro_rules! random_access {
    ($($name:ident),*) => {
        $(
            impl<I: PartialOrd> PartialOrd for $name<I> {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.0.partial_cmp(&other.0)
                }
            }

            impl<I: RandomAccessIter> RandomAccessIter for $name<I> {
                fn jump(&mut self, n: isize) {
                    self.0.jump(n);
                }

                fn diff(&self, origin: &Self) -> isize {
                    self.0.diff(&origin.0)
                }
            }
        )*
    };
}

archetype!(
    /// Single-pass reading only.
    Input: InputIter => InputTag
);
archetype!(
    /// Multi-pass reading.
    Forward: ForwardIter => ForwardTag
);
archetype!(Bidirectional: BidirectionalIter => BidirectionalTag);
archetype!(RandomAccess: RandomAccessIter => RandomAccessTag);
archetype!(
    /// Everything, including the block address.
    Contiguous: ContiguousIter => ContiguousTag
);
archetype!(
    /// Write-only. Never contiguous, whatever it wraps.
    Output: Incrementable => OutputTag
);

readable!(Input, Forward, Bidirectional, RandomAccess, Contiguous);
multipass!(Forward, Bidirectional, RandomAccess, Contiguous);
backwards!(Bidirectional, RandomAccess, Contiguous);
random_access!(RandomAccess, Contiguous);

// SAFETY: forwards to the wrapped contiguous iterator.
unsafe impl<I: ContiguousIter> ContiguousIter for Contiguous<I> {
    fn as_ptr(&self) -> *const I::Value {
        self.0.as_ptr()
    }

    fn remaining(&self) -> usize {
        self.0.remaining()
    }
}

impl<T, I: OutputIter<T>> OutputIter<T> for Output<I> {
    fn put(&mut self, value: T) {
        self.0.put(value);
    }
}

impl<I> Destination for Output<I> {
    type Contiguous = False;
}

// =============================================================================
// Counting
// =============================================================================

/// Movement counters shared by a family of [`Counting`] iterators.
#[derive(Debug, Default)]
pub struct Stats {
    increments: Cell<usize>,
    decrements: Cell<usize>,
    jumps: Cell<usize>,
    writes: Cell<usize>,
}

impl Stats {
    pub const fn new() -> Self {
        Self {
            increments: Cell::new(0),
            decrements: Cell::new(0),
            jumps: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    pub fn increments(&self) -> usize {
        self.increments.get()
    }

    pub fn decrements(&self) -> usize {
        self.decrements.get()
    }

    /// Offset moves, including bulk skips over written output.
    pub fn jumps(&self) -> usize {
        self.jumps.get()
    }

    /// Single-element writes through `put`.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn reset(&self) {
        self.increments.set(0);
        self.decrements.set(0);
        self.jumps.set(0);
        self.writes.set(0);
    }

    fn bump(counter: &Cell<usize>) {
        counter.set(counter.get() + 1);
    }
}

/// Any iterator, with its movements recorded in a [`Stats`].
#[derive(Debug)]
pub struct Counting<'s, I> {
    inner: I,
    stats: &'s Stats,
}

impl<'s, I> Counting<'s, I> {
    pub const fn new(inner: I, stats: &'s Stats) -> Self {
        Self { inner, stats }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Clone> Clone for Counting<'_, I> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), stats: self.stats }
    }
}

impl<I: PartialEq> PartialEq for Counting<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<I: Eq> Eq for Counting<'_, I> {}

impl<I: PartialOrd> PartialOrd for Counting<'_, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<I: Incrementable> Incrementable for Counting<'_, I> {
    fn inc(&mut self) {
        Stats::bump(&self.stats.increments);
        self.inner.inc();
    }
}

impl<I: InputIter> InputIter for Counting<'_, I> {
    type Value = I::Value;
    type Item = I::Item;

    fn get(&self) -> I::Item {
        self.inner.get()
    }
}

impl<I: ForwardIter> ForwardIter for Counting<'_, I> {}

impl<I: BidirectionalIter> BidirectionalIter for Counting<'_, I> {
    fn dec(&mut self) {
        Stats::bump(&self.stats.decrements);
        self.inner.dec();
    }
}

impl<I: RandomAccessIter> RandomAccessIter for Counting<'_, I> {
    fn jump(&mut self, n: isize) {
        Stats::bump(&self.stats.jumps);
        self.inner.jump(n);
    }

    fn diff(&self, origin: &Self) -> isize {
        self.inner.diff(&origin.inner)
    }
}

// SAFETY: forwards to the wrapped contiguous iterator.
unsafe impl<I: ContiguousIter> ContiguousIter for Counting<'_, I> {
    fn as_ptr(&self) -> *const I::Value {
        self.inner.as_ptr()
    }

    fn remaining(&self) -> usize {
        self.inner.remaining()
    }
}

impl<I: SwapIter> SwapIter for Counting<'_, I> {
    fn swap_with(&self, other: &Self) {
        self.inner.swap_with(&other.inner);
    }
}

impl<T, I: OutputIter<T>> OutputIter<T> for Counting<'_, I> {
    fn put(&mut self, value: T) {
        Stats::bump(&self.stats.writes);
        self.inner.put(value);
    }
}

// SAFETY: forwards to the wrapped contiguous output.
unsafe impl<T, I: ContiguousOutput<T>> ContiguousOutput<T> for Counting<'_, I> {
    fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.as_mut_ptr()
    }

    fn room(&self) -> usize {
        self.inner.room()
    }

    fn skip(&mut self, n: usize) {
        Stats::bump(&self.stats.jumps);
        self.inner.skip(n);
    }
}

impl<I> Classified for Counting<'_, I>
where
    I: Classified,
    I::Category: Category<Self>,
{
    type Category = I::Category;
}

impl<I: Destination> Destination for Counting<'_, I> {
    type Contiguous = I::Contiguous;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::tag::{Capability, classify};
    use crate::iter::ptr::Ptr;

    #[test]
    fn test_archetypes_report_their_level() {
        type P = Ptr<'static, i32>;
        assert_eq!(classify::<Input<P>>(), Capability::Input);
        assert_eq!(classify::<Forward<P>>(), Capability::Forward);
        assert_eq!(classify::<Bidirectional<P>>(), Capability::Bidirectional);
        assert_eq!(classify::<RandomAccess<P>>(), Capability::RandomAccess);
        assert_eq!(classify::<Contiguous<P>>(), Capability::Contiguous);
        assert_eq!(classify::<Output<P>>(), Capability::Output);
    }

    #[test]
    fn test_counting_keeps_category_and_counts() {
        let data = [1, 2, 3, 4];
        let stats = Stats::new();
        let mut it = Counting::new(Ptr::begin(&data), &stats);
        it.inc();
        it.jump(2);
        it.dec();
        assert_eq!(*it.get(), 3);
        assert_eq!((stats.increments(), stats.jumps(), stats.decrements()), (1, 1, 1));
        assert_eq!(classify::<Counting<'static, Ptr<'static, i32>>>(), Capability::Contiguous);
        stats.reset();
        assert_eq!(stats.increments(), 0);
    }
}
