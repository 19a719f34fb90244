//! Appending output iterator.

use alloc::vec::Vec;

use super::tag::{Classified, Destination, OutputTag};
use super::traits::{Incrementable, OutputIter};
use crate::primitives::False;

/// Appends every value written to the end of a vector.
#[derive(Debug)]
pub struct BackInserter<'v, T> {
    target: &'v mut Vec<T>,
}

impl<'v, T> BackInserter<'v, T> {
    pub fn new(target: &'v mut Vec<T>) -> Self {
        Self { target }
    }
}

/// Shorthand for [`BackInserter::new`].
pub fn back_inserter<T>(target: &mut Vec<T>) -> BackInserter<'_, T> {
    BackInserter::new(target)
}

impl<T> Incrementable for BackInserter<'_, T> {
    #[inline]
    fn inc(&mut self) {}
}

impl<T> OutputIter<T> for BackInserter<'_, T> {
    fn put(&mut self, value: T) {
        self.target.push(value);
    }
}

impl<T> Classified for BackInserter<'_, T> {
    type Category = OutputTag;
}

impl<T> Destination for BackInserter<'_, T> {
    type Contiguous = False;
}
