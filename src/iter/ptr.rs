//! Contiguous iterators over slices.
//!
//! [`Ptr`] reads a `&[T]`. [`PtrMut`] reads and writes a `&mut [T]` through
//! a slice of cells, so that several positions into the same range can be
//! held at once.

use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use super::tag::{Classified, ContiguousTag, Destination};
use super::traits::{
    BidirectionalIter, ContiguousIter, ContiguousOutput, ForwardIter, Incrementable, InputIter,
    OutputIter, RandomAccessIter, SwapIter,
};
use crate::debug::{self, CheckFailure};
use crate::primitives::True;

/// Position `pos + n` within a range of `len` elements.
///
/// Moving before the start always fails. Moving past the end fails when debug
/// checks are enabled.
#[track_caller]
fn moved(pos: usize, n: isize, len: usize) -> usize {
    let Some(target) = (pos as isize).checked_add(n) else {
        let position = if n < 0 { isize::MIN } else { isize::MAX };
        debug::fail(CheckFailure::Position { position, len });
    };
    if target < 0 {
        debug::fail(CheckFailure::Position { position: target, len });
    }
    debug::check(target as usize <= len, || CheckFailure::Position { position: target, len });
    target as usize
}

#[track_caller]
fn same_range<T>(a: *const [T], b: *const [T]) {
    debug::check(ptr::eq(a, b), || CheckFailure::ForeignIterator);
}

// =============================================================================
// Ptr
// =============================================================================

/// Read-only position in a slice.
pub struct Ptr<'a, T> {
    range: &'a [T],
    pos: usize,
}

impl<'a, T> Ptr<'a, T> {
    pub const fn begin(range: &'a [T]) -> Self {
        Self { range, pos: 0 }
    }

    pub const fn end(range: &'a [T]) -> Self {
        Self { range, pos: range.len() }
    }

    /// `[begin, end)` of `range`.
    pub const fn range(range: &'a [T]) -> (Self, Self) {
        (Self::begin(range), Self::end(range))
    }

    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for Ptr<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ptr<'_, T> {}

impl<T> fmt::Debug for Ptr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr({}/{})", self.pos, self.range.len())
    }
}

impl<T> PartialEq for Ptr<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_range(self.range, other.range);
        self.as_ptr() == other.as_ptr()
    }
}

impl<T> Eq for Ptr<'_, T> {}

impl<T> PartialOrd for Ptr<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        same_range(self.range, other.range);
        Some(self.pos.cmp(&other.pos))
    }
}

impl<T> Incrementable for Ptr<'_, T> {
    fn inc(&mut self) {
        self.pos = moved(self.pos, 1, self.range.len());
    }
}

impl<'a, T> InputIter for Ptr<'a, T> {
    type Value = T;
    type Item = &'a T;

    fn get(&self) -> &'a T {
        match self.range.get(self.pos) {
            Some(value) => value,
            None => debug::fail(CheckFailure::Dereference { position: self.pos, len: self.range.len() }),
        }
    }
}

impl<T> ForwardIter for Ptr<'_, T> {}

impl<T> BidirectionalIter for Ptr<'_, T> {
    fn dec(&mut self) {
        self.pos = moved(self.pos, -1, self.range.len());
    }
}

impl<T> RandomAccessIter for Ptr<'_, T> {
    fn jump(&mut self, n: isize) {
        self.pos = moved(self.pos, n, self.range.len());
    }

    fn diff(&self, origin: &Self) -> isize {
        same_range(self.range, origin.range);
        self.pos as isize - origin.pos as isize
    }
}

// SAFETY: `range` is one slice and `remaining` counts only the elements
// of it at or after `pos`.
unsafe impl<T> ContiguousIter for Ptr<'_, T> {
    fn as_ptr(&self) -> *const T {
        self.range.as_ptr().wrapping_add(self.pos)
    }

    fn remaining(&self) -> usize {
        self.range.len().saturating_sub(self.pos)
    }
}

impl<T> Classified for Ptr<'_, T> {
    type Category = ContiguousTag;
}

// =============================================================================
// PtrMut
// =============================================================================

/// Read-write position in a slice.
pub struct PtrMut<'a, T> {
    cells: &'a [Cell<T>],
    pos: usize,
}

impl<'a, T> PtrMut<'a, T> {
    pub const fn begin(cells: &'a [Cell<T>]) -> Self {
        Self { cells, pos: 0 }
    }

    pub const fn end(cells: &'a [Cell<T>]) -> Self {
        Self { cells, pos: cells.len() }
    }

    /// `[begin, end)` of a mutable slice.
    pub fn range(slice: &'a mut [T]) -> (Self, Self) {
        let cells = Cell::from_mut(slice).as_slice_of_cells();
        (Self::begin(cells), Self::end(cells))
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    #[track_caller]
    fn cell(&self) -> &'a Cell<T> {
        match self.cells.get(self.pos) {
            Some(cell) => cell,
            None => debug::fail(CheckFailure::Dereference { position: self.pos, len: self.cells.len() }),
        }
    }
}

impl<T> Clone for PtrMut<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PtrMut<'_, T> {}

impl<T> fmt::Debug for PtrMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PtrMut({}/{})", self.pos, self.cells.len())
    }
}

impl<T> PartialEq for PtrMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_range(self.cells, other.cells);
        self.pos == other.pos && ptr::eq(self.cells.as_ptr(), other.cells.as_ptr())
    }
}

impl<T> Eq for PtrMut<'_, T> {}

impl<T> PartialOrd for PtrMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        same_range(self.cells, other.cells);
        Some(self.pos.cmp(&other.pos))
    }
}

impl<T> Incrementable for PtrMut<'_, T> {
    fn inc(&mut self) {
        self.pos = moved(self.pos, 1, self.cells.len());
    }
}

impl<T: Copy> InputIter for PtrMut<'_, T> {
    type Value = T;
    type Item = T;

    fn get(&self) -> T {
        self.cell().get()
    }
}

impl<T: Copy> ForwardIter for PtrMut<'_, T> {}

impl<T: Copy> BidirectionalIter for PtrMut<'_, T> {
    fn dec(&mut self) {
        self.pos = moved(self.pos, -1, self.cells.len());
    }
}

impl<T: Copy> RandomAccessIter for PtrMut<'_, T> {
    fn jump(&mut self, n: isize) {
        self.pos = moved(self.pos, n, self.cells.len());
    }

    fn diff(&self, origin: &Self) -> isize {
        same_range(self.cells, origin.cells);
        self.pos as isize - origin.pos as isize
    }
}

// SAFETY: `Cell<T>` has the layout of `T` and the cells form one slice.
unsafe impl<T: Copy> ContiguousIter for PtrMut<'_, T> {
    fn as_ptr(&self) -> *const T {
        self.cells.as_ptr().wrapping_add(self.pos).cast::<T>()
    }

    fn remaining(&self) -> usize {
        self.cells.len().saturating_sub(self.pos)
    }
}

impl<T: Copy> SwapIter for PtrMut<'_, T> {
    fn swap_with(&self, other: &Self) {
        self.cell().swap(other.cell());
    }
}

impl<T> OutputIter<T> for PtrMut<'_, T> {
    fn put(&mut self, value: T) {
        self.cell().set(value);
    }
}

// SAFETY: writes go through `UnsafeCell`, and `room` never exceeds the cells
// left in the slice.
unsafe impl<T> ContiguousOutput<T> for PtrMut<'_, T> {
    fn as_mut_ptr(&mut self) -> *mut T {
        self.cells.as_ptr().wrapping_add(self.pos).cast::<T>().cast_mut()
    }

    fn room(&self) -> usize {
        self.cells.len().saturating_sub(self.pos)
    }

    fn skip(&mut self, n: usize) {
        self.pos = moved(self.pos, n as isize, self.cells.len());
    }
}

impl<T: Copy> Classified for PtrMut<'_, T> {
    type Category = ContiguousTag;
}

impl<T> Destination for PtrMut<'_, T> {
    type Contiguous = True;
}
