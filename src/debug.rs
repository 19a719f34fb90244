//! Debug checks and the designated failure path.
//!
//! Containers and iterators validate their preconditions when
//! [`enabled`] returns true. A violated precondition ends in [`fail`], which
//! logs the failure and panics. Nothing else in the crate panics on bad
//! input.

use core::error::Error;

use derive_more::{Display, Error};
use tracing::error;

use crate::config::Config;

/// A panic-only failure.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

/// A violated container or iterator precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CheckFailure {
    #[display("index {index} out of range for length {len}")]
    Index { index: usize, len: usize },
    #[display("dereferenced iterator at {position} of a range of length {len}")]
    Dereference { position: usize, len: usize },
    #[display("iterator moved to {position}, outside a range of length {len}")]
    Position { position: isize, len: usize },
    #[display("compared iterators from different ranges")]
    ForeignIterator,
    #[display("negative advance of an iterator that cannot move backwards")]
    NegativeAdvance,
    #[display("output needs room for {needed} elements, has {room}")]
    OutputOverflow { needed: usize, room: usize },
    #[display("source holds {available} elements from its position, copy needs {needed}")]
    SourceOverrun { needed: usize, available: usize },
    #[display("range is not a heap")]
    NotAHeap,
    #[display("last precedes first")]
    InvertedRange,
}

impl Panic for CheckFailure {}

/// Whether debug checks are compiled in.
#[inline(always)]
pub const fn enabled() -> bool {
    Config::BUILD.debug_checks
}

/// The failure path: log, then panic.
#[cold]
#[track_caller]
pub fn fail(failure: CheckFailure) -> ! {
    error!(%failure, "debug check failed");
    failure.panic()
}

/// Fail with `failure()` if checks are enabled and `ok` is false.
#[inline]
#[track_caller]
pub fn check(ok: bool, failure: impl FnOnce() -> CheckFailure) {
    if enabled() && !ok {
        fail(failure())
    }
}
