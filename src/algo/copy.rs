//! `copy` with a compile-time fast path.
//!
//! The path is a type-level [`Bool`](crate::primitives::Bool) computed from the iterators and the
//! element type, then dispatched through [`CopyPath`]:
//!
//! ```text
//! source tag is Contiguous
//!   && destination is contiguous
//!   && is_trivially_copy_constructible<Value>
//!     True  => one memmove
//!     False => element by element
//! ```

use core::borrow::Borrow;
use core::ptr;

use tracing::trace;

use crate::debug::{self, CheckFailure};
use crate::iter::{Classified, ContiguousIter, ContiguousOutput, Destination, InputIter, OutputIter, Tag};
use crate::primitives::{And, False, True};
use crate::traits::{Holds, IsTriviallyCopyConstructible};

/// One implementation of `copy`, selected by a type-level bool.
pub trait CopyPath<I, O> {
    const BULK: bool;

    fn run(first: I, last: I, out: O) -> O;
}

impl<I, O> CopyPath<I, O> for True
where
    I: ContiguousIter,
    I::Value: Copy,
    O: ContiguousOutput<I::Value>,
{
    const BULK: bool = true;

    #[track_caller]
    fn run(first: I, last: I, mut out: O) -> O {
        let n = last.diff(&first);
        if n < 0 {
            debug::fail(CheckFailure::InvertedRange);
        }
        let n = n as usize;
        // Checked in every build: a `last` past the end or from another
        // block still yields a distance.
        let available = first.remaining();
        if n > available {
            debug::fail(CheckFailure::SourceOverrun { needed: n, available });
        }
        let room = out.room();
        if n > room {
            debug::fail(CheckFailure::OutputOverflow { needed: n, room });
        }
        // SAFETY: `first` has `n` readable elements, `out` has room for `n`,
        // and `ptr::copy` tolerates overlap.
        unsafe { ptr::copy(first.as_ptr(), out.as_mut_ptr(), n) };
        out.skip(n);
        out
    }
}

impl<I, O> CopyPath<I, O> for False
where
    I: InputIter,
    I::Value: Clone,
    O: OutputIter<I::Value>,
{
    const BULK: bool = false;

    fn run(mut first: I, last: I, mut out: O) -> O {
        while first != last {
            out.put(first.get().borrow().clone());
            out.inc();
            first.inc();
        }
        out
    }
}

/// The path `copy` takes from `I` into `O`.
pub type CopySelect<I, O> = And<
    And<<<I as Classified>::Category as Tag>::Contiguous, <O as Destination>::Contiguous>,
    <<I as InputIter>::Value as Holds<IsTriviallyCopyConstructible>>::Out,
>;

/// Copy `[first, last)` into `out`, returning `out` past the last write.
#[track_caller]
pub fn copy<I, O>(first: I, last: I, out: O) -> O
where
    I: Classified + InputIter,
    I::Value: Holds<IsTriviallyCopyConstructible>,
    O: Destination,
    CopySelect<I, O>: CopyPath<I, O>,
{
    trace!(bulk = <CopySelect<I, O> as CopyPath<I, O>>::BULK, "copy");
    <CopySelect<I, O> as CopyPath<I, O>>::run(first, last, out)
}

/// Whether `copy` from `I` into `O` is a single memmove.
pub const fn is_bulk_copy<I, O>() -> bool
where
    I: Classified + InputIter,
    I::Value: Holds<IsTriviallyCopyConstructible>,
    O: Destination,
    CopySelect<I, O>: CopyPath<I, O>,
{
    <CopySelect<I, O> as CopyPath<I, O>>::BULK
}
