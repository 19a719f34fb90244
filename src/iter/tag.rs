//! Capability tags and classification.
//!
//! ```text
//! Contiguous ⊃ RandomAccess ⊃ Bidirectional ⊃ Forward ⊃ Input
//! Output (orthogonal, write-only)
//! ```
//!
//! Every iterator names exactly one native tag through [`Classified`]. The
//! tag must be backed by the matching structural trait: `Category<I>` is
//! only implemented for tags `I` actually satisfies.

use derive_more::Display;

use super::traits::{BidirectionalIter, ContiguousIter, ForwardIter, Incrementable, InputIter, RandomAccessIter};
use crate::debug::{self, CheckFailure};
use crate::primitives::{Bool, False, True};

/// One of the six capability levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Capability {
    Output,
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
    Contiguous,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Output,
        Capability::Input,
        Capability::Forward,
        Capability::Bidirectional,
        Capability::RandomAccess,
        Capability::Contiguous,
    ];

    pub const fn is_readable(self) -> bool {
        !matches!(self, Capability::Output)
    }

    const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether an iterator with this native capability may be used where
    /// `required` is expected.
    pub const fn satisfies(self, required: Capability) -> bool {
        match (self.is_readable(), required.is_readable()) {
            (true, true) => self.rank() >= required.rank(),
            (false, false) => true,
            _ => false,
        }
    }

    /// Strictly more capable than `other`.
    pub const fn refines(self, other: Capability) -> bool {
        self.rank() != other.rank() && self.satisfies(other)
    }
}

/// A capability tag.
pub trait Tag: 'static {
    const CAPABILITY: Capability;
    /// Selects the bulk copy path at the type level.
    type Contiguous: Bool;
}

macro_rules! tags {
    ($($name:ident => $cap:ident [$c:ty];)*) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl Tag for $name {
                const CAPABILITY: Capability = Capability::$cap;
                type Contiguous = $c;
            }
        )*
    };
}

tags! {
    OutputTag => Output [False];
    InputTag => Input [False];
    ForwardTag => Forward [False];
    BidirectionalTag => Bidirectional [False];
    RandomAccessTag => RandomAccess [False];
    ContiguousTag => Contiguous [True];
}

/// Tag-dispatched movement for iterators of type `I`.
#[diagnostic::on_unimplemented(
    message = "`{I}` does not satisfy the operations of `{Self}`",
    note = "an iterator may only claim a tag its structural traits back up"
)]
pub trait Category<I>: Tag {
    fn advance(it: &mut I, n: isize);
}

/// Tag-dispatched distance, for readable categories.
pub trait Measure<I>: Category<I> {
    fn distance(first: I, last: &I) -> isize;
}

/// The native capability of an iterator type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no iterator category",
    note = "implement `Classified` with the most specific tag the type supports"
)]
pub trait Classified: Sized {
    type Category: Category<Self>;
}

/// Whether an output iterator writes into one memory block.
pub trait Destination {
    type Contiguous: Bool;
}

fn step_forward<I: Incrementable>(it: &mut I, n: isize) {
    if n < 0 {
        debug::fail(CheckFailure::NegativeAdvance);
    }
    for _ in 0..n {
        it.inc();
    }
}

fn count_steps<I: InputIter>(mut first: I, last: &I) -> isize {
    let mut n = 0;
    while first != *last {
        first.inc();
        n += 1;
    }
    n
}

impl<I: Incrementable> Category<I> for OutputTag {
    fn advance(it: &mut I, n: isize) {
        step_forward(it, n);
    }
}

impl<I: InputIter> Category<I> for InputTag {
    fn advance(it: &mut I, n: isize) {
        step_forward(it, n);
    }
}

impl<I: InputIter> Measure<I> for InputTag {
    fn distance(first: I, last: &I) -> isize {
        count_steps(first, last)
    }
}

impl<I: ForwardIter> Category<I> for ForwardTag {
    fn advance(it: &mut I, n: isize) {
        step_forward(it, n);
    }
}

impl<I: ForwardIter> Measure<I> for ForwardTag {
    fn distance(first: I, last: &I) -> isize {
        count_steps(first, last)
    }
}

impl<I: BidirectionalIter> Category<I> for BidirectionalTag {
    fn advance(it: &mut I, n: isize) {
        if n >= 0 {
            step_forward(it, n);
        } else {
            for _ in n..0 {
                it.dec();
            }
        }
    }
}

impl<I: BidirectionalIter> Measure<I> for BidirectionalTag {
    fn distance(first: I, last: &I) -> isize {
        count_steps(first, last)
    }
}

impl<I: RandomAccessIter> Category<I> for RandomAccessTag {
    fn advance(it: &mut I, n: isize) {
        it.jump(n);
    }
}

impl<I: RandomAccessIter> Measure<I> for RandomAccessTag {
    fn distance(first: I, last: &I) -> isize {
        last.diff(&first)
    }
}

impl<I: ContiguousIter> Category<I> for ContiguousTag {
    fn advance(it: &mut I, n: isize) {
        it.jump(n);
    }
}

impl<I: ContiguousIter> Measure<I> for ContiguousTag {
    fn distance(first: I, last: &I) -> isize {
        last.diff(&first)
    }
}

/// Native capability of `I`.
pub const fn classify<I: Classified>() -> Capability {
    <I::Category as Tag>::CAPABILITY
}

/// Whether `I` may be used where `required` is expected.
pub const fn satisfies<I: Classified>(required: Capability) -> bool {
    classify::<I>().satisfies(required)
}

/// Structural check on a concrete type, independent of its native tag.
///
/// ```
/// use tola_traits::iter::{Ptr, RandomAccessIter, OutputIter};
/// use tola_traits::satisfies;
///
/// assert!(satisfies!(Ptr<'static, i32>: RandomAccessIter));
/// assert!(!satisfies!(Ptr<'static, i32>: OutputIter<i32>));
/// ```
#[macro_export]
macro_rules! satisfies {
    ($T:ty : $Trait:path) => {{
        struct __Probe<T>(::core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}
