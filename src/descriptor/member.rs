//! Type-level special member kinds.
//!
//! Each kind mirrors a [`Member`] value and exposes its properties as
//! [`Bool`] types, so the portable backend can combine them without const
//! evaluation.

use super::info::Member;
use crate::primitives::{Bool, False, True};

/// A special member kind, lifted to the type level.
pub trait MemberKind: 'static {
    const KIND: Member;

    type Callable: Bool;
    type Nothrow: Bool;
    type Trivial: Bool;

    /// `Fallback` when this member is undeclared, `Self` otherwise.
    type Or<Fallback: MemberKind>: MemberKind;
}

macro_rules! member_kind {
    ($(#[$meta:meta])* $name:ident => callable: $c:ty, nothrow: $n:ty, trivial: $t:ty) => {
        $(#[$meta])*
        pub struct $name;

        impl MemberKind for $name {
            const KIND: Member = Member::$name;
            type Callable = $c;
            type Nothrow = $n;
            type Trivial = $t;
            type Or<Fallback: MemberKind> = $name;
        }
    };
}

member_kind!(
    /// Bitwise copy, no-op destruction.
    Trivial => callable: True, nothrow: True, trivial: True
);
member_kind!(
    /// User-provided and non-throwing.
    Nothrow => callable: True, nothrow: True, trivial: False
);
member_kind!(
    /// User-provided and potentially throwing.
    Throwing => callable: True, nothrow: False, trivial: False
);
member_kind!(
    /// Explicitly deleted.
    Deleted => callable: False, nothrow: False, trivial: False
);

/// Not declared. Only meaningful for the move constructor.
pub struct Undeclared;

impl MemberKind for Undeclared {
    const KIND: Member = Member::Undeclared;
    type Callable = False;
    type Nothrow = False;
    type Trivial = False;
    type Or<Fallback: MemberKind> = Fallback;
}
