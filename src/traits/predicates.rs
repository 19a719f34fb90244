//! Predicate markers and the predicate table.
//!
//! One zero-sized marker per predicate, plus the runtime [`Predicate`] enum
//! naming the same set. Both are generated from a single list so the two can
//! never drift apart.

use core::marker::PhantomData;

use super::backend::{Decide, DefaultBackend};
use super::portable::Holds;
use crate::descriptor::{Describe, Interned, TypeInfo};
use crate::primitives::Bool;

/// Ties a marker type to its [`Predicate`].
pub trait Marker: 'static {
    const PREDICATE: Predicate;
    /// Argument descriptor for binary predicates.
    const ARG: Option<&'static TypeInfo>;
}

macro_rules! predicates {
    (
        unary { $($(#[$umeta:meta])* $unary:ident),* $(,)? }
        binary { $($(#[$bmeta:meta])* $binary:ident),* $(,)? }
    ) => {
        paste::paste! {
            $(
                $(#[$umeta])*
                pub struct $unary;

                impl Marker for $unary {
                    const PREDICATE: Predicate = Predicate::$unary;
                    const ARG: Option<&'static TypeInfo> = None;
                }

                /// Answered by [`DefaultBackend`].
                pub const fn [<$unary:snake>]<T>() -> bool
                where
                    DefaultBackend: Decide<$unary, T>,
                {
                    <DefaultBackend as Decide<$unary, T>>::VALUE
                }
            )*

            $(
                $(#[$bmeta])*
                pub struct $binary<A>(PhantomData<fn() -> A>);

                impl<A: Describe> Marker for $binary<A> {
                    const PREDICATE: Predicate = Predicate::$binary;
                    const ARG: Option<&'static TypeInfo> = Some(Interned::<A>::INFO);
                }

                /// Answered by [`DefaultBackend`].
                pub const fn [<$binary:snake>]<T, A>() -> bool
                where
                    DefaultBackend: Decide<$binary<A>, T>,
                {
                    <DefaultBackend as Decide<$binary<A>, T>>::VALUE
                }
            )*

            /// Every predicate the query surface understands.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub enum Predicate {
                $($unary,)*
                $($binary,)*
            }

            impl Predicate {
                pub const UNARY: &'static [Predicate] = &[$(Predicate::$unary),*];
                pub const BINARY: &'static [Predicate] = &[$(Predicate::$binary),*];
                pub const ALL: &'static [Predicate] = &[$(Predicate::$unary,)* $(Predicate::$binary,)*];

                pub const fn name(self) -> &'static str {
                    match self {
                        $(Predicate::$unary => stringify!([<$unary:snake>]),)*
                        $(Predicate::$binary => stringify!([<$binary:snake>]),)*
                    }
                }

                /// Number of type descriptors the predicate takes.
                pub const fn arity(self) -> usize {
                    match self {
                        $(Predicate::$unary => 1,)*
                        $(Predicate::$binary => 2,)*
                    }
                }

                /// Portable answers for every unary predicate, in [`Predicate::UNARY`] order.
                pub fn portable_unary<T: Queryable>() -> [(Predicate, bool); Predicate::UNARY.len()] {
                    [$((Predicate::$unary, <<T as Holds<$unary>>::Out as Bool>::VALUE)),*]
                }
            }

            /// Types every unary predicate is well-formed for under the portable backend.
            pub trait Queryable: Describe $(+ Holds<$unary>)* {}

            impl<T> Queryable for T where T: Describe $(+ Holds<$unary>)* {}
        }
    };
}

predicates! {
    unary {
        IsConst,
        IsVoid,
        IsReference,
        IsLvalueReference,
        IsRvalueReference,
        IsPointer,
        IsFunction,
        IsAbstract,
        IsFinal,
        IsMoveConstructible,
        IsNothrowMoveConstructible,
        IsTriviallyMoveConstructible,
        IsCopyConstructible,
        IsNothrowCopyConstructible,
        IsTriviallyCopyConstructible,
        IsDestructible,
        IsNothrowDestructible,
        IsTriviallyDestructible,
    }
    binary {
        /// Constructible from a single argument of type `A`.
        IsConstructible,
        IsNothrowConstructible,
        IsTriviallyConstructible,
    }
}

impl Predicate {
    /// Look a predicate up by its snake_case name.
    pub const fn from_name(name: &str) -> Option<Predicate> {
        let mut i = 0;
        while i < Predicate::ALL.len() {
            let candidate = Predicate::ALL[i];
            if crate::primitives::str_eq(candidate.name(), name) {
                return Some(candidate);
            }
            i += 1;
        }
        None
    }

    pub const fn is_binary(self) -> bool {
        self.arity() == 2
    }
}

impl core::fmt::Display for Predicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for &p in Predicate::ALL {
            assert_eq!(Predicate::from_name(p.name()), Some(p));
        }
        assert_eq!(Predicate::from_name("is_nothrow_move_constructible"), Some(Predicate::IsNothrowMoveConstructible));
        assert_eq!(Predicate::from_name("is_sortable"), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Predicate::IsConst.arity(), 1);
        assert!(Predicate::IsTriviallyConstructible.is_binary());
        assert_eq!(Predicate::UNARY.len() + Predicate::BINARY.len(), Predicate::ALL.len());
    }

    #[test]
    fn test_markers_carry_arguments() {
        assert!(<IsConst as Marker>::ARG.is_none());
        let arg = <IsConstructible<i32> as Marker>::ARG;
        assert!(matches!(arg, Some(info) if info.same_type(&<i32 as Describe>::INFO)));
    }
}
