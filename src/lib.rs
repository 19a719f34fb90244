#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables the analysis cache, BasicString and BackInserter in no_std
// - builtin: answer compile-time queries with the record intrinsics
// - debug-checks: container and iterator preconditions in release builds

//! # tola-traits
//!
//! Compile-time type traits and an iterator capability lattice.
//!
//! ## Architecture
//!
//! Every type the trait system talks about has a **descriptor**: a const
//! [`TypeInfo`](descriptor::TypeInfo) record plus type-level flags and
//! member kinds. Predicates are answered by one of two backends:
//!
//! ```text
//! is_nothrow_move_constructible::<T>()
//!     |
//!     v
//! Decide<IsNothrowMoveConstructible, T>
//!     |                                  |
//!  Portable                            Builtin
//!  Holds<P>: trait resolution          const fn over TypeInfo
//!  over descriptor types               records
//! ```
//!
//! The backends are written independently and compared by
//! [`traits::verify`].
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - True / False, const string helpers                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Descriptors                                             |
//! |  - TypeInfo, Describe, Const / Ref / RvalueRef / Func / Void      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Traits                                                  |
//! |  - predicates, portable + builtin backends, query_trait, query!   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Iterators             Layer 4: Algorithms               |
//! |  - Capability lattice, tags     - advance, copy, heap, reverse    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_traits::prelude::*;
//!
//! #[derive(Describe)]
//! #[describe(copy_ctor = throwing, move_ctor = nothrow, dtor = nothrow)]
//! struct Buffer(Vec<u8>);
//!
//! const _: () = assert!(is_nothrow_move_constructible::<Buffer>());
//! assert!(!is_const::<Buffer>());
//! assert!(query!(Buffer: is_copy_constructible & !is_trivially_copy_constructible));
//! assert_eq!(classify::<Ptr<'static, u8>>(), Capability::Contiguous);
//! ```

// Allow `::tola_traits` to work inside the crate itself
extern crate self as tola_traits;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the predicate tables
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Descriptors
// =============================================================================
pub mod descriptor;

// =============================================================================
// Layer 2: Traits
// =============================================================================
pub mod traits;

#[cfg(feature = "alloc")]
pub mod analysis;

// =============================================================================
// Layer 3 / 4: Iterators and Algorithms
// =============================================================================
pub mod algo;
pub mod iter;

// =============================================================================
// Supporting utilities
// =============================================================================
pub mod config;
pub mod debug;
pub mod num;
#[cfg(feature = "alloc")]
pub mod string;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use config::{BackendKind, Config};
pub use descriptor::{Describe, TypeInfo};
pub use traits::{Predicate, QueryError, query_trait};

// Re-export proc-macros
pub use macros::{Describe, query};

// =============================================================================
// Declarative Macro Bridge for #[derive(Describe)]
// =============================================================================
//
// #[derive(Describe)] (proc-macro) resolves the attributes into member kinds
// and a TypeInfo expression, then expands to __impl_describe!, which writes
// the two trait impls with `$crate` paths.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Describe)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_describe {
    (
        [$($gen:tt)*] $ty:ty,
        info: $info:expr,
        copy_ctor: $copy:ty,
        move_ctor: $move:ty,
        dtor: $dtor:ty,
        is_abstract: $abs:ty,
        is_final: $fin:ty $(,)?
    ) => {
        impl<$($gen)*> $crate::descriptor::Describe for $ty {
            const INFO: $crate::descriptor::TypeInfo = $info;

            type IsConst = $crate::primitives::False;
            type IsVoid = $crate::primitives::False;
            type IsLvalueRef = $crate::primitives::False;
            type IsRvalueRef = $crate::primitives::False;
            type IsPointer = $crate::primitives::False;
            type IsFunction = $crate::primitives::False;

            type AddConst = $crate::descriptor::Const<Self>;
            type RemoveConst = Self;
            type AddLvalueRef = $crate::descriptor::Ref<Self>;
            type AddRvalueRef = $crate::descriptor::RvalueRef<Self>;
            type RemoveRef = Self;
        }

        impl<$($gen)*> $crate::descriptor::Object for $ty {
            type CopyCtor = $copy;
            type MoveCtor = $move;
            type Dtor = $dtor;
            type Abstract = $abs;
            type Final = $fin;
        }
    };
}

/// Common items for trait queries and iterator code.
pub mod prelude {
    pub use crate::descriptor::{
        AddConst, AddLvalueReference, AddRvalueReference, Const, Describe, Func, Pointer, Ref,
        RemoveReference, RvalueRef, Void,
    };
    pub use crate::iter::{
        BidirectionalIter, Capability, Classified, ContiguousIter, ForwardIter, Incrementable,
        InputIter, OutputIter, Ptr, PtrMut, RandomAccessIter, SwapIter, classify,
    };
    pub use crate::traits::{
        is_const, is_constructible, is_copy_constructible, is_destructible, is_move_constructible,
        is_nothrow_constructible, is_nothrow_copy_constructible, is_nothrow_destructible,
        is_nothrow_move_constructible, is_reference, is_trivially_constructible,
        is_trivially_copy_constructible, is_trivially_destructible, is_trivially_move_constructible,
        is_void, query_trait,
    };
    pub use macros::{Describe, query};
}
