//! Descriptors for Rust scalars and a few std containers.
//!
//! Containers are modelled after their closest C++ counterparts: `String`
//! and `Vec<T>` copy with allocation (may throw) and move without it,
//! `Box<T>` is move-only, `Option<T>` inherits every member from `T`.

use super::describe::{Describe, Interned, Object};
use super::info::{Members, TypeInfo};
use super::member::{Deleted, Nothrow, Throwing, Trivial};
use crate::primitives::False;

macro_rules! describe_scalars {
    ($($t:ty),* $(,)?) => {
        $(
            crate::__impl_describe! {
                [] $t,
                info: TypeInfo::scalar(stringify!($t)),
                copy_ctor: Trivial,
                move_ctor: Trivial,
                dtor: Trivial,
                is_abstract: False,
                is_final: False,
            }
        )*
    };
}

describe_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

#[cfg(feature = "alloc")]
mod heap {
    use super::*;
    use crate::descriptor::info::Member;
    use alloc::{boxed::Box, string::String, vec::Vec};

    const CONTAINER: Members = Members::new(
        Member::Throwing,
        Member::Nothrow,
        Member::Nothrow,
    );

    const UNIQUE: Members = Members::new(
        Member::Deleted,
        Member::Nothrow,
        Member::Nothrow,
    );

    crate::__impl_describe! {
        [] String,
        info: TypeInfo::class("alloc::string::String", CONTAINER),
        copy_ctor: Throwing,
        move_ctor: Nothrow,
        dtor: Nothrow,
        is_abstract: False,
        is_final: False,
    }

    crate::__impl_describe! {
        [T: Describe] Vec<T>,
        info: TypeInfo::class("alloc::vec::Vec", CONTAINER).with_args(Interned::<T>::ARGS),
        copy_ctor: Throwing,
        move_ctor: Nothrow,
        dtor: Nothrow,
        is_abstract: False,
        is_final: False,
    }

    crate::__impl_describe! {
        [T: Describe] Box<T>,
        info: TypeInfo::class("alloc::boxed::Box", UNIQUE).with_args(Interned::<T>::ARGS),
        copy_ctor: Deleted,
        move_ctor: Nothrow,
        dtor: Nothrow,
        is_abstract: False,
        is_final: False,
    }
}

crate::__impl_describe! {
    [T: Object] Option<T>,
    info: TypeInfo::class("core::option::Option", T::INFO.members).with_args(Interned::<T>::ARGS),
    copy_ctor: T::CopyCtor,
    move_ctor: T::MoveCtor,
    dtor: T::Dtor,
    is_abstract: False,
    is_final: False,
}
