//! Derived predicates agree with their definitions in terms of the
//! primitive ones, for every form.
//!
//! ```text
//! is_move_constructible<T>  == is_constructible<T, AddRvalueReference<T>>
//! is_copy_constructible<T>  == is_constructible<T, AddLvalueReference<AddConst<T>>>
//! is_trivially_*<T>  =>  is_nothrow_*<T>  =>  is_*<T>
//! ```

use tola_traits::descriptor::{
    AddConst, AddLvalueReference, AddRvalueReference, Const, Pointer, Ref, RvalueRef, Void,
};
use tola_traits::traits::*;
use tola_traits::Describe;

#[derive(Describe)]
#[describe(copy_ctor = deleted, move_ctor = nothrow, dtor = nothrow)]
struct MoveOnly;

#[derive(Describe)]
#[describe(copy_ctor = throwing, move_ctor = undeclared, dtor = nothrow)]
struct Legacy;

#[derive(Describe, Clone, Copy)]
struct Pod;

// ============================================================================
// LAW MACROS
// ============================================================================

macro_rules! move_and_copy_laws {
    ($($t:ty),* $(,)?) => {
        $(
            assert_eq!(
                is_move_constructible::<$t>(),
                is_constructible::<$t, AddRvalueReference<$t>>(),
                "move law for {}", stringify!($t)
            );
            assert_eq!(
                is_nothrow_move_constructible::<$t>(),
                is_nothrow_constructible::<$t, AddRvalueReference<$t>>(),
                "nothrow move law for {}", stringify!($t)
            );
            assert_eq!(
                is_trivially_move_constructible::<$t>(),
                is_trivially_constructible::<$t, AddRvalueReference<$t>>(),
                "trivial move law for {}", stringify!($t)
            );
            assert_eq!(
                is_copy_constructible::<$t>(),
                is_constructible::<$t, AddLvalueReference<AddConst<$t>>>(),
                "copy law for {}", stringify!($t)
            );
            assert_eq!(
                is_nothrow_copy_constructible::<$t>(),
                is_nothrow_constructible::<$t, AddLvalueReference<AddConst<$t>>>(),
                "nothrow copy law for {}", stringify!($t)
            );
        )*
    };
}

macro_rules! strength_laws {
    ($($t:ty),* $(,)?) => {
        $(
            assert!(
                !is_trivially_move_constructible::<$t>() || is_nothrow_move_constructible::<$t>(),
                "trivial move implies nothrow move for {}", stringify!($t)
            );
            assert!(
                !is_nothrow_move_constructible::<$t>() || is_move_constructible::<$t>(),
                "nothrow move implies move for {}", stringify!($t)
            );
            assert!(
                !is_trivially_copy_constructible::<$t>() || is_nothrow_copy_constructible::<$t>(),
                "trivial copy implies nothrow copy for {}", stringify!($t)
            );
            assert!(
                !is_trivially_destructible::<$t>() || is_nothrow_destructible::<$t>(),
                "trivial dtor implies nothrow dtor for {}", stringify!($t)
            );
        )*
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_move_and_copy_are_constructibility_from_references() {
    move_and_copy_laws!(
        i32, Pod, MoveOnly, Legacy, String, Vec<i32>, Box<u8>, Option<MoveOnly>,
        Const<i32>, Const<MoveOnly>, Const<Legacy>,
        Ref<i32>, Ref<Const<MoveOnly>>, RvalueRef<Legacy>,
        Pointer<MoveOnly>, Const<Pointer<i32>>,
        Void, Const<Void>,
    );
}

#[test]
fn test_stronger_predicates_imply_weaker_ones() {
    strength_laws!(
        i32, Pod, MoveOnly, Legacy, String, Box<u8>,
        Const<i32>, Const<Legacy>, Ref<MoveOnly>, RvalueRef<i32>, Pointer<String>, Void,
    );
}

#[test]
fn test_move_only_and_legacy_shapes() {
    assert!(is_nothrow_move_constructible::<MoveOnly>());
    assert!(!is_copy_constructible::<MoveOnly>());
    assert!(!is_move_constructible::<Const<MoveOnly>>());

    assert!(is_move_constructible::<Legacy>());
    assert!(!is_nothrow_move_constructible::<Legacy>());
}

#[test]
fn test_add_const_is_idempotent_on_answers() {
    assert_eq!(is_const::<AddConst<AddConst<i32>>>(), is_const::<AddConst<i32>>());
    assert_eq!(
        is_nothrow_move_constructible::<AddConst<Legacy>>(),
        is_nothrow_move_constructible::<Const<Legacy>>()
    );
}
