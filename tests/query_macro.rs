//! `query!` lowers predicate expressions to const booleans.

use tola_traits::descriptor::{Const, Ref, RvalueRef, Void};
use tola_traits::{Describe, Predicate, TypeInfo, query, query_trait};

#[derive(Describe)]
#[describe(copy_ctor = deleted, move_ctor = nothrow, dtor = nothrow, is_final)]
struct Handle;

// ============================================================================
// SINGLE PREDICATES
// ============================================================================

#[test]
fn test_single_predicates() {
    assert!(query!(Const<i32>: is_const));
    assert!(!query!(i32: is_const));
    assert!(query!(Handle: is_final));
    assert!(query!(Void: is_void));
}

// ============================================================================
// OPERATORS
// ============================================================================

#[test]
fn test_and_or_not() {
    assert!(query!(Handle: is_nothrow_move_constructible & !is_copy_constructible));
    assert!(query!(Ref<Handle>: is_reference && is_copy_constructible));
    assert!(query!(Handle: is_const | is_final));
    assert!(query!(Handle: is_const || is_final));
    assert!(!query!(Handle: !(is_final | is_const)));
}

#[test]
fn test_precedence_binds_and_tighter() {
    // false | (true & true)
    assert!(query!(i32: is_const | is_destructible & is_move_constructible));
    // (false | true) & false
    assert!(!query!(i32: (is_const | is_destructible) & is_void));
}

// ============================================================================
// BINARY PREDICATES AND CONST CONTEXT
// ============================================================================

#[test]
fn test_binary_predicates_take_an_argument() {
    assert!(query!(Ref<Const<i32>>: is_constructible(RvalueRef<i32>)));
    assert!(!query!(Ref<i32>: is_constructible(RvalueRef<i32>)));
    assert!(query!(Handle: is_nothrow_constructible(RvalueRef<Handle>) & !is_constructible(Ref<Handle>)));
}

#[test]
fn test_usable_in_const_items() {
    const MOVE_ONLY: bool = query!(Handle: is_move_constructible & !is_copy_constructible);
    const _: () = assert!(MOVE_ONLY);
    assert!(MOVE_ONLY);
}

// ============================================================================
// PREDICATE NAMES
// ============================================================================

#[test]
fn test_every_predicate_name_lowers() {
    let unary = [
        query!(Handle: is_const),
        query!(Handle: is_void),
        query!(Handle: is_reference),
        query!(Handle: is_lvalue_reference),
        query!(Handle: is_rvalue_reference),
        query!(Handle: is_pointer),
        query!(Handle: is_function),
        query!(Handle: is_abstract),
        query!(Handle: is_final),
        query!(Handle: is_move_constructible),
        query!(Handle: is_nothrow_move_constructible),
        query!(Handle: is_trivially_move_constructible),
        query!(Handle: is_copy_constructible),
        query!(Handle: is_nothrow_copy_constructible),
        query!(Handle: is_trivially_copy_constructible),
        query!(Handle: is_destructible),
        query!(Handle: is_nothrow_destructible),
        query!(Handle: is_trivially_destructible),
    ];
    assert_eq!(unary.len(), Predicate::UNARY.len());
    for (&predicate, got) in Predicate::UNARY.iter().zip(unary) {
        let expected = query_trait(predicate.name(), &[&Handle::INFO]);
        assert_eq!(Ok(got), expected, "{}", predicate.name());
    }

    let arg: &TypeInfo = &RvalueRef::<Handle>::INFO;
    let binary = [
        query!(Handle: is_constructible(RvalueRef<Handle>)),
        query!(Handle: is_nothrow_constructible(RvalueRef<Handle>)),
        query!(Handle: is_trivially_constructible(RvalueRef<Handle>)),
    ];
    assert_eq!(binary.len(), Predicate::BINARY.len());
    for (&predicate, got) in Predicate::BINARY.iter().zip(binary) {
        let expected = query_trait(predicate.name(), &[&Handle::INFO, arg]);
        assert_eq!(Ok(got), expected, "{}", predicate.name());
    }
}
