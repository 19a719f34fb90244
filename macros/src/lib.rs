//! Procedural macros for the tola-traits descriptor and query system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Describe)]` | struct/enum/union | Implement `Describe` + `Object` |
//! | `query!` | - | Evaluate a predicate expression as a `const` bool |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Describe)]
//! #[describe(copy_ctor = deleted, move_ctor = nothrow, dtor = nothrow, is_final)]
//! struct Handle(u32);
//!
//! const MOVABLE: bool = query!(Handle: is_nothrow_move_constructible & !is_copy_constructible);
//! const FROM_XVALUE: bool = query!(Handle: is_constructible(RvalueRef<Handle>));
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive a type descriptor.
///
/// # Attributes
///
/// `#[describe(copy_ctor = K, move_ctor = K, dtor = K, is_abstract, is_final)]`
/// where `K` is `trivial` (default), `nothrow`, `throwing` or `deleted`.
/// `move_ctor` may also be `undeclared`, in which case moves use the copy
/// constructor.
///
/// A trivial copy constructor requires the type to be `Copy`.
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_describe(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Evaluate a boolean expression over trait predicates.
///
/// # Syntax
/// ```ignore
/// query!(T: is_const)
/// query!(T: is_move_constructible & !is_trivially_move_constructible)
/// query!(T: (is_reference | is_pointer) & !is_const)
/// query!(T: is_nothrow_constructible(Ref<Const<T>>))
/// ```
///
/// Predicate names resolve against `tola_traits::traits`, so an unknown name
/// or a missing or extra argument type is a compile error at that name.
#[proc_macro]
pub fn query(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::TypeConstraint);
    user::expand_query(input).into()
}
