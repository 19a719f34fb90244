use proc_macro2::TokenStream as TokenStream2;

use crate::common::{bool_expr_to_const, TypeConstraint};

/// `query!(T: expr)` lowers to `&&` / `||` / `!` over the `is_*` const fns,
/// so the result is usable in `const` items.
pub fn expand_query(input: TypeConstraint) -> TokenStream2 {
    bool_expr_to_const(&input.expr, &input.ty)
}
