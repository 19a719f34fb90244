//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `T: Expr`
// =============================================================================

/// A type followed by a predicate expression: `Ref<Const<i32>>: is_const | is_reference`
#[derive(Clone)]
pub struct TypeConstraint {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeConstraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the predicate expression"));
        }
        Ok(TypeConstraint { ty, expr })
    }
}
