// Boolean expression parsing and lowering for trait queries

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

/// One predicate application: `is_const` or `is_constructible(A)`.
#[derive(Clone, Debug)]
pub struct PredicateCall {
    pub name: Ident,
    pub arg: Option<Type>,
}

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Pred(PredicateCall),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary
// `&&` / `||` are accepted as spellings of `&` / `|`.

fn eat_or(input: ParseStream) -> syn::Result<bool> {
    if input.peek(Token![||]) {
        input.parse::<Token![||]>()?;
        Ok(true)
    } else if input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

fn eat_and(input: ParseStream) -> syn::Result<bool> {
    if input.peek(Token![&&]) {
        input.parse::<Token![&&]>()?;
        Ok(true)
    } else if input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while eat_or(input)? {
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while eat_and(input)? {
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        return content.parse();
    }

    let name: Ident = input.parse()?;
    let arg = if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        Some(content.parse::<Type>()?)
    } else {
        None
    };
    Ok(BoolExpr::Pred(PredicateCall { name, arg }))
}

// =============================================================================
// Lowering
// =============================================================================

/// Lower BoolExpr to a `const`-evaluable boolean over the default backend.
///
/// Names resolve against `tola_traits::traits`, so an unknown name or a
/// wrong argument count is a resolution error spanned at the name.
pub fn bool_expr_to_const(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Pred(PredicateCall { name, arg: None }) => {
            quote_spanned! {name.span()=> ::tola_traits::traits::#name::<#ty>() }
        }
        BoolExpr::Pred(PredicateCall { name, arg: Some(arg) }) => {
            quote_spanned! {name.span()=> ::tola_traits::traits::#name::<#ty, #arg>() }
        }
        BoolExpr::And(lhs, rhs) => {
            let l = bool_expr_to_const(lhs, ty);
            let r = bool_expr_to_const(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = bool_expr_to_const(lhs, ty);
            let r = bool_expr_to_const(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_const(operand, ty);
            quote! { (!#o) }
        }
    }
}
