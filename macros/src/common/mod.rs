// Common utilities shared between user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and lowering
// - parse_utils: Common parsing helpers

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
