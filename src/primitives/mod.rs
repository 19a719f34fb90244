//! # Layer 0: Primitives
//!
//! Basic building blocks for the trait system:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `const_utils.rs`: String helpers usable in `const fn`.

pub mod bool;
pub mod const_utils;

// Re-export key types at this level
pub use bool::{And, Bool, BoolOf, False, If, Not, Or, SelectBool, True};
pub use const_utils::{short_name, str_eq};
