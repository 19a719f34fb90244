//! Record-level query surface.
//!
//! [`query_trait`] answers a predicate by name for a list of type records,
//! usable in `const` items and at runtime alike. It always goes through the
//! builtin intrinsics, since records are all it has.

use derive_more::{Display, Error};

use super::builtin;
use super::predicates::Predicate;
use crate::descriptor::{Kind, TypeInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum QueryError {
    #[display("unknown trait predicate")]
    UnknownPredicate,
    #[display("`{predicate}` takes {expected} type(s), got {found}")]
    Arity { predicate: Predicate, expected: usize, found: usize },
    #[display("`{predicate}` is ill-formed for {kind:?} types")]
    IllFormed { predicate: Predicate, kind: Kind },
    #[display("`{predicate}` only models construction from the same type")]
    UnrelatedArgument { predicate: Predicate },
}

impl Predicate {
    /// Evaluate against `types`, which must hold exactly [`arity`](Self::arity) records.
    pub const fn evaluate(self, types: &[&TypeInfo]) -> Result<bool, QueryError> {
        match types {
            [ty] => builtin::eval(self, *ty, None),
            [ty, arg] => builtin::eval(self, *ty, Some(*arg)),
            _ => Err(QueryError::Arity { predicate: self, expected: self.arity(), found: types.len() }),
        }
    }
}

/// Answer the predicate called `name` for `types`.
///
/// ```
/// use tola_traits::descriptor::{Const, Describe, Ref};
/// use tola_traits::traits::query_trait;
///
/// const CONST_INT: bool = match query_trait("is_const", &[&<Const<i32> as Describe>::INFO]) {
///     Ok(answer) => answer,
///     Err(_) => false,
/// };
/// assert!(CONST_INT);
/// assert_eq!(query_trait("is_const", &[&<Ref<Const<i32>> as Describe>::INFO]), Ok(false));
/// ```
pub const fn query_trait(name: &str, types: &[&TypeInfo]) -> Result<bool, QueryError> {
    match Predicate::from_name(name) {
        Some(predicate) => predicate.evaluate(types),
        None => Err(QueryError::UnknownPredicate),
    }
}
