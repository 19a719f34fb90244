//! Differential checking of the two backends.
//!
//! The portable backend answers through trait resolution, the builtin one by
//! reading records. [`verify`] runs every unary predicate through both and
//! reports the first disagreement.

use derive_more::{Display, Error};
use tracing::debug;

use super::builtin;
use super::portable::{ConstructFrom, Holds};
use super::predicates::{
    IsConstructible, IsNothrowConstructible, IsTriviallyConstructible, Predicate, Queryable,
};
use crate::descriptor::{Arg, Describe, TypeInfo};
use crate::primitives::Bool;

/// Builtin and portable answers differ.
///
/// `builtin` is `None` when the builtin backend rejected a query the
/// portable backend answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("backends disagree on `{predicate}` for `{ty}`: builtin {builtin:?}, portable {portable}")]
pub struct Divergence {
    pub predicate: Predicate,
    pub ty: TypeInfo,
    pub builtin: Option<bool>,
    pub portable: bool,
}

fn compare(predicate: Predicate, ty: &TypeInfo, arg: Option<&TypeInfo>, portable: bool) -> Result<(), Divergence> {
    let builtin = builtin::eval(predicate, ty, arg).ok();
    if builtin == Some(portable) {
        return Ok(());
    }
    Err(Divergence { predicate, ty: *ty, builtin, portable })
}

/// Compare every unary predicate for `T` across both backends.
pub fn verify<T: Queryable>() -> Result<(), Divergence> {
    let info = &T::INFO;
    for (predicate, portable) in Predicate::portable_unary::<T>() {
        compare(predicate, info, None, portable)?;
    }
    debug!(ty = %info, "backends agree on all unary predicates");
    Ok(())
}

/// Compare the three constructibility predicates for `T` from `A`.
pub fn verify_construct<T, A>() -> Result<(), Divergence>
where
    T: Describe + ConstructFrom<A>,
    A: Arg,
{
    let (info, arg) = (&T::INFO, &A::INFO);
    compare(
        Predicate::IsConstructible,
        info,
        Some(arg),
        <<T as Holds<IsConstructible<A>>>::Out as Bool>::VALUE,
    )?;
    compare(
        Predicate::IsNothrowConstructible,
        info,
        Some(arg),
        <<T as Holds<IsNothrowConstructible<A>>>::Out as Bool>::VALUE,
    )?;
    compare(
        Predicate::IsTriviallyConstructible,
        info,
        Some(arg),
        <<T as Holds<IsTriviallyConstructible<A>>>::Out as Bool>::VALUE,
    )?;
    debug!(ty = %info, arg = %arg, "backends agree on construction");
    Ok(())
}
