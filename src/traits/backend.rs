//! Backend selection.
//!
//! A backend decides a predicate for a descriptor at compile time. The
//! portable backend is the default; the `builtin` feature swaps in the
//! record intrinsics crate-wide, so every crate linked together sees one
//! choice.

use super::builtin;
use super::portable::Holds;
use super::predicates::Marker;
use crate::config::BackendKind;
use crate::descriptor::Describe;
use crate::primitives::Bool;

pub trait Backend: 'static {
    const KIND: BackendKind;
}

/// Record intrinsics evaluated in `const` context.
pub struct Builtin;

/// Trait resolution over descriptor associated types.
pub struct Portable;

impl Backend for Builtin {
    const KIND: BackendKind = BackendKind::Builtin;
}

impl Backend for Portable {
    const KIND: BackendKind = BackendKind::Portable;
}

/// Backend `Self` decides predicate `P` for type `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot decide `{P}` for `{T}`",
    note = "the portable backend needs `{T}: Holds<{P}>`; function and incomplete types only answer shape queries"
)]
pub trait Decide<P, T> {
    const VALUE: bool;
}

impl<P: Marker, T: Describe> Decide<P, T> for Builtin {
    const VALUE: bool = builtin::expect(builtin::eval(P::PREDICATE, &T::INFO, P::ARG));
}

impl<P, T: Holds<P>> Decide<P, T> for Portable {
    const VALUE: bool = <T::Out as Bool>::VALUE;
}

#[cfg(not(feature = "builtin"))]
pub type DefaultBackend = Portable;

#[cfg(feature = "builtin")]
pub type DefaultBackend = Builtin;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Const, Ref};
    use crate::traits::predicates::{IsConst, IsNothrowMoveConstructible, IsTriviallyCopyConstructible};

    #[test]
    fn test_backends_agree_on_basics() {
        assert_eq!(
            <Builtin as Decide<IsConst, Const<u8>>>::VALUE,
            <Portable as Decide<IsConst, Const<u8>>>::VALUE
        );
        assert_eq!(
            <Builtin as Decide<IsNothrowMoveConstructible, Ref<u8>>>::VALUE,
            <Portable as Decide<IsNothrowMoveConstructible, Ref<u8>>>::VALUE
        );
        assert!(<Builtin as Decide<IsTriviallyCopyConstructible, f64>>::VALUE);
    }

    #[test]
    fn test_default_backend_kind() {
        let expected = if cfg!(feature = "builtin") { BackendKind::Builtin } else { BackendKind::Portable };
        assert_eq!(<DefaultBackend as Backend>::KIND, expected);
    }
}
