//! Descriptor traits.
//!
//! [`Describe`] is implemented by every type the trait system can talk about:
//! user types (through `#[derive(Describe)]`), the descriptors shipped for
//! scalars and std types, and the qualifier forms in [`forms`](super::forms).

use core::marker::PhantomData;

use super::forms::{Const, Ref, RvalueRef};
use super::info::TypeInfo;
use super::member::MemberKind;
use crate::primitives::Bool;

/// A type the trait system can reason about.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no type descriptor",
    label = "not describable",
    note = "derive `Describe` for your own types, or wrap the type in one of the descriptor forms"
)]
pub trait Describe: 'static {
    const INFO: TypeInfo;

    type IsConst: Bool;
    type IsVoid: Bool;
    type IsLvalueRef: Bool;
    type IsRvalueRef: Bool;
    type IsPointer: Bool;
    type IsFunction: Bool;

    /// `const T`. Identity for references and functions.
    type AddConst: Describe;
    type RemoveConst: Describe;
    /// `T&`, with collapsing. Identity for `void`.
    type AddLvalueRef: Describe;
    /// `T&&`, with collapsing. Identity for `void`.
    type AddRvalueRef: Describe;
    type RemoveRef: Describe;
}

/// Object types: things that have constructors and a destructor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an object type",
    note = "references, functions, `void` and incomplete types have no special members"
)]
pub trait Object: Describe {
    type CopyCtor: MemberKind;
    type MoveCtor: MemberKind;
    type Dtor: MemberKind;
    type Abstract: Bool;
    type Final: Bool;
}

/// Types that accept a top-level `const`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be const-qualified",
    note = "use `AddConst<T>`, which leaves references and functions unchanged"
)]
pub trait Qualifiable: Describe {
    /// `AddLvalueReference<Const<Self>>`
    type ConstLvalue: Describe;
    /// `AddRvalueReference<Const<Self>>`
    type ConstRvalue: Describe;
}

impl<T: Object> Qualifiable for T {
    type ConstLvalue = Ref<Const<T>>;
    type ConstRvalue = RvalueRef<Const<T>>;
}

/// The view of a descriptor used as a constructor argument.
///
/// Bare objects and `const` objects behave like `declval<T>()`: xvalues.
pub trait Arg: Describe {
    /// Referenced type without top-level `const`.
    type Bare: Describe;
    type ConstQual: Bool;
    /// Binds as an lvalue rather than an xvalue.
    type Lvalue: Bool;
    /// Constructor an object of type `Bare` picks for this argument, given
    /// its copy (`C`) and move (`M`) constructors.
    type Ctor<C: MemberKind, M: MemberKind>: MemberKind;
}

impl<T: Object> Arg for T {
    type Bare = T;
    type ConstQual = crate::primitives::False;
    type Lvalue = crate::primitives::False;
    type Ctor<C: MemberKind, M: MemberKind> = M::Or<C>;
}

#[doc(hidden)]
pub struct Interned<T>(PhantomData<fn() -> T>);

impl<T: Describe> Interned<T> {
    pub const INFO: &'static TypeInfo = &T::INFO;
    pub const ARGS: &'static [&'static TypeInfo] = &[&T::INFO];
}

pub type AddConst<T> = <T as Describe>::AddConst;
pub type RemoveConst<T> = <T as Describe>::RemoveConst;
pub type AddLvalueReference<T> = <T as Describe>::AddLvalueRef;
pub type AddRvalueReference<T> = <T as Describe>::AddRvalueRef;
pub type RemoveReference<T> = <T as Describe>::RemoveRef;
pub type RemoveCvRef<T> = RemoveConst<RemoveReference<T>>;
