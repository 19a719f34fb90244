//! Portable backend: predicates as trait resolution.
//!
//! Every answer is a [`Bool`] type computed from descriptor associated types.
//! Derived predicates are written in terms of the primitive ones, never by
//! re-reading member kinds:
//!
//! ```text
//! is_nothrow_move_constructible<T>
//!   = is_nothrow_constructible<T, AddRvalueReference<T>>
//!   = ConstructFrom<AddRvalueReference<T>>::Nothrow
//! ```
//!
//! Function and incomplete types have no [`ConstructFrom`] or destructor
//! impls, so asking about them is a compile error rather than `false`.

use super::predicates::*;
use crate::descriptor::{
    AddConst, AddLvalueReference, AddRvalueReference, Arg, Const, Describe, Func, MemberKind,
    Object, Qualifiable, Ref, RvalueRef, Signature, Void,
};
use crate::primitives::{And, Bool, False, Not, Or, True};

/// `P` evaluated for `Self`.
#[diagnostic::on_unimplemented(
    message = "`{P}` is not answerable for `{Self}`",
    label = "ill-formed trait query",
    note = "constructibility and destructibility are ill-formed for function and incomplete types"
)]
pub trait Holds<P> {
    type Out: Bool;
}

// =============================================================================
// Construction
// =============================================================================

/// Single-argument construction of `Self` from an argument `A`.
#[diagnostic::on_unimplemented(
    message = "cannot model constructing `{Self}` from `{A}`",
    note = "only construction from the same type (any qualifiers, any reference) is modelled"
)]
pub trait ConstructFrom<A> {
    type Constructible: Bool;
    type Nothrow: Bool;
    type Trivial: Bool;
}

type Selected<T, A> = <A as Arg>::Ctor<<T as Object>::CopyCtor, <T as Object>::MoveCtor>;
type Callable<M> = <M as MemberKind>::Callable;
type NoThrow<M> = <M as MemberKind>::Nothrow;
type Trivially<M> = <M as MemberKind>::Trivial;
type Concrete<T> = Not<<T as Object>::Abstract>;

impl<T: Object, A: Arg<Bare = T>> ConstructFrom<A> for T {
    type Constructible = And<Callable<Selected<T, A>>, Concrete<T>>;
    type Nothrow = And<Concrete<T>, And<NoThrow<Selected<T, A>>, NoThrow<T::Dtor>>>;
    type Trivial = And<Concrete<T>, And<Trivially<Selected<T, A>>, Trivially<T::Dtor>>>;
}

impl<U, A> ConstructFrom<A> for Const<U>
where
    U: Qualifiable + ConstructFrom<A>,
{
    type Constructible = <U as ConstructFrom<A>>::Constructible;
    type Nothrow = <U as ConstructFrom<A>>::Nothrow;
    type Trivial = <U as ConstructFrom<A>>::Trivial;
}

type Binds<U, A> = Or<<U as Describe>::IsConst, And<<A as Arg>::Lvalue, Not<<A as Arg>::ConstQual>>>;

impl<U: Describe, A: Arg<Bare = U::RemoveConst>> ConstructFrom<A> for Ref<U> {
    type Constructible = Binds<U, A>;
    type Nothrow = Binds<U, A>;
    type Trivial = Binds<U, A>;
}

type BindsRvalue<U, A> =
    And<Not<<A as Arg>::Lvalue>, Or<<U as Describe>::IsConst, Not<<A as Arg>::ConstQual>>>;

impl<U: Describe, A: Arg<Bare = U::RemoveConst>> ConstructFrom<A> for RvalueRef<U> {
    type Constructible = BindsRvalue<U, A>;
    type Nothrow = BindsRvalue<U, A>;
    type Trivial = BindsRvalue<U, A>;
}

impl<A: Arg> ConstructFrom<A> for Void {
    type Constructible = False;
    type Nothrow = False;
    type Trivial = False;
}

impl<T, A> Holds<IsConstructible<A>> for T
where
    T: ConstructFrom<A>,
{
    type Out = <T as ConstructFrom<A>>::Constructible;
}

impl<T, A> Holds<IsNothrowConstructible<A>> for T
where
    T: ConstructFrom<A>,
{
    type Out = <T as ConstructFrom<A>>::Nothrow;
}

impl<T, A> Holds<IsTriviallyConstructible<A>> for T
where
    T: ConstructFrom<A>,
{
    type Out = <T as ConstructFrom<A>>::Trivial;
}

macro_rules! composed {
    ($($pred:ident => $base:ident[$arg:ty];)*) => {
        $(
            impl<T: Describe> Holds<$pred> for T
            where
                T: Holds<$base<$arg>>,
            {
                type Out = <T as Holds<$base<$arg>>>::Out;
            }
        )*
    };
}

composed! {
    IsMoveConstructible => IsConstructible[AddRvalueReference<T>];
    IsNothrowMoveConstructible => IsNothrowConstructible[AddRvalueReference<T>];
    IsTriviallyMoveConstructible => IsTriviallyConstructible[AddRvalueReference<T>];
    IsCopyConstructible => IsConstructible[AddLvalueReference<AddConst<T>>];
    IsNothrowCopyConstructible => IsNothrowConstructible[AddLvalueReference<AddConst<T>>];
    IsTriviallyCopyConstructible => IsTriviallyConstructible[AddLvalueReference<AddConst<T>>];
}

// =============================================================================
// Destruction
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "destruction of `{Self}` is ill-formed",
    note = "function and incomplete types have no destructor to inspect"
)]
pub trait Destroy {
    type Destructible: Bool;
    type Nothrow: Bool;
    type Trivial: Bool;
}

impl<T: Object> Destroy for T {
    type Destructible = Callable<T::Dtor>;
    type Nothrow = NoThrow<T::Dtor>;
    type Trivial = Trivially<T::Dtor>;
}

impl<U: Qualifiable + Destroy> Destroy for Const<U> {
    type Destructible = U::Destructible;
    type Nothrow = U::Nothrow;
    type Trivial = U::Trivial;
}

impl<U: Describe> Destroy for Ref<U> {
    type Destructible = True;
    type Nothrow = True;
    type Trivial = True;
}

impl<U: Describe> Destroy for RvalueRef<U> {
    type Destructible = True;
    type Nothrow = True;
    type Trivial = True;
}

impl Destroy for Void {
    type Destructible = False;
    type Nothrow = False;
    type Trivial = False;
}

impl<T: Destroy> Holds<IsDestructible> for T {
    type Out = T::Destructible;
}

impl<T: Destroy> Holds<IsNothrowDestructible> for T {
    type Out = T::Nothrow;
}

impl<T: Destroy> Holds<IsTriviallyDestructible> for T {
    type Out = T::Trivial;
}

// =============================================================================
// Class properties
// =============================================================================

/// Class flags; `false` for every non-class form. Incomplete types have none.
pub trait ClassFlags {
    type Abstract: Bool;
    type Final: Bool;
}

impl<T: Object> ClassFlags for T {
    type Abstract = T::Abstract;
    type Final = T::Final;
}

impl<U: Qualifiable + ClassFlags> ClassFlags for Const<U> {
    type Abstract = U::Abstract;
    type Final = U::Final;
}

macro_rules! not_a_class {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> ClassFlags for $ty {
                type Abstract = False;
                type Final = False;
            }
        )*
    };
}

not_a_class!([U: Describe] Ref<U>, [U: Describe] RvalueRef<U>, [S: Signature] Func<S>, [] Void);

impl<T: ClassFlags> Holds<IsAbstract> for T {
    type Out = T::Abstract;
}

impl<T: ClassFlags> Holds<IsFinal> for T {
    type Out = T::Final;
}

// =============================================================================
// Qualifiers and shape
// =============================================================================

macro_rules! shape {
    ($($pred:ident => $out:ty;)*) => {
        $(
            impl<T: Describe> Holds<$pred> for T {
                type Out = $out;
            }
        )*
    };
}

shape! {
    IsConst => T::IsConst;
    IsVoid => T::IsVoid;
    IsReference => Or<T::IsLvalueRef, T::IsRvalueRef>;
    IsLvalueReference => T::IsLvalueRef;
    IsRvalueReference => T::IsRvalueRef;
    IsPointer => T::IsPointer;
    IsFunction => T::IsFunction;
}
