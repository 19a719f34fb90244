//! Qualifier and compound forms.
//!
//! Rust has no `const T` or `T&&`, so the forms are marker types that wrap a
//! described type. They are never instantiated.

use core::marker::PhantomData;

use super::describe::{Arg, Describe, Interned, Object, Qualifiable};
use super::info::TypeInfo;
use super::member::{self, MemberKind};
use crate::primitives::{False, True};

/// `const T`
pub struct Const<T>(PhantomData<fn() -> T>);

/// `T&`
pub struct Ref<T>(PhantomData<fn() -> T>);

/// `T&&`
pub struct RvalueRef<T>(PhantomData<fn() -> T>);

/// `T*`
pub struct Pointer<T>(PhantomData<fn() -> T>);

/// A function type with signature `S`, e.g. `Func<fn(i32) -> i32>`.
pub struct Func<S>(PhantomData<fn() -> S>);

/// `fn` pointer types whose return and parameter types are all described.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a describable function signature",
    note = "use `fn(A, ..) -> R` with up to six parameters, every one implementing `Describe`"
)]
pub trait Signature: 'static {
    /// Return type first, then the parameters.
    const PARTS: &'static [&'static TypeInfo];
}

macro_rules! signatures {
    ($($($param:ident)*;)*) => {
        $(
            impl<R: Describe $(, $param: Describe)*> Signature for fn($($param),*) -> R {
                const PARTS: &'static [&'static TypeInfo] = &[&R::INFO $(, &$param::INFO)*];
            }
        )*
    };
}

signatures! {
    ;
    A;
    A B;
    A B C;
    A B C D;
    A B C D E;
    A B C D E G;
}

/// `void`
pub struct Void;

/// A declared but never defined type, distinguished by `Tag`.
pub struct Incomplete<Tag>(PhantomData<fn() -> Tag>);

impl<U: Qualifiable> Describe for Const<U> {
    const INFO: TypeInfo = U::INFO.qualified();

    type IsConst = True;
    type IsVoid = U::IsVoid;
    type IsLvalueRef = False;
    type IsRvalueRef = False;
    type IsPointer = U::IsPointer;
    type IsFunction = False;

    type AddConst = Self;
    type RemoveConst = U;
    type AddLvalueRef = U::ConstLvalue;
    type AddRvalueRef = U::ConstRvalue;
    type RemoveRef = Self;
}

impl<U: Qualifiable> Arg for Const<U> {
    type Bare = U;
    type ConstQual = True;
    type Lvalue = False;
    type Ctor<C: MemberKind, M: MemberKind> = C;
}

impl<U: Describe> Describe for Ref<U> {
    const INFO: TypeInfo = TypeInfo::lvalue_ref(Interned::<U>::INFO);

    type IsConst = False;
    type IsVoid = False;
    type IsLvalueRef = True;
    type IsRvalueRef = False;
    type IsPointer = False;
    type IsFunction = False;

    type AddConst = Self;
    type RemoveConst = Self;
    type AddLvalueRef = Self;
    type AddRvalueRef = Self;
    type RemoveRef = U;
}

impl<U: Describe> Arg for Ref<U> {
    type Bare = U::RemoveConst;
    type ConstQual = U::IsConst;
    type Lvalue = True;
    type Ctor<C: MemberKind, M: MemberKind> = C;
}

impl<U: Describe> Describe for RvalueRef<U> {
    const INFO: TypeInfo = TypeInfo::rvalue_ref(Interned::<U>::INFO);

    type IsConst = False;
    type IsVoid = False;
    type IsLvalueRef = False;
    type IsRvalueRef = True;
    type IsPointer = False;
    type IsFunction = False;

    type AddConst = Self;
    type RemoveConst = Self;
    type AddLvalueRef = Ref<U>;
    type AddRvalueRef = Self;
    type RemoveRef = U;
}

impl<U: Arg> Arg for RvalueRef<U> {
    type Bare = U::RemoveConst;
    type ConstQual = U::IsConst;
    type Lvalue = False;
    type Ctor<C: MemberKind, M: MemberKind> = U::Ctor<C, M>;
}

impl<U: Describe> Describe for Pointer<U> {
    const INFO: TypeInfo = TypeInfo::pointer(Interned::<U>::INFO);

    type IsConst = False;
    type IsVoid = False;
    type IsLvalueRef = False;
    type IsRvalueRef = False;
    type IsPointer = True;
    type IsFunction = False;

    type AddConst = Const<Self>;
    type RemoveConst = Self;
    type AddLvalueRef = Ref<Self>;
    type AddRvalueRef = RvalueRef<Self>;
    type RemoveRef = Self;
}

impl<U: Describe> Object for Pointer<U> {
    type CopyCtor = member::Trivial;
    type MoveCtor = member::Trivial;
    type Dtor = member::Trivial;
    type Abstract = False;
    type Final = False;
}

impl<S: Signature> Describe for Func<S> {
    const INFO: TypeInfo = TypeInfo::function("fn").with_args(S::PARTS);

    type IsConst = False;
    type IsVoid = False;
    type IsLvalueRef = False;
    type IsRvalueRef = False;
    type IsPointer = False;
    type IsFunction = True;

    type AddConst = Self;
    type RemoveConst = Self;
    type AddLvalueRef = Ref<Self>;
    type AddRvalueRef = RvalueRef<Self>;
    type RemoveRef = Self;
}

impl Describe for Void {
    const INFO: TypeInfo = TypeInfo::VOID;

    type IsConst = False;
    type IsVoid = True;
    type IsLvalueRef = False;
    type IsRvalueRef = False;
    type IsPointer = False;
    type IsFunction = False;

    type AddConst = Const<Void>;
    type RemoveConst = Void;
    type AddLvalueRef = Void;
    type AddRvalueRef = Void;
    type RemoveRef = Void;
}

impl Arg for Void {
    type Bare = Void;
    type ConstQual = False;
    type Lvalue = False;
    type Ctor<C: MemberKind, M: MemberKind> = C;
}

impl Qualifiable for Void {
    type ConstLvalue = Const<Void>;
    type ConstRvalue = Const<Void>;
}

impl<Tag: Describe> Describe for Incomplete<Tag> {
    const INFO: TypeInfo = TypeInfo::incomplete("incomplete").with_args(Interned::<Tag>::ARGS);

    type IsConst = False;
    type IsVoid = False;
    type IsLvalueRef = False;
    type IsRvalueRef = False;
    type IsPointer = False;
    type IsFunction = False;

    type AddConst = Const<Self>;
    type RemoveConst = Self;
    type AddLvalueRef = Ref<Self>;
    type AddRvalueRef = RvalueRef<Self>;
    type RemoveRef = Self;
}

impl<Tag: Describe> Qualifiable for Incomplete<Tag> {
    type ConstLvalue = Ref<Const<Self>>;
    type ConstRvalue = RvalueRef<Const<Self>>;
}
