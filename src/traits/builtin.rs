//! Builtin backend: predicates as `const fn` intrinsics over [`TypeInfo`].
//!
//! This plays the role of compiler-native introspection. Every predicate
//! reads the record directly; none of them are routed through the reference
//! transformations the portable backend composes. That independence is what
//! makes comparing the two backends worth anything.

use super::predicates::Predicate;
use super::query::QueryError;
use crate::descriptor::{Kind, Member, TypeInfo};

/// `?` for `const fn`.
macro_rules! try_construct {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(e) => return Err(e),
        }
    };
}

/// Outcome of a single-argument construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Construct {
    pub constructible: bool,
    pub nothrow: bool,
    pub trivial: bool,
}

impl Construct {
    pub const NEVER: Construct = Construct { constructible: false, nothrow: false, trivial: false };
    pub const ALWAYS: Construct = Construct { constructible: true, nothrow: true, trivial: true };

    const fn uniform(value: bool) -> Self {
        if value { Self::ALWAYS } else { Self::NEVER }
    }

    /// Construction of a non-abstract object through `ctor` with destructor `dtor`.
    const fn object(concrete: bool, ctor: Member, dtor: Member) -> Self {
        let constructible = concrete && ctor.callable();
        Construct {
            constructible,
            nothrow: concrete && ctor.nothrow() && dtor.nothrow(),
            trivial: concrete && ctor.trivial() && dtor.trivial(),
        }
    }
}

/// How an argument expression presents itself to a constructor.
///
/// Borrowing the argument's record keeps the builtin path free of
/// synthesized `'static` records.
#[derive(Debug, Clone, Copy)]
pub struct ArgShape<'a> {
    /// The referenced type. May carry its own `const`.
    pub base: &'a TypeInfo,
    pub is_const: bool,
    pub lvalue: bool,
}

impl<'a> ArgShape<'a> {
    /// Shape of `declval<A>()`.
    pub const fn of(arg: &'a TypeInfo, predicate: Predicate) -> Result<Self, QueryError> {
        if !passable(arg) {
            return Err(QueryError::IllFormed { predicate, kind: arg.kind });
        }
        Ok(match (arg.kind, arg.referent) {
            (Kind::LvalueRef, Some(inner)) => ArgShape { base: inner, is_const: inner.is_const, lvalue: true },
            (Kind::RvalueRef, Some(inner)) => ArgShape { base: inner, is_const: inner.is_const, lvalue: false },
            _ => ArgShape { base: arg, is_const: arg.is_const, lvalue: false },
        })
    }
}

/// Whether `declval<A>()` is usable as a constructor argument.
const fn passable(arg: &TypeInfo) -> bool {
    match (arg.kind, arg.referent) {
        (Kind::Function, _) => false,
        (Kind::Incomplete, _) => arg.is_const,
        (Kind::RvalueRef, Some(inner)) => passable(inner),
        _ => true,
    }
}

/// Construct `target` from an argument of the given shape.
pub const fn construct(target: &TypeInfo, arg: ArgShape<'_>, predicate: Predicate) -> Result<Construct, QueryError> {
    match (target.kind, target.referent) {
        (Kind::Function | Kind::Incomplete, _) => Err(QueryError::IllFormed { predicate, kind: target.kind }),
        (Kind::Void, _) => Ok(Construct::NEVER),
        (Kind::LvalueRef, Some(referee)) => {
            if !arg.base.same_unqualified(referee) {
                return Err(QueryError::UnrelatedArgument { predicate });
            }
            Ok(Construct::uniform(referee.is_const || (arg.lvalue && !arg.is_const)))
        }
        (Kind::RvalueRef, Some(referee)) => {
            if !arg.base.same_unqualified(referee) {
                return Err(QueryError::UnrelatedArgument { predicate });
            }
            Ok(Construct::uniform(!arg.lvalue && (referee.is_const || !arg.is_const)))
        }
        _ => {
            if !arg.base.same_unqualified(target) {
                return Err(QueryError::UnrelatedArgument { predicate });
            }
            let members = target.members;
            let ctor = if arg.lvalue || arg.is_const {
                members.copy_ctor
            } else {
                members.move_ctor.or(members.copy_ctor)
            };
            Ok(Construct::object(!target.is_abstract, ctor, members.dtor))
        }
    }
}

/// `is_*_move_constructible`, read straight off the record.
pub const fn move_construct(ty: &TypeInfo, predicate: Predicate) -> Result<Construct, QueryError> {
    match ty.kind {
        Kind::Function | Kind::Incomplete => Err(QueryError::IllFormed { predicate, kind: ty.kind }),
        Kind::Void => Ok(Construct::NEVER),
        Kind::LvalueRef | Kind::RvalueRef => Ok(Construct::ALWAYS),
        _ => {
            let m = ty.members;
            let ctor = if ty.is_const { m.copy_ctor } else { m.move_ctor.or(m.copy_ctor) };
            Ok(Construct::object(!ty.is_abstract, ctor, m.dtor))
        }
    }
}

/// `is_*_copy_constructible`, read straight off the record.
pub const fn copy_construct(ty: &TypeInfo, predicate: Predicate) -> Result<Construct, QueryError> {
    match ty.kind {
        Kind::Function | Kind::Incomplete => Err(QueryError::IllFormed { predicate, kind: ty.kind }),
        Kind::Void | Kind::RvalueRef => Ok(Construct::NEVER),
        Kind::LvalueRef => Ok(Construct::ALWAYS),
        _ => Ok(Construct::object(!ty.is_abstract, ty.members.copy_ctor, ty.members.dtor)),
    }
}

/// `is_*_destructible`, read straight off the record.
pub const fn destroy(ty: &TypeInfo, predicate: Predicate) -> Result<Construct, QueryError> {
    match ty.kind {
        Kind::Function | Kind::Incomplete => Err(QueryError::IllFormed { predicate, kind: ty.kind }),
        Kind::Void => Ok(Construct::NEVER),
        Kind::LvalueRef | Kind::RvalueRef => Ok(Construct::ALWAYS),
        _ => {
            let dtor = ty.members.dtor;
            Ok(Construct { constructible: dtor.callable(), nothrow: dtor.nothrow(), trivial: dtor.trivial() })
        }
    }
}

/// Evaluate `predicate` for `ty` (and `arg`, for binary predicates).
pub const fn eval(predicate: Predicate, ty: &TypeInfo, arg: Option<&TypeInfo>) -> Result<bool, QueryError> {
    match (predicate.is_binary(), arg) {
        (true, None) => return Err(QueryError::Arity { predicate, expected: 2, found: 1 }),
        (false, Some(_)) => return Err(QueryError::Arity { predicate, expected: 1, found: 2 }),
        _ => {}
    }
    let kind = ty.kind;
    let answer = match predicate {
        Predicate::IsConst => ty.is_const,
        Predicate::IsVoid => matches!(kind, Kind::Void),
        Predicate::IsReference => kind.is_reference(),
        Predicate::IsLvalueReference => matches!(kind, Kind::LvalueRef),
        Predicate::IsRvalueReference => matches!(kind, Kind::RvalueRef),
        Predicate::IsPointer => matches!(kind, Kind::Pointer),
        Predicate::IsFunction => matches!(kind, Kind::Function),
        Predicate::IsAbstract | Predicate::IsFinal => {
            if matches!(kind, Kind::Incomplete) {
                return Err(QueryError::IllFormed { predicate, kind });
            }
            let flag = if matches!(predicate, Predicate::IsAbstract) { ty.is_abstract } else { ty.is_final };
            kind.is_object() && flag
        }

        Predicate::IsMoveConstructible => try_construct!(move_construct(ty, predicate)).constructible,
        Predicate::IsNothrowMoveConstructible => try_construct!(move_construct(ty, predicate)).nothrow,
        Predicate::IsTriviallyMoveConstructible => try_construct!(move_construct(ty, predicate)).trivial,
        Predicate::IsCopyConstructible => try_construct!(copy_construct(ty, predicate)).constructible,
        Predicate::IsNothrowCopyConstructible => try_construct!(copy_construct(ty, predicate)).nothrow,
        Predicate::IsTriviallyCopyConstructible => try_construct!(copy_construct(ty, predicate)).trivial,
        Predicate::IsDestructible => try_construct!(destroy(ty, predicate)).constructible,
        Predicate::IsNothrowDestructible => try_construct!(destroy(ty, predicate)).nothrow,
        Predicate::IsTriviallyDestructible => try_construct!(destroy(ty, predicate)).trivial,

        Predicate::IsConstructible | Predicate::IsNothrowConstructible | Predicate::IsTriviallyConstructible => {
            let Some(arg) = arg else {
                return Err(QueryError::Arity { predicate, expected: 2, found: 1 });
            };
            let shape = try_construct!(ArgShape::of(arg, predicate));
            let outcome = try_construct!(construct(ty, shape, predicate));
            match predicate {
                Predicate::IsNothrowConstructible => outcome.nothrow,
                Predicate::IsTriviallyConstructible => outcome.trivial,
                _ => outcome.constructible,
            }
        }
    };
    Ok(answer)
}

/// Unwrap an answer during constant evaluation, turning errors into compile errors.
pub const fn expect(result: Result<bool, QueryError>) -> bool {
    match result {
        Ok(value) => value,
        Err(QueryError::IllFormed { .. }) => {
            panic!("trait query is ill-formed: function and incomplete types have no constructors or destructor")
        }
        Err(QueryError::UnrelatedArgument { .. }) => {
            panic!("trait query is ill-formed: construction is only modelled from the same type")
        }
        Err(QueryError::Arity { .. }) => panic!("trait query has the wrong number of type arguments"),
        Err(QueryError::UnknownPredicate) => panic!("unknown trait predicate"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Members;

    const WIDGET: TypeInfo = TypeInfo::class(
        "tests::Widget",
        Members::new(Member::Throwing, Member::Undeclared, Member::Nothrow),
    );
    const CONST_WIDGET: TypeInfo = WIDGET.qualified();
    const WIDGET_REF: TypeInfo = TypeInfo::lvalue_ref(&WIDGET);
    const SHAPE: TypeInfo = TypeInfo::class("tests::Shape", Members::TRIVIAL).abstract_if(true);
    const FUNC: TypeInfo = TypeInfo::function("fn");

    fn ask(p: Predicate, ty: &TypeInfo) -> Result<bool, QueryError> {
        eval(p, ty, None)
    }

    #[test]
    fn test_undeclared_move_uses_copy() {
        assert_eq!(ask(Predicate::IsMoveConstructible, &WIDGET), Ok(true));
        assert_eq!(ask(Predicate::IsNothrowMoveConstructible, &WIDGET), Ok(false));
        assert_eq!(ask(Predicate::IsNothrowDestructible, &WIDGET), Ok(true));
    }

    #[test]
    fn test_abstract_is_never_constructible() {
        assert_eq!(ask(Predicate::IsCopyConstructible, &SHAPE), Ok(false));
        assert_eq!(ask(Predicate::IsTriviallyDestructible, &SHAPE), Ok(true));
        assert_eq!(ask(Predicate::IsAbstract, &SHAPE), Ok(true));
    }

    #[test]
    fn test_binary_construction() {
        let from = |arg: &TypeInfo| eval(Predicate::IsConstructible, &WIDGET, Some(arg));
        assert_eq!(from(&CONST_WIDGET), Ok(true));
        assert_eq!(from(&WIDGET_REF), Ok(true));
        assert_eq!(
            eval(Predicate::IsConstructible, &WIDGET, Some(&SHAPE)),
            Err(QueryError::UnrelatedArgument { predicate: Predicate::IsConstructible })
        );
        assert_eq!(
            eval(Predicate::IsConstructible, &WIDGET_REF, Some(&CONST_WIDGET)),
            Ok(false)
        );
    }

    #[test]
    fn test_functions_only_answer_shape_queries() {
        assert_eq!(ask(Predicate::IsFunction, &FUNC), Ok(true));
        assert_eq!(ask(Predicate::IsConst, &FUNC), Ok(false));
        assert_eq!(ask(Predicate::IsAbstract, &FUNC), Ok(false));
        assert!(matches!(
            ask(Predicate::IsNothrowMoveConstructible, &FUNC),
            Err(QueryError::IllFormed { kind: Kind::Function, .. })
        ));
    }

    #[test]
    fn test_arity_is_checked() {
        assert!(matches!(ask(Predicate::IsConstructible, &WIDGET), Err(QueryError::Arity { .. })));
        assert!(matches!(
            eval(Predicate::IsConst, &WIDGET, Some(&WIDGET)),
            Err(QueryError::Arity { expected: 1, .. })
        ));
    }
}
