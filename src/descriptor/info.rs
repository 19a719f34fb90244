//! Value-level type records.
//!
//! A [`TypeInfo`] is the constant a descriptor carries next to its
//! type-level answers. The builtin backend and the analysis pass only ever
//! look at these records, so everything they need lives here as plain
//! `const`-constructible data.

use core::fmt;

use crate::primitives::const_utils::{short_name, str_eq};

/// Broad classification of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Void,
    Scalar,
    Class,
    Pointer,
    LvalueRef,
    RvalueRef,
    Function,
    Incomplete,
}

impl Kind {
    pub const fn is_reference(self) -> bool {
        matches!(self, Kind::LvalueRef | Kind::RvalueRef)
    }

    /// Object types: anything a variable can hold by value.
    pub const fn is_object(self) -> bool {
        matches!(self, Kind::Scalar | Kind::Class | Kind::Pointer)
    }

    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// How a special member (copy, move, destructor) behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Member {
    /// Equivalent to a raw memory copy (or no-op for destructors).
    Trivial,
    /// User-provided, never signals failure.
    Nothrow,
    /// User-provided, may signal failure.
    Throwing,
    /// Explicitly deleted: participates in overload resolution and fails it.
    Deleted,
    /// Not declared at all. A move falls back to the copy constructor.
    Undeclared,
}

impl Member {
    pub const fn callable(self) -> bool {
        matches!(self, Member::Trivial | Member::Nothrow | Member::Throwing)
    }

    pub const fn nothrow(self) -> bool {
        matches!(self, Member::Trivial | Member::Nothrow)
    }

    pub const fn trivial(self) -> bool {
        matches!(self, Member::Trivial)
    }

    /// Resolve an undeclared member to `fallback`.
    pub const fn or(self, fallback: Member) -> Member {
        match self {
            Member::Undeclared => fallback,
            other => other,
        }
    }
}

/// Special members of an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Members {
    pub copy_ctor: Member,
    pub move_ctor: Member,
    pub dtor: Member,
}

impl Members {
    pub const TRIVIAL: Members = Members::new(Member::Trivial, Member::Trivial, Member::Trivial);
    pub const NONE: Members = Members::new(Member::Deleted, Member::Deleted, Member::Deleted);

    pub const fn new(copy_ctor: Member, move_ctor: Member, dtor: Member) -> Self {
        Self { copy_ctor, move_ctor, dtor }
    }
}

/// Compile-time record describing one type.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    /// Fully qualified name of the base type (forms reuse their referent's).
    pub name: &'static str,
    pub kind: Kind,
    pub is_const: bool,
    /// Pointee for pointers, referee for references.
    pub referent: Option<&'static TypeInfo>,
    /// Generic arguments of the base type.
    pub args: &'static [&'static TypeInfo],
    pub members: Members,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl TypeInfo {
    pub const VOID: TypeInfo = TypeInfo::leaf("void", Kind::Void, Members::NONE);

    const fn leaf(name: &'static str, kind: Kind, members: Members) -> Self {
        Self {
            name,
            kind,
            is_const: false,
            referent: None,
            args: &[],
            members,
            is_abstract: false,
            is_final: false,
        }
    }

    pub const fn scalar(name: &'static str) -> Self {
        Self::leaf(name, Kind::Scalar, Members::TRIVIAL)
    }

    pub const fn class(name: &'static str, members: Members) -> Self {
        Self::leaf(name, Kind::Class, members)
    }

    pub const fn function(name: &'static str) -> Self {
        Self::leaf(name, Kind::Function, Members::NONE)
    }

    pub const fn incomplete(name: &'static str) -> Self {
        Self::leaf(name, Kind::Incomplete, Members::NONE)
    }

    pub const fn pointer(pointee: &'static TypeInfo) -> Self {
        Self {
            referent: Some(pointee),
            ..Self::leaf("*", Kind::Pointer, Members::TRIVIAL)
        }
    }

    pub const fn lvalue_ref(referee: &'static TypeInfo) -> Self {
        Self {
            referent: Some(referee),
            ..Self::leaf("&", Kind::LvalueRef, Members::TRIVIAL)
        }
    }

    pub const fn rvalue_ref(referee: &'static TypeInfo) -> Self {
        Self {
            referent: Some(referee),
            ..Self::leaf("&&", Kind::RvalueRef, Members::TRIVIAL)
        }
    }

    /// `const`-qualify. References and functions ignore the qualifier.
    pub const fn qualified(self) -> Self {
        if self.kind.is_reference() || matches!(self.kind, Kind::Function) {
            return self;
        }
        Self { is_const: true, ..self }
    }

    pub const fn with_args(self, args: &'static [&'static TypeInfo]) -> Self {
        Self { args, ..self }
    }

    pub const fn abstract_if(self, is_abstract: bool) -> Self {
        Self { is_abstract, ..self }
    }

    pub const fn final_if(self, is_final: bool) -> Self {
        Self { is_final, ..self }
    }

    /// Structural identity: same kind, qualifiers, name, referent and arguments.
    pub const fn same_type(&self, other: &TypeInfo) -> bool {
        if self.kind.code() != other.kind.code() || self.is_const != other.is_const {
            return false;
        }
        if !str_eq(self.name, other.name) {
            return false;
        }
        match (self.referent, other.referent) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                if !a.same_type(b) {
                    return false;
                }
            }
            _ => return false,
        }
        if self.args.len() != other.args.len() {
            return false;
        }
        let mut i = 0;
        while i < self.args.len() {
            if !self.args[i].same_type(other.args[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Same type once top-level `const` is ignored.
    pub const fn same_unqualified(&self, other: &TypeInfo) -> bool {
        let mut a = *self;
        let mut b = *other;
        a.is_const = false;
        b.is_const = false;
        a.same_type(&b)
    }

    /// The referee for references, `self` otherwise.
    pub const fn without_reference(&self) -> &TypeInfo {
        match (self.kind.is_reference(), self.referent) {
            (true, Some(inner)) => inner,
            _ => self,
        }
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other)
    }
}

impl Eq for TypeInfo {}

impl TypeInfo {
    /// Spelling with full paths. Distinct types never share one, so it can
    /// serve as a key.
    pub const fn path(&self) -> Spelling<'_> {
        Spelling { info: self, full: true }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Spelling { info: self, full: false }, f)
    }
}

/// A [`TypeInfo`] rendered with short or full names.
#[derive(Debug, Clone, Copy)]
pub struct Spelling<'a> {
    info: &'a TypeInfo,
    full: bool,
}

impl Spelling<'_> {
    const fn of<'b>(&self, info: &'b TypeInfo) -> Spelling<'b> {
        Spelling { info, full: self.full }
    }

    fn list(&self, f: &mut fmt::Formatter<'_>, items: &[&TypeInfo]) -> fmt::Result {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&self.of(item), f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Spelling<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        match (info.kind, info.referent) {
            (Kind::LvalueRef, Some(inner)) => write!(f, "{}&", self.of(inner)),
            (Kind::RvalueRef, Some(inner)) => write!(f, "{}&&", self.of(inner)),
            (Kind::Pointer, Some(inner)) => {
                write!(f, "{}*", self.of(inner))?;
                if info.is_const {
                    f.write_str(" const")?;
                }
                Ok(())
            }
            // Return type, then parameters: `R(A, B)`.
            (Kind::Function, _) if !info.args.is_empty() => {
                write!(f, "{}(", self.of(info.args[0]))?;
                self.list(f, &info.args[1..])?;
                f.write_str(")")
            }
            _ => {
                if info.is_const {
                    f.write_str("const ")?;
                }
                f.write_str(if self.full { info.name } else { short_name(info.name) })?;
                if !info.args.is_empty() {
                    f.write_str("<")?;
                    self.list(f, info.args)?;
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}
