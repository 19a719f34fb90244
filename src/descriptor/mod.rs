//! # Layer 1: Type Descriptors
//!
//! Every type the trait system reasons about is represented twice:
//!
//! ```text
//! Describe::INFO     -> TypeInfo record     (builtin backend, analysis)
//! Describe::Is*/Add* -> type-level answers  (portable backend)
//! Object::*Ctor      -> MemberKind types    (portable constructibility)
//! ```
//!
//! The two views are produced by the same impl, which is what lets the
//! differential check compare backends meaningfully.

pub mod describe;
pub mod forms;
pub mod info;
pub mod member;
mod std_types;

pub use describe::{
    AddConst, AddLvalueReference, AddRvalueReference, Arg, Describe, Interned, Object,
    Qualifiable, RemoveConst, RemoveCvRef, RemoveReference,
};
pub use forms::{Const, Func, Incomplete, Pointer, Ref, RvalueRef, Signature, Void};
pub use info::{Kind, Member, Members, Spelling, TypeInfo};
pub use member::MemberKind;
