//! # Layer 2: Type Traits
//!
//! Compile-time predicates over descriptors.
//!
//! ## Module Structure
//!
//! ```text
//! traits/
//! ├── predicates.rs   - marker per predicate, Predicate enum, is_*() helpers
//! ├── portable.rs     - Holds<P> / ConstructFrom<A>: trait-resolution backend
//! ├── builtin.rs      - const fn intrinsics over TypeInfo records
//! ├── backend.rs      - Decide<P, T>, DefaultBackend
//! ├── query.rs        - query_trait(name, records)
//! └── differential.rs - backend agreement checks
//! ```
//!
//! ## Usage
//!
//! ```
//! use tola_traits::descriptor::{Const, Ref};
//! use tola_traits::traits::{is_const, is_nothrow_move_constructible};
//!
//! const A: bool = is_const::<Const<i32>>();
//! const B: bool = is_const::<Ref<Const<i32>>>();
//! assert!(A && !B);
//! assert!(is_nothrow_move_constructible::<i32>());
//! ```
//!
//! Asking a constructibility question about a function type does not
//! compile:
//!
//! ```compile_fail
//! use tola_traits::descriptor::Func;
//! use tola_traits::traits::is_move_constructible;
//!
//! const NOPE: bool = is_move_constructible::<Func<fn(i32)>>();
//! ```

pub mod backend;
pub mod builtin;
pub mod differential;
pub mod portable;
pub mod predicates;
pub mod query;

pub use backend::{Backend, Builtin, Decide, DefaultBackend, Portable};
pub use differential::{Divergence, verify, verify_construct};
pub use portable::{ClassFlags, ConstructFrom, Destroy, Holds};
pub use predicates::*;
pub use query::{QueryError, query_trait};
