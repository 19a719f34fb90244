//! # Layer 3: Iterators
//!
//! The capability lattice, the structural traits behind it, and the
//! iterators the algorithms run on.
//!
//! ```text
//! iter/
//! ├── traits.rs     - InputIter ... ContiguousIter, OutputIter, SwapIter
//! ├── tag.rs        - Capability, tag types, Category dispatch, classify()
//! ├── ptr.rs        - Ptr / PtrMut over slices
//! ├── archetypes.rs - one minimal iterator per level, Counting
//! └── insert.rs     - BackInserter (alloc)
//! ```
//!
//! ```
//! use tola_traits::iter::{Capability, Ptr, classify, satisfies};
//! use tola_traits::iter::archetypes::Forward;
//!
//! assert_eq!(classify::<Ptr<'static, u8>>(), Capability::Contiguous);
//! assert!(satisfies::<Forward<Ptr<'static, u8>>>(Capability::Input));
//! assert!(!satisfies::<Forward<Ptr<'static, u8>>>(Capability::Bidirectional));
//! ```

pub mod archetypes;
#[cfg(feature = "alloc")]
pub mod insert;
pub mod ptr;
pub mod tag;
pub mod traits;

#[cfg(feature = "alloc")]
pub use insert::{BackInserter, back_inserter};
pub use ptr::{Ptr, PtrMut};
pub use tag::{
    BidirectionalTag, Capability, Category, Classified, ContiguousTag, Destination, ForwardTag,
    InputTag, Measure, OutputTag, RandomAccessTag, Tag, classify, satisfies,
};
pub use traits::{
    BidirectionalIter, ContiguousIter, ContiguousOutput, ForwardIter, Incrementable, InputIter,
    OutputIter, RandomAccessIter, SwapIter,
};
