//! # Layer 4: Algorithms
//!
//! Generic algorithms written against the iterator traits. Each one states
//! the weakest capability it needs in its bounds; a weaker iterator is a
//! compile error naming the missing operation.
//!
//! | Algorithm | Needs |
//! |-----------|-------|
//! | `find`, `equal` | input |
//! | `is_sorted` | forward |
//! | `reverse` | bidirectional + swap |
//! | heap functions | random access + swap |
//! | `copy` | input into output; contiguous + trivially copyable is one memmove |

mod advance;
mod copy;
mod find;
mod heap;
mod reverse;
mod sorted;

pub use advance::{advance, distance, next, prev};
pub use copy::{CopyPath, CopySelect, copy, is_bulk_copy};
pub use find::{equal, find, find_if};
pub use heap::{
    HeapIter, is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap, make_heap_by,
    pop_heap, pop_heap_by, push_heap, push_heap_by, sort_heap, sort_heap_by,
};
pub use reverse::reverse;
pub use sorted::{is_sorted, is_sorted_by, is_sorted_until_by};
