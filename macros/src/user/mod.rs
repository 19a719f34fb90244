//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Describe)]` | on struct/enum | Type descriptor with special-member kinds |
//! | `query!` | function macro | Boolean expression over trait predicates |

pub mod describe;
pub mod query;

pub use describe::expand_derive_describe;
pub use query::expand_query;
