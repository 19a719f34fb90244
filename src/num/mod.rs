//! Numeric utility types.

mod complex;

pub use complex::Complex;
