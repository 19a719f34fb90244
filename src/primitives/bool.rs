//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.
//!
//! Every portable trait answer is one of these two types, so answers can be
//! combined (`And`, `Or`, `Not`) and used to pick implementations (`If`)
//! without ever materializing a runtime `bool`.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// `A && B`
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B`
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A`
pub type Not<A> = <A as Bool>::Not;

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Type-level bool for a const bool literal.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<C, T, E> = <C as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert!(<And<True, True> as Bool>::VALUE);
        assert!(!<And<True, False> as Bool>::VALUE);
        assert!(<Or<False, True> as Bool>::VALUE);
        assert!(!<Or<False, False> as Bool>::VALUE);
        assert!(<Not<False> as Bool>::VALUE);
        assert!(<BoolOf<true> as Bool>::VALUE);
        assert!(!<BoolOf<false> as Bool>::VALUE);
    }

    #[test]
    fn test_if_selects_types() {
        let picked: If<True, u8, u16> = 7u8;
        assert_eq!(core::mem::size_of_val(&picked), 1);
        let picked: If<False, u8, u16> = 7u16;
        assert_eq!(core::mem::size_of_val(&picked), 2);
    }
}
