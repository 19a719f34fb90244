//! Linear searches over input ranges.

use core::borrow::Borrow;

use crate::iter::InputIter;

/// First position in `[first, last)` holding `value`, or `last`.
pub fn find<I>(first: I, last: I, value: &I::Value) -> I
where
    I: InputIter,
    I::Value: PartialEq,
{
    find_if(first, last, |v| v == value)
}

pub fn find_if<I, P>(mut first: I, last: I, mut pred: P) -> I
where
    I: InputIter,
    P: FnMut(&I::Value) -> bool,
{
    while first != last {
        if pred(first.get().borrow()) {
            return first;
        }
        first.inc();
    }
    last
}

/// Whether `[first1, last1)` equals the range of the same length at `first2`.
pub fn equal<I1, I2>(mut first1: I1, last1: I1, mut first2: I2) -> bool
where
    I1: InputIter,
    I2: InputIter,
    I1::Value: PartialEq<I2::Value>,
{
    while first1 != last1 {
        if first1.get().borrow() != first2.get().borrow() {
            return false;
        }
        first1.inc();
        first2.inc();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::Ptr;
    use crate::iter::archetypes::Input;

    #[test]
    fn test_find_on_single_pass_input() {
        let data = [4, 8, 15, 16];
        let hit = find(Input::new(Ptr::begin(&data)), Input::new(Ptr::end(&data)), &15);
        assert_eq!(hit.into_inner().position(), 2);
        let miss = find(Input::new(Ptr::begin(&data)), Input::new(Ptr::end(&data)), &42);
        assert_eq!(miss.into_inner().position(), 4);
    }

    #[test]
    fn test_equal() {
        let a = [1, 2, 3];
        let b = [1, 2, 3, 4];
        assert!(equal(Ptr::begin(&a), Ptr::end(&a), Ptr::begin(&b)));
        assert!(!equal(Ptr::begin(&b[1..]), Ptr::end(&b[1..]), Ptr::begin(&a)));
    }
}
