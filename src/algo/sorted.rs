//! Sortedness checks.

use core::borrow::Borrow;

use crate::iter::ForwardIter;

/// First position where the range stops being sorted under `comp`, or `last`.
pub fn is_sorted_until_by<I, C>(first: I, last: I, mut comp: C) -> I
where
    I: ForwardIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    if first == last {
        return last;
    }
    let mut prev = first.clone();
    let mut cur = first;
    cur.inc();
    while cur != last {
        if comp(cur.get().borrow(), prev.get().borrow()) {
            return cur;
        }
        prev = cur.clone();
        cur.inc();
    }
    last
}

pub fn is_sorted_by<I, C>(first: I, last: I, comp: C) -> bool
where
    I: ForwardIter,
    C: FnMut(&I::Value, &I::Value) -> bool,
{
    is_sorted_until_by(first, last.clone(), comp) == last
}

/// Non-decreasing under `<`.
pub fn is_sorted<I>(first: I, last: I) -> bool
where
    I: ForwardIter,
    I::Value: PartialOrd,
{
    is_sorted_by(first, last, |a, b| a < b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::Ptr;
    use crate::iter::archetypes::Forward;

    #[test]
    fn test_sorted_ranges() {
        let up = [1, 2, 2, 5];
        let (first, last) = Ptr::range(&up);
        assert!(is_sorted(first, last));
        assert!(!is_sorted_by(first, last, |a, b| a > b));
        let empty: [i32; 0] = [];
        assert!(is_sorted(Forward::new(Ptr::begin(&empty)), Forward::new(Ptr::end(&empty))));
    }

    #[test]
    fn test_until_points_at_first_descent() {
        let data = [1, 3, 2, 4];
        let (first, last) = Ptr::range(&data);
        assert_eq!(is_sorted_until_by(first, last, |a, b| a < b).position(), 2);
    }
}
