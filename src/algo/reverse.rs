use crate::iter::{BidirectionalIter, SwapIter};

/// Reverse `[first, last)` in place.
pub fn reverse<I: BidirectionalIter + SwapIter>(mut first: I, mut last: I) {
    while first != last {
        last.dec();
        if first == last {
            return;
        }
        first.swap_with(&last);
        first.inc();
    }
}
