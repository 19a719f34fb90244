//! The designated failure path for container and iterator preconditions.
//!
//! Checks are on in builds with debug assertions or the `debug-checks`
//! feature. Tests that need them are gated the same way.

use tola_traits::algo::advance;
use tola_traits::debug::{self, CheckFailure};
use tola_traits::iter::archetypes::Forward;
use tola_traits::algo::copy;
use tola_traits::iter::{InputIter, Ptr, PtrMut, RandomAccessIter};
use tola_traits::string::ByteString;
use tola_traits::Config;

// ============================================================================
// STRING INDEXING
// ============================================================================

#[test]
#[cfg(any(feature = "debug-checks", debug_assertions))]
#[should_panic(expected = "index 1 out of range for length 0")]
fn test_empty_string_index_past_terminator_fails() {
    let s = ByteString::new();
    let _byte = s[1];
}

#[test]
#[cfg(not(any(feature = "debug-checks", debug_assertions)))]
fn test_empty_string_index_past_terminator_reads_terminator_unchecked() {
    let s = ByteString::new();
    assert_eq!(s[1], 0);
}

#[test]
fn test_terminator_is_always_readable() {
    let s = ByteString::new();
    assert_eq!(s[0], 0);
    let s = ByteString::from("ab");
    assert_eq!((s[0], s[1], s[2]), (b'a', b'b', 0));
}

#[test]
fn test_checked_access_reports_without_panicking() {
    let s = ByteString::new();
    let err = s.at(0).unwrap_err();
    assert_eq!(err.to_string(), "position 0 out of range for string of length 0");
}

// ============================================================================
// ITERATORS
// ============================================================================

#[test]
#[should_panic(expected = "dereferenced iterator at 2 of a range of length 2")]
fn test_dereferencing_end_fails() {
    let data = [1, 2];
    let _ = Ptr::end(&data).get();
}

#[test]
#[should_panic(expected = "negative advance")]
fn test_negative_advance_on_forward_fails() {
    let data = [1, 2, 3];
    let mut it = Forward::new(Ptr::end(&data));
    advance(&mut it, -1);
}

#[test]
#[should_panic(expected = "outside a range of length 3")]
fn test_moving_before_begin_fails() {
    let data = [1, 2, 3];
    let mut it = Ptr::begin(&data);
    advance(&mut it, -1);
}

#[test]
#[should_panic(expected = "iterator moved to 9223372036854775807, outside a range of length 3")]
fn test_jump_overflowing_isize_fails() {
    let data = [1, 2, 3];
    let mut it = Ptr::end(&data);
    it.jump(isize::MAX);
}

#[test]
#[should_panic(expected = "outside a range of length 2")]
fn test_jump_to_isize_min_fails() {
    let data = [1, 2];
    let mut it = Ptr::begin(&data);
    it.jump(isize::MIN);
}

#[test]
#[cfg(any(feature = "debug-checks", debug_assertions))]
#[should_panic(expected = "compared iterators from different ranges")]
fn test_comparing_foreign_iterators_fails() {
    let (a, b) = ([1, 2], [1, 2]);
    let _ = Ptr::begin(&a) == Ptr::begin(&b);
}

#[test]
#[cfg(any(feature = "debug-checks", debug_assertions))]
#[should_panic(expected = "range is not a heap")]
fn test_sort_heap_requires_a_heap() {
    let mut data = [1, 2, 3, 4];
    let (first, last) = tola_traits::iter::PtrMut::range(&mut data);
    tola_traits::algo::sort_heap(first, last);
}

// ============================================================================
// BULK COPY BOUNDS
// ============================================================================

// Without checks an out-of-range `last` reaches `copy` unnoticed. The bulk
// path bounds the read by the source block regardless.

#[test]
#[cfg(not(any(feature = "debug-checks", debug_assertions)))]
#[should_panic(expected = "source holds 3 elements from its position, copy needs 8")]
fn test_bulk_copy_past_the_end_fails_unchecked() {
    let big = [1, 2, 3, 4, 5, 6, 7, 8];
    let src = &big[..3];
    let mut last = Ptr::end(src);
    last.jump(5);
    let mut dst = [0; 8];
    let (out, _) = PtrMut::range(&mut dst);
    copy(Ptr::begin(src), last, out);
}

#[test]
#[cfg(not(any(feature = "debug-checks", debug_assertions)))]
#[should_panic(expected = "source holds 2 elements from its position, copy needs 8")]
fn test_bulk_copy_with_foreign_last_fails_unchecked() {
    let (small, big) = ([1, 2], [0; 8]);
    let mut dst = [0; 8];
    let (out, _) = PtrMut::range(&mut dst);
    copy(Ptr::begin(&small), Ptr::end(&big), out);
}

#[test]
fn test_bulk_copy_from_mid_range() {
    let src = [1, 2, 3, 4, 5];
    let mut first = Ptr::begin(&src);
    first.jump(2);
    let mut dst = [0; 3];
    let (out, _) = PtrMut::range(&mut dst);
    copy(first, Ptr::end(&src), out);
    assert_eq!(dst, [3, 4, 5]);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_build_config_matches_the_check_switch() {
    assert_eq!(debug::enabled(), Config::BUILD.debug_checks);
    assert_eq!(debug::enabled(), cfg!(any(feature = "debug-checks", debug_assertions)));
}

#[test]
fn test_failure_messages() {
    assert_eq!(CheckFailure::Index { index: 1, len: 0 }.to_string(), "index 1 out of range for length 0");
    assert_eq!(CheckFailure::InvertedRange.to_string(), "last precedes first");
    assert_eq!(
        CheckFailure::SourceOverrun { needed: 4, available: 1 }.to_string(),
        "source holds 1 elements from its position, copy needs 4"
    );
}
