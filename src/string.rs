//! Character traits and a NUL-terminated string.
//!
//! [`BasicString`] always stores a terminator after its last character, so
//! `s[s.len()]` is valid and reads `C::NUL`. Indexing further than that is a
//! precondition violation routed to [`debug::fail`] when checks are enabled.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;

use derive_more::{Display, Error};

use crate::debug::{self, CheckFailure};
use crate::iter::Ptr;

/// Operations on one character type.
pub trait CharTraits: Copy + Ord + 'static {
    /// Integer type wide enough for every character plus `eof`.
    type Int: Copy + Eq + fmt::Debug;

    const NUL: Self;

    fn to_char_type(i: Self::Int) -> Self;
    fn to_int_type(c: Self) -> Self::Int;
    fn eof() -> Self::Int;

    fn eq_int_type(a: Self::Int, b: Self::Int) -> bool {
        a == b
    }

    /// `i`, or some value other than `eof` if `i` is `eof`.
    fn not_eof(i: Self::Int) -> Self::Int {
        if Self::eq_int_type(i, Self::eof()) {
            Self::to_int_type(Self::NUL)
        } else {
            i
        }
    }

    /// Characters before the first `NUL`.
    fn length(s: &[Self]) -> usize {
        s.iter().position(|&c| c == Self::NUL).unwrap_or(s.len())
    }

    /// Lexicographic comparison of the first `n` characters.
    fn compare(a: &[Self], b: &[Self], n: usize) -> Ordering {
        a[..n].cmp(&b[..n])
    }
}

macro_rules! char_traits {
    ($($c:ty => $int:ty, eof: $eof:expr;)*) => {
        $(
            impl CharTraits for $c {
                type Int = $int;
                const NUL: Self = 0;

                #[inline]
                fn to_char_type(i: $int) -> Self {
                    i as $c
                }

                #[inline]
                fn to_int_type(c: Self) -> $int {
                    c as $int
                }

                #[inline]
                fn eof() -> $int {
                    $eof
                }
            }
        )*
    };
}

char_traits! {
    u8 => i32, eof: -1;
    u16 => u32, eof: 0xFFFF;
    u32 => u32, eof: u32::MAX;
}

impl CharTraits for char {
    type Int = u32;
    const NUL: Self = '\0';

    /// Values that are not Unicode scalar values map to U+FFFD.
    fn to_char_type(i: u32) -> Self {
        char::from_u32(i).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn to_int_type(c: Self) -> u32 {
        c as u32
    }

    fn eof() -> u32 {
        u32::MAX
    }
}

/// `at` past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("position {pos} out of range for string of length {len}")]
pub struct OutOfRange {
    pub pos: usize,
    pub len: usize,
}

/// A growable string of `C` with a trailing terminator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasicString<C: CharTraits> {
    /// Characters followed by exactly one `C::NUL`.
    data: Vec<C>,
}

pub type ByteString = BasicString<u8>;
pub type U16String = BasicString<u16>;
pub type U32String = BasicString<u32>;

impl<C: CharTraits> BasicString<C> {
    pub fn new() -> Self {
        Self { data: alloc::vec![C::NUL] }
    }

    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Characters without the terminator.
    pub fn as_slice(&self) -> &[C] {
        &self.data[..self.len()]
    }

    pub fn as_slice_with_nul(&self) -> &[C] {
        &self.data
    }

    pub fn begin(&self) -> Ptr<'_, C> {
        Ptr::begin(self.as_slice())
    }

    pub fn end(&self) -> Ptr<'_, C> {
        Ptr::end(self.as_slice())
    }

    pub fn at(&self, pos: usize) -> Result<&C, OutOfRange> {
        self.as_slice().get(pos).ok_or(OutOfRange { pos, len: self.len() })
    }

    #[track_caller]
    pub fn front(&self) -> &C {
        debug::check(!self.is_empty(), || CheckFailure::Index { index: 0, len: 0 });
        &self.data[0]
    }

    #[track_caller]
    pub fn back(&self) -> &C {
        let len = self.len();
        debug::check(len > 0, || CheckFailure::Index { index: 0, len: 0 });
        &self.data[len.saturating_sub(1)]
    }

    pub fn push(&mut self, c: C) {
        let len = self.len();
        self.data.insert(len, c);
    }

    pub fn pop(&mut self) -> Option<C> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        Some(self.data.remove(len - 1))
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.data.push(C::NUL);
    }
}

impl<C: CharTraits> Default for BasicString<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharTraits> From<&[C]> for BasicString<C> {
    /// Copies up to the first `NUL` in `chars`.
    fn from(chars: &[C]) -> Self {
        let mut data = Vec::with_capacity(chars.len() + 1);
        data.extend_from_slice(&chars[..C::length(chars)]);
        data.push(C::NUL);
        Self { data }
    }
}

impl From<&str> for BasicString<u8> {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<&str> for BasicString<char> {
    fn from(s: &str) -> Self {
        let mut out = Self::new();
        s.chars().take_while(|&c| c != '\0').for_each(|c| out.push(c));
        out
    }
}

impl<C: CharTraits> Index<usize> for BasicString<C> {
    type Output = C;

    /// `pos == len()` reads the terminator.
    #[track_caller]
    fn index(&self, pos: usize) -> &C {
        let len = self.len();
        if pos > len {
            debug::check(false, || CheckFailure::Index { index: pos, len });
            return &self.data[len];
        }
        &self.data[pos]
    }
}

impl<C: CharTraits + fmt::Debug> fmt::Debug for BasicString<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::equal;

    #[test]
    fn test_char_traits_round_trip() {
        assert_eq!(<u8 as CharTraits>::to_int_type(b'a'), 97);
        assert_eq!(<u8 as CharTraits>::to_char_type(65), b'A');
        assert_eq!(<u32 as CharTraits>::to_int_type(0x1F600), 0x1F600);
        assert_eq!(<char as CharTraits>::to_char_type(0xD800), '\u{FFFD}');
        assert!(<u16 as CharTraits>::eq_int_type(<u16 as CharTraits>::eof(), 0xFFFF));
        assert!(!<u8 as CharTraits>::eq_int_type(<u8 as CharTraits>::not_eof(-1), -1));
    }

    #[test]
    fn test_eof_is_not_a_character() {
        for c in 0..=u8::MAX {
            assert!(!<u8 as CharTraits>::eq_int_type(<u8 as CharTraits>::to_int_type(c), <u8 as CharTraits>::eof()));
        }
    }

    #[test]
    fn test_terminator_is_readable() {
        let s = ByteString::from("hi");
        assert_eq!(s.len(), 2);
        assert_eq!(s[2], 0);
        assert_eq!(s.as_slice_with_nul(), b"hi\0");
        assert_eq!(ByteString::new()[0], 0);
    }

    #[test]
    fn test_at_reports_out_of_range() {
        let s = ByteString::from("abc");
        assert_eq!(s.at(1), Ok(&b'b'));
        assert_eq!(s.at(3), Err(OutOfRange { pos: 3, len: 3 }));
    }

    #[test]
    fn test_push_pop_keep_terminator() {
        let mut s = BasicString::<char>::from("ab");
        s.push('c');
        assert_eq!(s.pop(), Some('c'));
        assert_eq!(*s.back(), 'b');
        assert_eq!(s[s.len()], '\0');
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_iterators_cover_the_characters() {
        let s = ByteString::from(&b"xyz\0ignored"[..]);
        assert_eq!(s.len(), 3);
        assert!(equal(s.begin(), s.end(), Ptr::begin(b"xyz")));
    }

    #[test]
    fn test_compare() {
        assert_eq!(<u8 as CharTraits>::compare(b"abc", b"abd", 2), Ordering::Equal);
        assert_eq!(<u8 as CharTraits>::compare(b"abc", b"abd", 3), Ordering::Less);
    }
}
