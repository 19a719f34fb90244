//! Const evaluation utilities

/// Compare two strings for equality in a const context
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Strip the leading module path from a `module::path::Name` string.
pub const fn short_name(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut i = bytes.len();
    while i > 0 {
        if bytes[i - 1] == b':' {
            break;
        }
        i -= 1;
    }
    let (_, tail) = bytes.split_at(i);
    match core::str::from_utf8(tail) {
        Ok(s) => s,
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_eq() {
        const SAME: bool = str_eq("tola::Widget", "tola::Widget");
        assert!(SAME);
        assert!(!str_eq("tola::Widget", "tola::Gadget"));
        assert!(!str_eq("a", "ab"));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("crate::model::Widget"), "Widget");
        assert_eq!(short_name("i32"), "i32");
        assert_eq!(short_name(""), "");
    }
}
