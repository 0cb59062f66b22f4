//! Lowercase hex rendering, two characters per byte with the high nibble first.

use arrayvec::ArrayString;

const TABLE: &[u8; 16] = b"0123456789abcdef";

/// The two hex characters for one byte.
#[inline]
pub fn byte_chars(b: u8) -> [char; 2] {
    [
        TABLE[(b >> 4) as usize] as char,
        TABLE[(b & 0xf) as usize] as char,
    ]
}

/// Append the hex of `bytes` to a fixed-capacity string.
///
/// Panics if `s` doesn't have room for `2 * bytes.len()` more characters.
pub fn push_all<const CAP: usize>(s: &mut ArrayString<CAP>, bytes: &[u8]) {
    for &b in bytes {
        let [hi, lo] = byte_chars(b);
        s.push(hi);
        s.push(lo);
    }
}
