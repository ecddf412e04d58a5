//! Key typing and key equality
//!
//! A table is either string-keyed or fixed-width-keyed, chosen once at
//! creation:
//! - [`KeyKind::Str`]: keys are NUL-terminated strings, anything after the
//!   first NUL byte is ignored
//! - [`KeyKind::Fixed`]: keys are blocks of exactly `n` raw bytes, embedded
//!   NUL bytes included

use crate::error::AssocError;
use std::ffi::{CStr, CString};
use std::fmt;
use std::num::NonZeroUsize;

/// How a table interprets and compares key bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// NUL-terminated string keys (keysize 0)
    Str,
    /// Fixed-width binary keys compared byte for byte
    Fixed(NonZeroUsize),
}

impl KeyKind {
    /// Map the integer key size discriminator: 0 means string keys, any
    /// other value means fixed-width keys of that many bytes.
    pub fn from_keysize(keysize: usize) -> Self {
        match NonZeroUsize::new(keysize) {
            Some(n) => KeyKind::Fixed(n),
            None => KeyKind::Str,
        }
    }

    /// Inverse of [`KeyKind::from_keysize`]
    pub fn keysize(&self) -> usize {
        match self {
            KeyKind::Str => 0,
            KeyKind::Fixed(n) => n.get(),
        }
    }

    /// The bytes that take part in equality, or `None` if a fixed-width key
    /// is too short to be compared at all.
    #[inline]
    pub fn compared_bytes<'k>(&self, key: &'k [u8]) -> Option<&'k [u8]> {
        match self {
            KeyKind::Str => Some(until_nul(key)),
            KeyKind::Fixed(n) => key.get(..n.get()),
        }
    }

    /// The bytes fed to the hash functions.
    ///
    /// Hashing always stops at the first NUL byte, whatever the key kind.
    /// Fixed-width keys that only differ after an embedded NUL land on the
    /// same probe sequence and are separated by [`KeyKind::same_key`].
    #[inline]
    pub fn hashed_bytes<'k>(&self, key: &'k [u8]) -> &'k [u8] {
        match self {
            KeyKind::Str => until_nul(key),
            KeyKind::Fixed(n) => until_nul(&key[..key.len().min(n.get())]),
        }
    }

    /// Key equality under this kind
    #[inline]
    pub fn same_key(&self, a: &[u8], b: &[u8]) -> bool {
        match (self.compared_bytes(a), self.compared_bytes(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Reject keys this table cannot store
    pub fn check(&self, key: &[u8]) -> Result<(), AssocError> {
        match self {
            KeyKind::Fixed(n) if key.len() < n.get() => Err(AssocError::KeyTooShort {
                expected: n.get(),
                found: key.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Str => write!(f, "string"),
            KeyKind::Fixed(n) => write!(f, "fixed({})", n),
        }
    }
}

#[inline]
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Raw byte view of a caller-owned key
pub trait KeyBytes {
    fn key_bytes(&self) -> &[u8];
}

impl KeyBytes for str {
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl KeyBytes for String {
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl KeyBytes for [u8] {
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl KeyBytes for Vec<u8> {
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> KeyBytes for [u8; N] {
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl KeyBytes for CStr {
    fn key_bytes(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl KeyBytes for CString {
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(n: usize) -> KeyKind {
        KeyKind::from_keysize(n)
    }

    #[test]
    fn test_from_keysize() {
        assert_eq!(KeyKind::from_keysize(0), KeyKind::Str);
        assert_eq!(fixed(4).keysize(), 4);
        assert_eq!(KeyKind::Str.keysize(), 0);
        assert_eq!(fixed(8).to_string(), "fixed(8)");
    }

    #[test]
    fn test_string_keys_stop_at_nul() {
        let kind = KeyKind::Str;
        assert!(kind.same_key(b"a", b"a\0b"));
        assert!(kind.same_key(b"abc\0", b"abc"));
        assert!(!kind.same_key(b"ab", b"abc"));
        assert!(!kind.same_key(b"", b"a"));
    }

    #[test]
    fn test_fixed_keys_compare_whole_block() {
        let kind = fixed(4);
        assert!(kind.same_key(b"a\0\0\0", b"a\0\0\0"));
        assert!(!kind.same_key(b"a\0\0\0", b"a\x01\0\0"));
        assert!(!kind.same_key(b"a\0\0\0", b"a\0\0\x07"));

        // Bytes past the key size take no part
        assert!(kind.same_key(b"abcdXX", b"abcdYY"));
    }

    #[test]
    fn test_short_fixed_key() {
        let kind = fixed(4);
        assert!(!kind.same_key(b"ab", b"ab"));
        assert_eq!(
            kind.check(b"ab"),
            Err(AssocError::KeyTooShort { expected: 4, found: 2 })
        );
        assert!(kind.check(b"abcd").is_ok());
        assert!(KeyKind::Str.check(b"").is_ok());
    }

    #[test]
    fn test_hashed_bytes() {
        assert_eq!(KeyKind::Str.hashed_bytes(b"ab\0cd"), b"ab");
        assert_eq!(fixed(4).hashed_bytes(b"a\0\0\x07"), b"a");
        assert_eq!(fixed(2).hashed_bytes(b"abcd"), b"ab");
    }

    #[test]
    fn test_key_bytes_impls() {
        let owned = String::from("key");
        let cstring = CString::new("key").unwrap();
        assert_eq!("key".key_bytes(), b"key");
        assert_eq!(owned.key_bytes(), b"key");
        assert_eq!(cstring.key_bytes(), b"key");
        assert_eq!(cstring.as_c_str().key_bytes(), b"key");
        assert_eq!([1u8, 2, 3].key_bytes(), &[1, 2, 3]);
        assert_eq!(vec![9u8].key_bytes(), &[9]);
    }
}
