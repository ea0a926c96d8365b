//! Byte-at-a-time decoding of code page 500 input.
//!
//! The decoder mirrors the shape of a variable-width decoder so that scanning
//! code can treat it the same way: it reports the width of what it consumed,
//! and a width of zero means there was nothing to decode.

use alloc::string::String;
use core::{iter::FusedIterator, slice};

use crate::table::target;

/// Returned by [`decode_char`] together with a width of 0 when the input is
/// empty.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Decode the first scalar of `bytes`.
///
/// Returns the decoded `char` and the number of bytes consumed, which is
/// always 1 for non-empty input. Empty input yields
/// `(REPLACEMENT_CHARACTER, 0)`; every byte value is valid, so this is the
/// only case that does not decode.
///
/// ```rust
/// use ebcdic::{REPLACEMENT_CHARACTER, decode_char};
///
/// assert_eq!(decode_char(b"\xC8\x85"), ('H', 1));
/// assert_eq!(decode_char(b""), (REPLACEMENT_CHARACTER, 0));
/// ```
#[inline]
#[must_use]
pub fn decode_char(bytes: &[u8]) -> (char, usize) {
    match bytes.first() {
        Some(&byte) => (target(byte), 1),
        None => (REPLACEMENT_CHARACTER, 0),
    }
}

/// Iterate over the decoded scalars of `bytes`.
#[must_use]
pub fn chars(bytes: &[u8]) -> Chars<'_> {
    Chars {
        bytes: bytes.iter(),
    }
}

/// Decode all of `bytes` into an owned UTF-8 string.
///
/// Tokens returned by the scanner are raw code page 500 bytes; this is the
/// usual way to turn one into text.
#[must_use]
pub fn decode_to_string(bytes: &[u8]) -> String {
    // Upper half of Latin-1 takes two UTF-8 bytes.
    let mut out = String::with_capacity(bytes.len() * 2);
    out.extend(chars(bytes));
    out
}

/// Iterator returned by [`chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    bytes: slice::Iter<'a, u8>,
}

impl<'a> Chars<'a> {
    /// The bytes that have not been decoded yet.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes.as_slice()
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let (ch, width) = decode_char(self.bytes.as_slice());
        if width == 0 {
            return None;
        }
        self.bytes = self.bytes.as_slice()[width..].iter();
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<char> {
        self.bytes.next_back().map(|&byte| target(byte))
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl FusedIterator for Chars<'_> {}
