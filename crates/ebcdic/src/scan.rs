//! Incremental word splitting over code page 500 bytes.
//!
//! [`scan_words`] is a pure function of the bytes currently buffered and
//! whether more may arrive. All state lives in the caller's buffer: after each
//! call the caller drops `advance` bytes from the front, and if no token was
//! produced, appends more input and calls again.

use crate::{decode::decode_char, space::is_space};

/// Result of one [`scan_words`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Number of bytes the caller should discard from the front of its
    /// buffer.
    pub advance: usize,
    /// The next word, without surrounding separators. `None` means more
    /// input is needed (or, at end of input, that nothing is left).
    pub token: Option<&'a [u8]>,
}

impl<'a> Split<'a> {
    const fn need_more(advance: usize) -> Self {
        Self {
            advance,
            token: None,
        }
    }

    const fn token(advance: usize, token: &'a [u8]) -> Self {
        Self {
            advance,
            token: Some(token),
        }
    }
}

/// Find the next whitespace-delimited word in `data`.
///
/// Leading separators are skipped. If a separator follows the word, the
/// returned `advance` covers it too. If the buffer ends inside a word, the
/// word is only returned when `at_eof` is set; otherwise the result asks for
/// more input and `advance` covers just the skipped leading separators.
/// A returned token is never empty.
///
/// ```rust
/// use ebcdic::scan_words;
///
/// // "  hello world" in code page 500.
/// let data = b"\x40\x40\x88\x85\x93\x93\x96\x40\xA6\x96\x99\x93\x84";
/// let split = scan_words(data, false);
/// assert_eq!(split.advance, 8);
/// assert_eq!(split.token, Some(&data[2..7]));
///
/// // "world" has no trailing separator yet.
/// let split = scan_words(&data[8..], false);
/// assert_eq!((split.advance, split.token), (0, None));
/// ```
#[must_use]
pub fn scan_words(data: &[u8], at_eof: bool) -> Split<'_> {
    let mut start = 0;
    while start < data.len() {
        let (ch, width) = decode_char(&data[start..]);
        if !is_space(ch) {
            break;
        }
        start += width;
    }

    let mut i = start;
    while i < data.len() {
        let (ch, width) = decode_char(&data[i..]);
        if is_space(ch) {
            return Split::token(i + width, &data[start..i]);
        }
        i += width;
    }

    if at_eof && start < data.len() {
        return Split::token(data.len(), &data[start..]);
    }

    Split::need_more(start)
}
