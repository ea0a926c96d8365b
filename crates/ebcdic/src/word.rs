use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use bstr::BStr;

use crate::decode::{Chars, chars, decode_to_string};

/// An owned word produced by [`WordScanner`](crate::WordScanner).
///
/// Holds the raw code page 500 bytes. `Display` writes the decoded text,
/// `Debug` shows the bytes.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Vec<u8>);

impl Word {
    /// The raw bytes of the word.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the word, returning its raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes, which is also the length in decoded chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the word is empty. Words produced by the scanner never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the decoded chars.
    #[must_use]
    pub fn chars(&self) -> Chars<'_> {
        chars(&self.0)
    }

    /// Decode the word to a `String`.
    #[must_use]
    pub fn decode(&self) -> String {
        decode_to_string(&self.0)
    }
}

impl From<&[u8]> for Word {
    fn from(bytes: &[u8]) -> Self {
        Word(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Word {
    fn from(bytes: Vec<u8>) -> Self {
        Word(bytes)
    }
}

impl From<Word> for Vec<u8> {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for Word {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for Word {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Word").field(&BStr::new(&self.0)).finish()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|ch| f.write_char(ch))
    }
}
