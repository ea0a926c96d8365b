use alloc::{string::String, vec::Vec};

use crate::{CP500, ScanError, Word};

mod property_words;

/// Encode Latin-1 text as code page 500.
///
/// # Panics
///
/// Panics on chars above U+00FF.
pub(crate) fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let pos = CP500
                .iter()
                .position(|&c| c == ch)
                .expect("char not in code page 500");
            u8::try_from(pos).unwrap()
        })
        .collect()
}

/// Unwrap and decode every word an iterator yields.
pub(crate) fn decode_all(words: impl Iterator<Item = Result<Word, ScanError>>) -> Vec<String> {
    words.map(|w| w.unwrap().decode()).collect()
}

/// Reference split: decode first, then split on `char::is_whitespace`.
pub(crate) fn reference_words(data: &[u8]) -> Vec<String> {
    crate::decode_to_string(data)
        .split_whitespace()
        .map(String::from)
        .collect()
}
