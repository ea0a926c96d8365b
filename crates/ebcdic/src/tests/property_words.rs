use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::reference_words;
use crate::{decode_to_string, scan_words};

/// Property: repeatedly scanning a complete buffer with `at_eof` set, feeding
/// `data[advance..]` back in, reproduces the decoded whitespace split and never
/// yields an empty token.
#[test]
fn full_input_rescan_matches_reference_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        let mut rest = data.as_slice();
        let mut words: Vec<String> = Vec::new();
        loop {
            let split = scan_words(rest, true);
            let Some(token) = split.token else {
                break;
            };
            if token.is_empty() || split.advance == 0 {
                return false;
            }
            words.push(decode_to_string(token));
            rest = &rest[split.advance..];
        }
        words == reference_words(&data)
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: without EOF, the scan never returns a token unless a separator
/// follows it, and never advances past the buffer.
#[test]
fn partial_input_waits_for_separator_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        let split = scan_words(&data, false);
        if split.advance > data.len() {
            return false;
        }
        match split.token {
            Some(token) => {
                let consumed = &data[..split.advance];
                let end = split.advance - 1;
                !token.is_empty()
                    && crate::is_space(crate::target(consumed[end]))
                    && !token.iter().any(|&b| crate::is_space(crate::target(b)))
            }
            None => data[..split.advance]
                .iter()
                .all(|&b| crate::is_space(crate::target(b))),
        }
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
