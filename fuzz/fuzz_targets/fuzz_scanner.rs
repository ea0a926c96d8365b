#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use ebcdic::{ScannerOptions, WordScanner, scan_words};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// Separator bytes in code page 500: HT, VT, FF, CR, NEL, LF, space, NBSP.
static WS_TABLE: &[u8] = &[0x05, 0x0B, 0x0C, 0x0D, 0x15, 0x25, 0x40, 0x41];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Sprinkle separators over libFuzzer's own mutation so that inputs contain
/// many short words instead of one long one.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    let size = fuzzer_mutate(data, size, max_size);
    if seed % 4 == 0 {
        with_rng(|rng| {
            for byte in &mut data[..size] {
                if rng.random_ratio(1, 5) {
                    *byte = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
                }
            }
        });
    }
    size
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Input {
    splits: Vec<u8>,
    data: Vec<u8>,
}

fn one_shot(data: &[u8]) -> Vec<Vec<u8>> {
    let mut rest = data;
    let mut words = Vec::new();
    loop {
        let split = scan_words(rest, true);
        let Some(token) = split.token else {
            return words;
        };
        assert!(!token.is_empty());
        words.push(token.to_vec());
        rest = &rest[split.advance..];
    }
}

fn scanner(input: Input) {
    let expected = one_shot(&input.data);

    let mut scanner = WordScanner::new(ScannerOptions {
        max_token_len: input.data.len().max(1),
        ..Default::default()
    });
    let mut words = Vec::new();
    let mut rest = input.data.as_slice();
    for split in input.splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + usize::from(split) % rest.len();
        scanner.feed(&rest[..size]);
        rest = &rest[size..];
        words.extend(scanner.by_ref().map(|w| w.unwrap().into_bytes()));
    }
    scanner.feed(rest);
    words.extend(scanner.finish().map(|w| w.unwrap().into_bytes()));

    assert_eq!(words, expected);
}

fuzz_target!(|input: Input| scanner(input));
