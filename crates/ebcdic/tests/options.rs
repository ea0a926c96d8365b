#![allow(missing_docs)]
use ebcdic::{ScanError, ScannerOptions, WordScanner};

#[test]
fn defaults() {
    let options = ScannerOptions::default();
    assert_eq!(options.max_token_len, 64 * 1024);
    assert_eq!(options.read_chunk_len, 4096);
}

#[test]
fn zero_limit_behaves_as_one() {
    let mut scanner = WordScanner::new(ScannerOptions {
        max_token_len: 0,
        ..Default::default()
    });
    // "a bc"
    scanner.feed(b"\x81\x40\x82\x83");
    let first = scanner.next().unwrap().unwrap();
    assert_eq!(first.decode(), "a");
    assert_eq!(scanner.next(), Some(Err(ScanError::TokenTooLong { limit: 1 })));
}

#[cfg(feature = "serde")]
#[test]
fn options_serde_roundtrip() {
    let options = ScannerOptions {
        max_token_len: 133,
        ..Default::default()
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"max_token_len":133,"read_chunk_len":4096}"#);
    let back: ScannerOptions = serde_json::from_str(r#"{"max_token_len":133}"#).unwrap();
    assert_eq!(back, options);
}
