#![allow(missing_docs)]
use std::io::{self, Read};

use ebcdic::{ReadError, ScanError, ScannerOptions, WordReader};

/// "The quick  brown\nfox" in code page 500.
const TEXT: &[u8] = b"\xE3\x88\x85\x40\x98\xA4\x89\x83\x92\x40\x40\x82\x99\x96\xA6\x95\x25\x86\x96\xA7";

fn decoded<R: Read>(reader: WordReader<R>) -> Vec<String> {
    reader.map(|w| w.unwrap().decode()).collect()
}

/// Hands out at most `step` bytes per read and interrupts every other call.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
    interrupt: bool,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

struct Failing;

impl Read for Failing {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device offline"))
    }
}

#[test]
fn reads_all_words() {
    assert_eq!(decoded(WordReader::new(TEXT)), ["The", "quick", "brown", "fox"]);
}

#[test]
fn small_chunks_match_single_read() {
    for chunk in 1..=TEXT.len() {
        let reader = WordReader::with_options(
            TEXT,
            ScannerOptions {
                read_chunk_len: chunk,
                ..Default::default()
            },
        );
        assert_eq!(decoded(reader), ["The", "quick", "brown", "fox"], "chunk {chunk}");
    }
}

#[test]
fn retries_interrupted_reads() {
    let source = Trickle {
        data: TEXT,
        step: 3,
        interrupt: false,
    };
    assert_eq!(decoded(WordReader::new(source)), ["The", "quick", "brown", "fox"]);
}

#[test]
fn empty_input_yields_nothing() {
    let mut reader = WordReader::new(io::empty());
    assert!(reader.next().is_none());
    assert!(reader.next().is_none());
}

#[test]
fn io_error_is_reported_once() {
    let mut reader = WordReader::new(Failing);
    match reader.next() {
        Some(Err(ReadError::Io(err))) => assert_eq!(err.to_string(), "device offline"),
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(reader.next().is_none());
}

#[test]
fn long_word_is_rejected() {
    let reader = WordReader::with_options(
        TEXT,
        ScannerOptions {
            max_token_len: 4,
            read_chunk_len: 2,
        },
    );
    let results: Vec<_> = reader.collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().decode(), "The");
    assert!(matches!(
        results[1],
        Err(ReadError::Scan(ScanError::TokenTooLong { limit: 4 }))
    ));
}

#[test]
fn error_messages() {
    let err = ReadError::from(ScanError::TokenTooLong { limit: 80 });
    assert_eq!(err.to_string(), "scan error: word exceeds the 80-byte limit");
}
