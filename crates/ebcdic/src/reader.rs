use std::{
    io::{ErrorKind, Read},
    vec,
    vec::Vec,
};

use crate::{ReadError, ScannerOptions, Word, WordScanner};

/// Pull-based word splitter over any [`Read`] source of code page 500 bytes.
///
/// Reads `read_chunk_len` bytes at a time and only as often as needed to
/// complete the next word. A zero-length read is taken as end of input.
///
/// ```rust
/// use ebcdic::WordReader;
///
/// // "Hello, world" in code page 500.
/// let input: &[u8] = b"\xC8\x85\x93\x93\x96\x6B\x40\xA6\x96\x99\x93\x84";
/// let words = WordReader::new(input)
///     .map(|w| w.map(|w| w.decode()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(words, ["Hello,", "world"]);
/// ```
#[derive(Debug)]
pub struct WordReader<R> {
    reader: R,
    scanner: WordScanner,
    chunk: Vec<u8>,
    eof: bool,
    done: bool,
}

impl<R: Read> WordReader<R> {
    /// Wrap `reader` with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScannerOptions::default())
    }

    /// Wrap `reader`.
    pub fn with_options(reader: R, options: ScannerOptions) -> Self {
        Self {
            reader,
            chunk: vec![0; options.chunk_len()],
            scanner: WordScanner::new(options),
            eof: false,
            done: false,
        }
    }

    /// Unwrap the reader. Buffered bytes that were not yet returned as words
    /// are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> std::io::Result<()> {
        loop {
            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("reader exhausted");
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(bytes = n, "read chunk");
                    self.scanner.feed(&self.chunk[..n]);
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

impl<R: Read> Iterator for WordReader<R> {
    type Item = Result<Word, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(res) = self.scanner.next_word(self.eof) {
                self.done = res.is_err();
                return Some(res.map_err(ReadError::from));
            }
            if self.eof {
                self.done = true;
                return None;
            }
            if let Err(err) = self.fill() {
                self.done = true;
                return Some(Err(err.into()));
            }
        }
    }
}
