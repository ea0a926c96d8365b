//! Push-based streaming driver for [`scan_words`].
//!
//! The scanner owns the growable buffer that the split function expects its
//! caller to keep. Input is pushed with [`WordScanner::feed`] and words are
//! pulled by iterating. Iteration stops, without consuming anything, as soon
//! as the buffered bytes end inside a word; feed more and iterate again.
//! [`WordScanner::finish`] marks end of input and returns an iterator over
//! whatever remains, so no bytes can be fed after EOF.
//!
//! Consumed bytes are dropped lazily: the buffer is compacted once the read
//! cursor passes its midpoint, or cleared outright when everything has been
//! read.

use alloc::vec::Vec;

use crate::{ScanError, ScannerOptions, Word, scan::scan_words};

/// Streaming whitespace-delimited word splitter over code page 500 input.
///
/// # Examples
///
/// ```rust
/// use ebcdic::{ScannerOptions, WordScanner};
///
/// let mut scanner = WordScanner::new(ScannerOptions::default());
/// // "OMG wor"
/// scanner.feed(b"\xD6\xD4\xC7\x40\xA6\x96\x99");
/// let words: Vec<String> = scanner.by_ref().map(|w| w.unwrap().decode()).collect();
/// assert_eq!(words, ["OMG"]);
///
/// // "ld"
/// scanner.feed(b"\x93\x84");
/// let rest: Vec<String> = scanner.finish().map(|w| w.unwrap().decode()).collect();
/// assert_eq!(rest, ["world"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordScanner {
    buffer: Vec<u8>,
    pos: usize,
    options: ScannerOptions,
    failed: bool,
}

impl WordScanner {
    /// Create an empty scanner.
    #[must_use]
    pub fn new(options: ScannerOptions) -> Self {
        Self {
            buffer: Vec::new(),
            pos: 0,
            options,
            failed: false,
        }
    }

    /// The options this scanner was created with.
    #[must_use]
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Append a chunk of input.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Bytes fed but not yet consumed.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer[self.pos..]
    }

    /// Whether the scanner has reported [`ScanError::TokenTooLong`] and
    /// stopped.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Mark the end of input and drain the remaining words.
    #[must_use]
    pub fn finish(self) -> ClosedWordScanner {
        #[cfg(feature = "tracing")]
        tracing::trace!(pending = self.pending().len(), "end of input");
        ClosedWordScanner { inner: self }
    }

    pub(crate) fn next_word(&mut self, at_eof: bool) -> Option<Result<Word, ScanError>> {
        if self.failed {
            return None;
        }

        let limit = self.options.token_limit();
        let split = scan_words(&self.buffer[self.pos..], at_eof);
        let too_long = match split.token {
            Some(token) => token.len() > limit,
            None => self.buffer.len() - self.pos - split.advance > limit,
        };
        if too_long {
            #[cfg(feature = "tracing")]
            tracing::debug!(limit, "word exceeds limit");
            self.failed = true;
            return Some(Err(ScanError::TokenTooLong { limit }));
        }

        let word = split.token.map(Word::from);
        let advance = split.advance;
        self.consume(advance);
        word.map(Ok)
    }

    fn consume(&mut self, advance: usize) {
        self.pos += advance;
        if self.pos == self.buffer.len() {
            self.buffer.clear();
            self.pos = 0;
        } else if self.pos > self.buffer.len() / 2 {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                consumed = self.pos,
                kept = self.buffer.len() - self.pos,
                "compacting buffer"
            );
            self.buffer.drain(..self.pos);
            self.pos = 0;
        }
    }
}

impl Default for WordScanner {
    fn default() -> Self {
        Self::new(ScannerOptions::default())
    }
}

impl Iterator for WordScanner {
    type Item = Result<Word, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word(false)
    }
}

/// A [`WordScanner`] after end of input; yields the remaining words.
#[derive(Debug, Clone)]
pub struct ClosedWordScanner {
    inner: WordScanner,
}

impl ClosedWordScanner {
    /// Bytes not yet consumed.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        self.inner.pending()
    }
}

impl Iterator for ClosedWordScanner {
    type Item = Result<Word, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_word(true)
    }
}
