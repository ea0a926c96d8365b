/// Configuration for [`WordScanner`](crate::WordScanner) and
/// [`WordReader`](crate::WordReader).
///
/// # Examples
///
/// ```rust
/// use ebcdic::{ScannerOptions, WordScanner};
///
/// let scanner = WordScanner::new(ScannerOptions {
///     max_token_len: 80,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// Longest word, in bytes, the scanner accepts.
    ///
    /// As soon as more than this many bytes of one word are buffered, the
    /// scanner fails with [`ScanError::TokenTooLong`](crate::ScanError). A
    /// value of 0 is treated as 1.
    ///
    /// # Default
    ///
    /// `64 * 1024`
    pub max_token_len: usize,

    /// Number of bytes requested from the underlying reader per read.
    ///
    /// Only used by [`WordReader`](crate::WordReader). A value of 0 is
    /// treated as 1.
    ///
    /// # Default
    ///
    /// `4096`
    pub read_chunk_len: usize,
}

impl ScannerOptions {
    pub(crate) fn token_limit(&self) -> usize {
        self.max_token_len.max(1)
    }

    #[cfg(feature = "std")]
    pub(crate) fn chunk_len(&self) -> usize {
        self.read_chunk_len.max(1)
    }
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            max_token_len: 64 * 1024,
            read_chunk_len: 4096,
        }
    }
}
