use thiserror::Error;

/// Failure of the streaming word scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A word grew past [`ScannerOptions::max_token_len`](crate::ScannerOptions)
    /// without reaching a separator.
    #[error("word exceeds the {limit}-byte limit")]
    TokenTooLong {
        /// The configured limit.
        limit: usize,
    },
}

/// Failure of [`WordReader`](crate::WordReader).
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    /// The buffered input could not be split.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
}
