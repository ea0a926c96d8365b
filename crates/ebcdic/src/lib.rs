//! Decoding and streaming word splitting for EBCDIC code page 500 text.
//!
//! Every byte maps to exactly one Unicode scalar through [`CP500`], so
//! decoding never fails. [`scan_words`] splits a growing byte buffer into
//! whitespace-delimited words and tells the caller how much to discard and
//! whether it needs more input. [`WordScanner`] wraps that loop for pushed
//! input; with the `std` feature, `WordReader` does the same for any
//! `std::io::Read` source.
//!
//! ```rust
//! use ebcdic::{WordScanner, decode_to_string};
//!
//! let mut scanner = WordScanner::default();
//! scanner.feed(b"\x40\x40\x88\x85\x93\x93\x96\x40\xA6\x96\x99\x93\x84");
//! let words: Vec<String> = scanner
//!     .finish()
//!     .map(|w| decode_to_string(w.unwrap().as_bytes()))
//!     .collect();
//! assert_eq!(words, ["hello", "world"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decode;
mod error;
mod options;
#[cfg(feature = "std")]
mod reader;
mod scan;
mod scanner;
mod space;
mod table;
mod word;

#[cfg(test)]
mod tests;

pub use decode::{Chars, REPLACEMENT_CHARACTER, chars, decode_char, decode_to_string};
#[cfg(feature = "std")]
pub use error::ReadError;
pub use error::ScanError;
pub use options::ScannerOptions;
#[cfg(feature = "std")]
pub use reader::WordReader;
pub use scan::{Split, scan_words};
pub use scanner::{ClosedWordScanner, WordScanner};
pub use space::is_space;
pub use table::{CP500, target};
pub use word::Word;
