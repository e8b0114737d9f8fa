//! wholestream: read a whole stream, transform it, write it out
//!
//! Each binary in this crate is the same small pipeline bound to a
//! different transform:
//!
//! - `gzippy`: gzip-compress a file or stdin
//! - `gunzippy`: decompress a gzip file or stdin
//! - `uppercaser`: uppercase a UTF-8 text file or stdin
//!
//! # Design Principles
//! - Whole-buffer: the input is read completely before the transform runs
//! - One write: stdout receives the full result or nothing at all
//! - Explicit input resolution: a path or the default stream, decided once
//! - Stateless transforms: same input, same output
//!
//! # Future Extensions
//! - Chunked streaming transforms with bounded buffering for very large inputs

pub mod case;
pub mod command;
pub mod error;
pub mod gzip;
pub mod source;
pub mod transform;

// Re-export primary types
pub use command::{Cli, run, run_with};
pub use error::Error;
pub use source::{Buffer, InputSource, IoMode};
pub use transform::Transform;

/// Transform options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// gzip level, 0 (store) through 9 (best). Higher values are clamped.
    pub compression_level: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            compression_level: gzip::MAX_LEVEL,
        }
    }
}

/// gzip-compress a byte slice with default options.
///
/// # Example
/// ```
/// let gz = wholestream::compress(b"hello").unwrap();
/// assert_eq!(wholestream::decompress(&gz).unwrap(), b"hello");
/// ```
pub fn compress(input: &[u8]) -> Result<Vec<u8>, Error> {
    gzip::compress(input, &Options::default())
}

/// Decompress a gzip stream.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, Error> {
    gzip::decompress(input)
}

/// Uppercase a string.
///
/// # Example
/// ```
/// assert_eq!(wholestream::uppercase("hello"), "HELLO");
/// ```
pub fn uppercase(input: &str) -> String {
    case::to_uppercase_str(input)
}
