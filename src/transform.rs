//! The whole-buffer transforms a command can be bound to.

use log::trace;

use crate::Options;
use crate::case;
use crate::error::Error;
use crate::gzip;
use crate::source::{Buffer, IoMode};

/// A stateless mapping from one input buffer to one output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// gzip-compress the bytes.
    Gzip(Options),
    /// Decompress a gzip stream.
    Gunzip,
    /// Uppercase UTF-8 text.
    Uppercase,
}

impl Transform {
    /// gzip compression with default options.
    pub fn gzip() -> Self {
        Transform::Gzip(Options::default())
    }

    pub fn gzip_with_options(options: Options) -> Self {
        Transform::Gzip(options)
    }

    pub fn gunzip() -> Self {
        Transform::Gunzip
    }

    pub fn uppercase() -> Self {
        Transform::Uppercase
    }

    /// How the input must be read for this transform.
    pub fn mode(&self) -> IoMode {
        match self {
            Transform::Gzip(_) | Transform::Gunzip => IoMode::Binary,
            Transform::Uppercase => IoMode::Text,
        }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Gzip(_) => "gzip",
            Transform::Gunzip => "gunzip",
            Transform::Uppercase => "uppercase",
        }
    }

    /// One-line description for `--help`.
    pub fn about(&self) -> &'static str {
        match self {
            Transform::Gzip(_) => "Compress a file or stdin with gzip and write it to stdout",
            Transform::Gunzip => "Decompress a gzip file or stdin and write it to stdout",
            Transform::Uppercase => "Uppercase a UTF-8 text file or stdin and write it to stdout",
        }
    }

    /// Apply the transform to a whole buffer.
    ///
    /// A buffer read as raw bytes is still validated as UTF-8 by the text
    /// transforms.
    pub fn apply(&self, input: Buffer) -> Result<Vec<u8>, Error> {
        let len = input.len();
        let out = match self {
            Transform::Gzip(options) => gzip::compress(input.as_bytes(), options)?,
            Transform::Gunzip => gzip::decompress(input.as_bytes())?,
            Transform::Uppercase => case::to_uppercase(input.into_text()?).into_bytes(),
        };
        trace!("{}: {} bytes -> {} bytes", self.name(), len, out.len());
        Ok(out)
    }
}
