//! Error taxonomy for a single run.
//!
//! Argument errors never reach this type: `clap` reports them and exits
//! before any I/O happens.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for malformed input data (`EX_DATAERR`).
pub const EXIT_DATA: u8 = 65;

/// Exit code for failed I/O (`EX_IOERR`).
pub const EXIT_IO: u8 = 74;

/// Where an I/O failure happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stream {
    File(PathBuf),
    Stdin,
    Stdout,
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stream::File(path) => write!(f, "{}", path.display()),
            Stream::Stdin => f.write_str("<stdin>"),
            Stream::Stdout => f.write_str("<stdout>"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {stream}: {source}")]
    Open {
        stream: Stream,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {stream}: {source}")]
    Read {
        stream: Stream,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {stream}: {source}")]
    Write {
        stream: Stream,
        #[source]
        source: io::Error,
    },

    /// Text-mode input is not valid UTF-8.
    #[error("input is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    Encoding { offset: usize },

    /// Input is not a well-formed gzip stream.
    #[error("input is not valid gzip data: {source}")]
    Decode {
        #[source]
        source: io::Error,
    },

    /// The encoder itself failed while building the output buffer.
    #[error("compression failed: {source}")]
    Encode {
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Encoding { .. } | Error::Decode { .. } => EXIT_DATA,
            Error::Open { .. } | Error::Read { .. } | Error::Write { .. } | Error::Encode { .. } => {
                EXIT_IO
            }
        }
    }
}
