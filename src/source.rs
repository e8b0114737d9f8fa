//! Input resolution and whole-stream reads.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Stream};

/// How a transform expects its input to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoMode {
    /// Raw bytes, passed through untouched.
    Binary,
    /// UTF-8 text. Line endings are not translated.
    Text,
}

/// The whole input of a run, decoded according to an [`IoMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Buffer {
    Bytes(Vec<u8>),
    Text(String),
}

impl Buffer {
    /// Interpret raw bytes in `mode`. Text mode rejects invalid UTF-8.
    pub fn decode(bytes: Vec<u8>, mode: IoMode) -> Result<Self, Error> {
        match mode {
            IoMode::Binary => Ok(Buffer::Bytes(bytes)),
            IoMode::Text => decode_utf8(bytes).map(Buffer::Text),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Buffer::Bytes(bytes) => bytes,
            Buffer::Text(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The buffer as text, validating it first if it was read as bytes.
    pub fn into_text(self) -> Result<String, Error> {
        match self {
            Buffer::Bytes(bytes) => decode_utf8(bytes),
            Buffer::Text(text) => Ok(text),
        }
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Buffer::Bytes(bytes)
    }
}

impl From<String> for Buffer {
    fn from(text: String) -> Self {
        Buffer::Text(text)
    }
}

fn decode_utf8(bytes: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(bytes).map_err(|err| Error::Encoding {
        offset: err.utf8_error().valid_up_to(),
    })
}

/// Where a run reads from. Resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    FilePath(PathBuf),
    DefaultStream,
}

impl InputSource {
    /// Resolve the optional positional argument. `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::FilePath(path),
            _ => InputSource::DefaultStream,
        }
    }

    /// The stream this source names in diagnostics.
    pub fn stream(&self) -> Stream {
        match self {
            InputSource::FilePath(path) => Stream::File(path.clone()),
            InputSource::DefaultStream => Stream::Stdin,
        }
    }

    /// Read the whole source in `mode`, using `stdin` for `DefaultStream`.
    pub fn read_from<R: Read>(&self, stdin: R, mode: IoMode) -> Result<Buffer, Error> {
        let bytes = match self {
            InputSource::FilePath(path) => read_file(path)?,
            InputSource::DefaultStream => read_stream(stdin, Stream::Stdin)?,
        };
        debug!("read {} bytes from {}", bytes.len(), self.stream());
        Buffer::decode(bytes, mode)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        stream: Stream::File(path.to_path_buf()),
        source,
    })?;
    read_stream(file, Stream::File(path.to_path_buf()))
}

fn read_stream<R: Read>(mut reader: R, stream: Stream) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| Error::Read { stream, source })?;
    Ok(buf)
}
