//! gzip encode/decode over whole in-memory buffers.
//!
//! The header carries no file name and a zero mtime, so the same input
//! and level always produce the same bytes.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;

use crate::Options;
use crate::error::Error;

/// Highest deflate level gzip defines.
pub const MAX_LEVEL: u32 = 9;

/// Compress `input` into a complete gzip stream.
///
/// Empty input still yields a valid stream (header, empty deflate block,
/// CRC and length trailer).
///
/// # Example
/// ```
/// let gz = wholestream::gzip::compress(b"hello", &wholestream::Options::default()).unwrap();
/// assert_eq!(&gz[..2], &[0x1f, 0x8b]);
/// assert_eq!(wholestream::gzip::decompress(&gz).unwrap(), b"hello");
/// ```
pub fn compress(input: &[u8], options: &Options) -> Result<Vec<u8>, Error> {
    let level = Compression::new(options.compression_level.min(MAX_LEVEL));
    // Deflate output for text is usually well under half the input.
    let out = Vec::with_capacity(input.len() / 2 + 32);
    let mut encoder = GzEncoder::new(out, level);
    encoder
        .write_all(input)
        .map_err(|source| Error::Encode { source })?;
    encoder.finish().map_err(|source| Error::Encode { source })
}

/// Decompress a gzip stream.
///
/// Concatenated members decode as one stream. NUL padding after a member
/// is skipped, and empty input decodes to empty output.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        // The bufread decoder stops right after the member trailer.
        GzDecoder::new(&mut rest)
            .read_to_end(&mut out)
            .map_err(|source| Error::Decode { source })?;
        rest = skip_padding(rest);
    }
    Ok(out)
}

fn skip_padding(mut bytes: &[u8]) -> &[u8] {
    while let [0, tail @ ..] = bytes {
        bytes = tail;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

    #[test]
    fn empty_input_is_valid_stream() {
        let gz = compress(b"", &Options::default()).unwrap();
        assert!(!gz.is_empty());
        assert_eq!(gz[..2], GZIP_MAGIC);
        assert!(decompress(&gz).unwrap().is_empty());
    }

    #[test]
    fn header_uses_deflate_and_zero_mtime() {
        let gz = compress(b"test1", &Options::default()).unwrap();
        assert_eq!(gz[2], 8, "compression method must be deflate");
        assert_eq!(gz[4..8], [0, 0, 0, 0]);
    }

    #[test]
    fn trailer_records_length() {
        let input = b"Gateway Ridge is a ridge in Antarctica.";
        let gz = compress(input, &Options::default()).unwrap();
        let isize = u32::from_le_bytes(gz[gz.len() - 4..].try_into().unwrap());
        assert_eq!(isize as usize, input.len());
    }

    #[test]
    fn output_is_deterministic() {
        let input = b"same bytes, same stream".repeat(10);
        let a = compress(&input, &Options::default()).unwrap();
        let b = compress(&input, &Options::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn level_zero_stores() {
        let input = b"abcabcabcabcabcabcabcabcabcabcabcabc".repeat(20);
        let stored = compress(&input, &Options { compression_level: 0 }).unwrap();
        let best = compress(&input, &Options::default()).unwrap();
        assert!(stored.len() > input.len());
        assert!(best.len() < input.len());
        assert_eq!(decompress(&stored).unwrap(), input);
    }

    #[test]
    fn level_above_max_is_clamped() {
        let input = b"clamp me".repeat(8);
        let clamped = compress(&input, &Options { compression_level: 42 }).unwrap();
        let max = compress(&input, &Options { compression_level: MAX_LEVEL }).unwrap();
        assert_eq!(clamped, max);
    }

    #[test]
    fn concatenated_members_decode_as_one() {
        let mut gz = compress(b"test1", &Options::default()).unwrap();
        gz.extend(compress(b"test2", &Options::default()).unwrap());
        assert_eq!(decompress(&gz).unwrap(), b"test1test2");
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert!(decompress(b"").unwrap().is_empty());
    }

    #[test]
    fn trailing_nul_padding_is_skipped() {
        let mut gz = compress(b"hi", &Options::default()).unwrap();
        gz.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(decompress(&gz).unwrap(), b"hi");
    }

    #[test]
    fn nul_padding_between_members_is_skipped() {
        let mut gz = compress(b"test1", &Options::default()).unwrap();
        gz.extend_from_slice(&[0; 512]);
        gz.extend(compress(b"test2", &Options::default()).unwrap());
        gz.push(0);
        assert_eq!(decompress(&gz).unwrap(), b"test1test2");
    }

    #[test]
    fn leading_nul_padding_is_decode_error() {
        let mut gz = vec![0, 0];
        gz.extend(compress(b"hi", &Options::default()).unwrap());
        let err = decompress(&gz).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "Got: {err:?}");
    }

    #[test]
    fn garbage_after_member_is_decode_error() {
        let mut gz = compress(b"hi", &Options::default()).unwrap();
        gz.extend_from_slice(b"trailing junk");
        let err = decompress(&gz).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "Got: {err:?}");
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = decompress(b"definitely not gzip").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "Got: {err:?}");
    }

    #[test]
    fn truncated_stream_is_decode_error() {
        let gz = compress(&b"truncate me".repeat(50), &Options::default()).unwrap();
        let err = decompress(&gz[..gz.len() - 6]).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "Got: {err:?}");
    }
}
