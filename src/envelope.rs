use crate::checksum::adler32;
use crate::error::CompressionError;
use bytes::{Bytes, BytesMut};
use compression_codecs::{EncodeV2, deflate::DeflateEncoder};
use compression_core::Level;
use compression_core::util::{PartialBuffer, WriteBuffer};
use std::io;

const OUTPUT_BUFFER_SIZE: usize = 8 * 1024; // 8KB output buffer

/// Fixed zlib header advertising deflate with the default compression level.
const ZLIB_HEADER: [u8; 2] = [0x78, 0x5E];

/// Builds a zlib-compatible envelope around the given body.
///
/// The result is the 2-byte zlib header, the raw-deflate compressed body,
/// and the big-endian Adler-32 checksum of the *uncompressed* body — a
/// stream any conformant zlib decoder accepts.
pub fn build_envelope(body: &[u8]) -> Result<Bytes, CompressionError> {
    let compressed = deflate(body)?;

    let mut envelope = BytesMut::with_capacity(ZLIB_HEADER.len() + compressed.len() + 4);
    envelope.extend_from_slice(&ZLIB_HEADER);
    envelope.extend_from_slice(&compressed);
    envelope.extend_from_slice(&adler32(body).to_be_bytes());

    Ok(envelope.freeze())
}

/// Compresses the input with raw deflate (no header or trailer) at the
/// default level.
fn deflate(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = DeflateEncoder::new(Level::Default.into());
    let mut output_buffer = vec![0u8; OUTPUT_BUFFER_SIZE];
    let mut compressed = Vec::new();

    // Feed the encoder until all input is consumed
    let mut input_buf = PartialBuffer::new(input);
    loop {
        let mut output = WriteBuffer::new_initialized(output_buffer.as_mut_slice());

        encoder
            .encode(&mut input_buf, &mut output)
            .map_err(|e| CompressionError::Compression(io::Error::other(e)))?;

        let written = output.written_len();
        if written > 0 {
            compressed.extend_from_slice(&output_buffer[..written]);
        }

        if input_buf.written_len() >= input.len() {
            break;
        }

        // Safety check to prevent infinite loop
        if written == 0 && input_buf.written_len() == 0 {
            break;
        }
    }

    // Drain the encoder's internal state
    loop {
        let mut output = WriteBuffer::new_initialized(output_buffer.as_mut_slice());

        let done = encoder
            .finish(&mut output)
            .map_err(|e| CompressionError::Compression(io::Error::other(e)))?;

        let written = output.written_len();
        if written > 0 {
            compressed.extend_from_slice(&output_buffer[..written]);
        }

        if done {
            break;
        }
    }

    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_envelope_header_bytes() {
        let envelope = build_envelope(b"hello world").unwrap();
        assert_eq!(&envelope[..2], &[0x78, 0x5E]);
    }

    #[test]
    fn test_envelope_trailer_is_adler32_of_input() {
        let body = b"hello world";
        let envelope = build_envelope(body).unwrap();
        assert_eq!(&envelope[envelope.len() - 4..], adler32(body).to_be_bytes());
    }

    #[test]
    fn test_envelope_decodes_as_zlib_stream() {
        let body: Vec<u8> = (0..4096u32).map(|i| (i % 256) as u8).collect();
        let envelope = build_envelope(&body).unwrap();

        // ZlibDecoder validates the Adler-32 trailer, so a successful decode
        // covers both framing and checksum.
        let mut decoder = flate2::write::ZlibDecoder::new(Vec::new());
        decoder.write_all(&envelope).unwrap();
        assert_eq!(decoder.finish().unwrap(), body);
    }

    #[test]
    fn test_middle_segment_is_raw_deflate() {
        let body = b"the payload between header and trailer is headerless deflate";
        let envelope = build_envelope(body).unwrap();

        let middle = &envelope[2..envelope.len() - 4];
        let mut decoder = flate2::write::DeflateDecoder::new(Vec::new());
        decoder.write_all(middle).unwrap();
        assert_eq!(decoder.finish().unwrap(), body);
    }

    #[test]
    fn test_empty_body_envelope() {
        let envelope = build_envelope(b"").unwrap();
        assert_eq!(&envelope[..2], &[0x78, 0x5E]);
        assert_eq!(&envelope[envelope.len() - 4..], 1u32.to_be_bytes());

        let mut decoder = flate2::write::ZlibDecoder::new(Vec::new());
        decoder.write_all(&envelope).unwrap();
        assert_eq!(decoder.finish().unwrap(), b"");
    }
}
