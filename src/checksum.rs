/// Largest prime smaller than 2^16, per the Adler-32 definition.
const MOD_ADLER: u32 = 65521;

/// Computes the Adler-32 checksum of the given bytes.
///
/// This matches the checksum a zlib decoder validates against the stream
/// trailer, so the result of `adler32(body)` is what [`build_envelope`]
/// appends after the compressed payload. The empty input checksums to 1.
///
/// [`build_envelope`]: crate::build_envelope
pub fn adler32(data: &[u8]) -> u32 {
    let mut s1: u32 = 1;
    let mut s2: u32 = 0;

    for &byte in data {
        s1 = (s1 + u32::from(byte)) % MOD_ADLER;
        s2 = (s2 + s1) % MOD_ADLER;
    }

    (s2 << 16) | s1
}
