//! Infohash canonicalization
//!
//! Magnet URIs carry the 20-byte infohash in one of two encodings:
//! 40 hex characters or 32 base32 characters (RFC 4648 alphabet,
//! sometimes `=`-padded). Everything downstream of the parser works
//! with a single canonical form: 40 lowercase hex characters.

use crate::error::{IndexError, Result};

/// Canonicalize an infohash string to 40 lowercase hex characters
///
/// Accepts either encoding found in the wild:
/// - 40 hex characters (any case) are lowercased as-is
/// - 32 base32 characters (any case, trailing `=` padding stripped)
///   are decoded and re-encoded as hex
///
/// # Example
/// ```
/// use driftnet_index::torrent::infohash;
/// let hex = infohash::canonicalize("AABBCCDDEEAABBCCDDEEAABBCCDDEEAABBCCDDEE").unwrap();
/// assert_eq!(hex, "aabbccddeeaabbccddeeaabbccddeeaabbccddee");
/// ```
pub fn canonicalize(raw: &str) -> Result<String> {
    if raw.len() == 40 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Ok(raw.to_ascii_lowercase());
    }

    let unpadded = raw.trim_end_matches('=');
    if unpadded.len() == 32 {
        if let Some(bytes) = base32_decode(unpadded) {
            return Ok(hex_encode(&bytes));
        }
    }

    Err(IndexError::InvalidInfohash)
}

/// Decode 32 base32 characters (RFC 4648, `A-Z2-7`) into 20 bytes
///
/// Bits accumulate MSB-first, five per character; a byte is emitted
/// every eight accumulated bits. 32 characters carry exactly 160 bits,
/// so there is no trailing partial byte to discard.
fn base32_decode(input: &str) -> Option<[u8; 20]> {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    let input = input.to_ascii_uppercase();
    let mut bits = 0u64;
    let mut bit_count = 0u32;
    let mut output = Vec::with_capacity(20);

    for &c in input.as_bytes() {
        let val = ALPHABET.iter().position(|&a| a == c)? as u64;
        bits = (bits << 5) | val;
        bit_count += 5;

        while bit_count >= 8 {
            bit_count -= 8;
            output.push((bits >> bit_count) as u8);
            bits &= (1 << bit_count) - 1;
        }
    }

    output.try_into().ok()
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // base32 of the byte sequence 0x00 0x01 .. 0x13
    const BASE32_VECTOR: &str = "AAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQT";
    const HEX_VECTOR: &str = "000102030405060708090a0b0c0d0e0f10111213";

    #[test]
    fn test_hex_roundtrip() {
        let hex = "aabbccddeeaabbccddeeaabbccddeeaabbccddee";
        assert_eq!(canonicalize(hex).unwrap(), hex);
    }

    #[test]
    fn test_uppercase_hex_is_lowercased() {
        assert_eq!(
            canonicalize("AABBCCDDEEAABBCCDDEEAABBCCDDEEAABBCCDDEE").unwrap(),
            "aabbccddeeaabbccddeeaabbccddeeaabbccddee"
        );
    }

    #[test]
    fn test_base32_equivalence() {
        assert_eq!(canonicalize(BASE32_VECTOR).unwrap(), HEX_VECTOR);
    }

    #[test]
    fn test_base32_lowercase_and_padding() {
        let lower = BASE32_VECTOR.to_lowercase();
        assert_eq!(canonicalize(&lower).unwrap(), HEX_VECTOR);

        let padded = format!("{BASE32_VECTOR}====");
        assert_eq!(canonicalize(&padded).unwrap(), HEX_VECTOR);
    }

    #[test]
    fn test_invalid_shapes() {
        // Wrong length
        assert_eq!(canonicalize("abc123"), Err(IndexError::InvalidInfohash));
        // Right length, bad hex digit
        assert_eq!(
            canonicalize("zzbbccddeeaabbccddeeaabbccddeeaabbccddee"),
            Err(IndexError::InvalidInfohash)
        );
        // 32 chars outside the base32 alphabet (0 and 1 are excluded)
        assert_eq!(
            canonicalize("0101010101010101010101010101AB23"),
            Err(IndexError::InvalidInfohash)
        );
        assert_eq!(canonicalize(""), Err(IndexError::InvalidInfohash));
    }
}
