//! The embedded header codec.
//!
//! The header is a fixed 16-byte record written into the first reserved
//! slots, in clear, before any payload bits:
//!
//! ```text
//! [0..4]   magic "MPAS"
//! [4]      format version
//! [5]      bits-per-slot echo
//! [6]      flags (bit 0: cipher enabled)
//! [7]      reserved, zero
//! [8..12]  payload length, big-endian u32
//! [12..16] CRC-32 over bytes 0..12, big-endian
//! ```
//!
//! Caller-supplied settings stay authoritative for extraction; the echoed
//! settings and the checksum only serve to reject cross-setting or wrong-key
//! extraction attempts instead of letting them "succeed" with garbage. The
//! version byte makes any future layout change an explicit failure rather
//! than a silent misread.

use byteorder::{BigEndian, ByteOrder};

use crate::error::Mp3StegoError;
use crate::options::Settings;
use crate::result::Result;

pub const MAGIC: [u8; 4] = *b"MPAS";
pub const FORMAT_VERSION: u8 = 1;
/// Header size in bytes. A build-time constant of the engine: changing it
/// breaks compatibility with previously embedded carriers.
pub const HEADER_SIZE: usize = 16;

const FLAG_CIPHER: u8 = 0b0000_0001;

/// Serialize the header for a payload of `payload_len` bytes.
pub fn encode_header(payload_len: u32, settings: &Settings) -> [u8; HEADER_SIZE] {
    let mut block = [0u8; HEADER_SIZE];
    block[0..4].copy_from_slice(&MAGIC);
    block[4] = FORMAT_VERSION;
    block[5] = settings.bits_per_slot;
    block[6] = if settings.cipher_enabled {
        FLAG_CIPHER
    } else {
        0
    };
    BigEndian::write_u32(&mut block[8..12], payload_len);
    let crc = crc32fast::hash(&block[..12]);
    BigEndian::write_u32(&mut block[12..16], crc);
    block
}

/// Parse and validate a header block, returning the declared payload length.
///
/// `usable_payload_bytes` is the capacity bound for the current carrier and
/// settings; a declared length above it is implausible and reported as such,
/// since a real embed pass would have refused that payload.
pub fn decode_header(
    block: &[u8],
    settings: &Settings,
    usable_payload_bytes: usize,
) -> Result<u32> {
    if block.len() != HEADER_SIZE {
        return Err(Mp3StegoError::LengthMismatch {
            expected: HEADER_SIZE,
            actual: block.len(),
        });
    }
    if block[0..4] != MAGIC {
        return Err(Mp3StegoError::HeaderNotFound);
    }

    let stored_crc = BigEndian::read_u32(&block[12..16]);
    if crc32fast::hash(&block[..12]) != stored_crc {
        return Err(Mp3StegoError::HeaderChecksum);
    }
    if block[4] != FORMAT_VERSION {
        return Err(Mp3StegoError::UnsupportedHeaderVersion(block[4]));
    }
    if block[5] != settings.bits_per_slot {
        return Err(Mp3StegoError::BitsPerSlotMismatch {
            embedded: block[5],
            requested: settings.bits_per_slot,
        });
    }
    let embedded_cipher = block[6] & FLAG_CIPHER != 0;
    if embedded_cipher != settings.cipher_enabled {
        return Err(Mp3StegoError::CipherFlagMismatch {
            embedded: embedded_cipher,
            requested: settings.cipher_enabled,
        });
    }

    let payload_len = BigEndian::read_u32(&block[8..12]);
    if payload_len as usize > usable_payload_bytes {
        return Err(Mp3StegoError::ImplausibleLength {
            declared: payload_len as usize,
            usable: usable_payload_bytes,
        });
    }

    Ok(payload_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(bits: u8, cipher: bool) -> Settings {
        Settings {
            bits_per_slot: bits,
            key: Vec::new(),
            cipher_enabled: cipher,
        }
    }

    #[test]
    fn roundtrips_length_and_settings() {
        let s = settings(3, true);
        let block = encode_header(4711, &s);
        assert_eq!(decode_header(&block, &s, 100_000).unwrap(), 4711);
    }

    #[test]
    fn header_is_exactly_sixteen_bytes() {
        let block = encode_header(0, &settings(1, false));
        assert_eq!(block.len(), HEADER_SIZE);
        assert_eq!(&block[0..4], b"MPAS");
        assert_eq!(block[4], FORMAT_VERSION);
    }

    #[test]
    fn bad_magic_reads_as_not_embedded() {
        let mut block = encode_header(10, &settings(2, false));
        block[0] ^= 0xFF;
        assert!(matches!(
            decode_header(&block, &settings(2, false), 1000),
            Err(Mp3StegoError::HeaderNotFound)
        ));
    }

    #[test]
    fn corrupted_body_fails_the_checksum() {
        let mut block = encode_header(10, &settings(2, false));
        block[9] ^= 0x01;
        assert!(matches!(
            decode_header(&block, &settings(2, false), 1000),
            Err(Mp3StegoError::HeaderChecksum)
        ));
    }

    #[test]
    fn future_version_is_an_explicit_failure() {
        let s = settings(2, false);
        let mut block = encode_header(10, &s);
        block[4] = FORMAT_VERSION + 1;
        let crc = crc32fast::hash(&block[..12]);
        BigEndian::write_u32(&mut block[12..16], crc);
        assert!(matches!(
            decode_header(&block, &s, 1000),
            Err(Mp3StegoError::UnsupportedHeaderVersion(v)) if v == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn cross_depth_extraction_is_rejected() {
        let block = encode_header(10, &settings(2, false));
        assert!(matches!(
            decode_header(&block, &settings(4, false), 1000),
            Err(Mp3StegoError::BitsPerSlotMismatch {
                embedded: 2,
                requested: 4
            })
        ));
    }

    #[test]
    fn cross_cipher_extraction_is_rejected() {
        let block = encode_header(10, &settings(2, true));
        assert!(matches!(
            decode_header(&block, &settings(2, false), 1000),
            Err(Mp3StegoError::CipherFlagMismatch {
                embedded: true,
                requested: false
            })
        ));
    }

    #[test]
    fn oversized_declared_length_is_implausible() {
        let s = settings(2, false);
        let block = encode_header(1001, &s);
        assert!(matches!(
            decode_header(&block, &s, 1000),
            Err(Mp3StegoError::ImplausibleLength {
                declared: 1001,
                usable: 1000
            })
        ));
    }

    #[test]
    fn short_block_is_an_invariant_violation() {
        assert!(matches!(
            decode_header(&[0u8; 8], &settings(2, false), 1000),
            Err(Mp3StegoError::LengthMismatch {
                expected: 16,
                actual: 8
            })
        ));
    }
}
