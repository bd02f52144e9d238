//! Repeating-key stream cipher over the full byte alphabet.
//!
//! A polyalphabetic substitution generalized to bytes: encryption adds the
//! repeating key modulo 256, decryption subtracts it. The transform is
//! length-preserving and applies to payload bytes only, never the header.
//!
//! An empty key is an identity pass, both directions, so embed and extract
//! agree without a special case at the call sites.
//!
//! This is a classical cipher. It obfuscates the payload against casual
//! inspection but offers no cryptographic protection; anyone treating it as
//! a security boundary should encrypt before embedding instead.

/// `out[i] = (data[i] + key[i mod key.len()]) mod 256`
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Vec<u8> {
    transform(plaintext, key, u8::wrapping_add)
}

/// `out[i] = (data[i] - key[i mod key.len()]) mod 256`
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Vec<u8> {
    transform(ciphertext, key, u8::wrapping_sub)
}

fn transform(data: &[u8], key: &[u8], op: fn(u8, u8) -> u8) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(&b, &k)| op(b, k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_for_non_empty_keys() {
        let data: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        for key in [&b"k"[..], b"longer key", &[0xFF, 0x00, 0x80]] {
            assert_eq!(decrypt(&encrypt(&data, key), key), data);
        }
    }

    #[test]
    fn is_length_preserving() {
        for len in [0usize, 1, 15, 1024] {
            let data = vec![0x5Au8; len];
            assert_eq!(encrypt(&data, b"key").len(), len);
        }
    }

    #[test]
    fn empty_key_is_identity() {
        let data = b"plain bytes".to_vec();
        assert_eq!(encrypt(&data, b""), data);
        assert_eq!(decrypt(&data, b""), data);
    }

    #[test]
    fn key_repeats_over_the_data() {
        let data = [10u8, 20, 30, 40];
        let out = encrypt(&data, &[1, 2]);
        assert_eq!(out, vec![11, 22, 31, 42]);
    }

    #[test]
    fn addition_wraps_modulo_256() {
        assert_eq!(encrypt(&[0xFF], &[0x02]), vec![0x01]);
        assert_eq!(decrypt(&[0x01], &[0x02]), vec![0xFF]);
    }

    #[test]
    fn different_keys_give_different_ciphertext() {
        let data = b"same message".to_vec();
        assert_ne!(encrypt(&data, b"alpha"), encrypt(&data, b"beta"));
    }
}
