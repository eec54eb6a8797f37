//! Key generation sized by the cipher table.

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::error::SealError;
use crate::spec;

// Printable, shell- and clipboard-safe characters. Sampling from 92 symbols
// costs ~1.5 bits of entropy per byte versus raw bytes; `generate_key_bytes`
// is the dense alternative.
const KEY_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_[]{}<>~`+=,.;:/?|";

/// Generate a printable key of exactly the length `cipher_name` requires.
///
/// Each character is drawn uniformly from a 92-symbol alphabet via the OS
/// CSPRNG, favoring a human-transportable string over maximum entropy
/// density.
///
/// # Errors
///
/// [`SealError::UnknownCipher`] when the name has no table entry.
pub fn generate_key(cipher_name: &str) -> Result<String, SealError> {
    let len = spec::key_length(cipher_name)?;
    let mut key = String::with_capacity(len);
    for _ in 0..len {
        let i = OsRng.gen_range(0..KEY_ALPHABET.len());
        key.push(KEY_ALPHABET[i] as char);
    }
    Ok(key)
}

/// Generate a raw random key of exactly the length `cipher_name` requires.
///
/// Full-entropy alternative to [`generate_key`] for callers that store keys
/// as bytes rather than pass them around as text.
///
/// # Errors
///
/// [`SealError::UnknownCipher`] when the name has no table entry.
pub fn generate_key_bytes(cipher_name: &str) -> Result<Vec<u8>, SealError> {
    let len = spec::key_length(cipher_name)?;
    let mut key = vec![0u8; len];
    OsRng.fill_bytes(&mut key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::supported;

    #[test]
    fn keys_match_the_required_length_for_every_cipher() {
        for cipher in supported() {
            assert_eq!(
                generate_key(cipher.name).unwrap().len(),
                cipher.key_len,
                "printable key length for {}",
                cipher.name
            );
            assert_eq!(
                generate_key_bytes(cipher.name).unwrap().len(),
                cipher.key_len,
                "raw key length for {}",
                cipher.name
            );
        }
    }

    #[test]
    fn printable_keys_stay_inside_the_alphabet() {
        let key = generate_key("aes-256-ctr").unwrap();
        assert!(key.bytes().all(|b| KEY_ALPHABET.contains(&b)));
    }

    #[test]
    fn unknown_cipher_is_rejected() {
        assert!(generate_key("not-a-cipher").is_err());
        assert!(generate_key_bytes("not-a-cipher").is_err());
    }

    #[test]
    fn successive_keys_differ() {
        let a = generate_key("aes-256-ctr").unwrap();
        let b = generate_key("aes-256-ctr").unwrap();
        assert_ne!(a, b);
    }
}
