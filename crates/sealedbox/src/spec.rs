//! Static cipher metadata: required key and nonce lengths per algorithm.

use crate::error::SealError;

/// Cipher identifier used when the caller does not pick one.
pub const DEFAULT_CIPHER: &str = "aes-256-ctr";

/// Metadata for one supported cipher algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSpec {
    /// Canonical (lowercase) algorithm name.
    pub name: &'static str,
    /// Required key length in bytes.
    pub key_len: usize,
    /// Nonce/IV length in bytes, as carried in the envelope.
    pub nonce_len: usize,
}

// Stream-style members of the AES / ARIA / Camellia / ChaCha20 / 3DES / SM4
// families. Every entry here is backed by a keystream implementation in
// `stream`; extending the set means adding a row and a dispatch arm, calling
// code stays untouched.
const TABLE: &[CipherSpec] = &[
    CipherSpec { name: "aes-128-ctr", key_len: 16, nonce_len: 16 },
    CipherSpec { name: "aes-192-ctr", key_len: 24, nonce_len: 16 },
    CipherSpec { name: "aes-256-ctr", key_len: 32, nonce_len: 16 },
    CipherSpec { name: "aria-128-ctr", key_len: 16, nonce_len: 16 },
    CipherSpec { name: "aria-192-ctr", key_len: 24, nonce_len: 16 },
    CipherSpec { name: "aria-256-ctr", key_len: 32, nonce_len: 16 },
    CipherSpec { name: "camellia-128-ctr", key_len: 16, nonce_len: 16 },
    CipherSpec { name: "camellia-192-ctr", key_len: 24, nonce_len: 16 },
    CipherSpec { name: "camellia-256-ctr", key_len: 32, nonce_len: 16 },
    CipherSpec { name: "chacha20", key_len: 32, nonce_len: 12 },
    CipherSpec { name: "des-ede3-ofb", key_len: 24, nonce_len: 8 },
    CipherSpec { name: "sm4-ctr", key_len: 16, nonce_len: 16 },
];

/// Look up a cipher by name, case-insensitively.
///
/// # Errors
///
/// [`SealError::UnknownCipher`] when the name has no table entry. There is
/// no fallback cipher.
pub fn lookup(name: &str) -> Result<&'static CipherSpec, SealError> {
    let lowered = name.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|spec| spec.name == lowered)
        .ok_or_else(|| SealError::UnknownCipher(name.to_owned()))
}

/// Required key length in bytes for `name`.
///
/// # Errors
///
/// [`SealError::UnknownCipher`] when the name has no table entry.
pub fn key_length(name: &str) -> Result<usize, SealError> {
    Ok(lookup(name)?.key_len)
}

/// All supported ciphers.
pub fn supported() -> &'static [CipherSpec] {
    TABLE
}
