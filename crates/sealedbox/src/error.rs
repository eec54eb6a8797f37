//! Errors produced by the envelope layer.

use thiserror::Error;

/// Everything that can go wrong while sealing or opening an envelope.
///
/// Any variant means "do not trust this data". [`SealError::AuthenticationFailed`]
/// covers both a tampered envelope and a wrong key — the two are
/// indistinguishable on purpose, so a caller (or an attacker) cannot learn
/// which one occurred.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SealError {
    /// The cipher name has no entry in the [`CipherSpec`](crate::CipherSpec)
    /// table.
    #[error("unknown cipher algorithm: {0}")]
    UnknownCipher(String),

    /// The key has the wrong length for the chosen cipher.
    #[error("invalid key length for {cipher}: expected {expected} bytes")]
    InvalidKeyLength {
        /// Canonical cipher name.
        cipher: String,
        /// Required key length in bytes.
        expected: usize,
    },

    /// The recomputed authentication tag does not match the transmitted one.
    /// No plaintext, even partial, is released on this path.
    #[error("envelope authentication failed")]
    AuthenticationFailed,

    /// The token is not valid Base64 or is too short to hold a nonce and a
    /// tag.
    #[error("malformed envelope")]
    MalformedEnvelope,
}
