//! Sealing and opening: encrypt-then-MAC over a stream cipher.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha3::Sha3_256;

use crate::error::SealError;
use crate::spec::{self, DEFAULT_CIPHER};
use crate::stream;

/// Authentication tag length in bytes — fixed across all ciphers, which
/// pins the wire format to a hash with a native 32-byte output.
pub const TAG_LEN: usize = 32;

type HmacSha3 = Hmac<Sha3_256>;

/// Seal `plaintext` under `key` with the default cipher
/// ([`DEFAULT_CIPHER`]).
///
/// # Errors
///
/// See [`encrypt_with`].
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<String, SealError> {
    encrypt_with(plaintext, key, DEFAULT_CIPHER)
}

/// Seal `plaintext` under `key` with a named cipher, producing a Base64
/// envelope token.
///
/// A fresh random nonce is drawn from the OS CSPRNG on every call, so
/// sealing the same plaintext twice yields different tokens. The
/// authentication tag covers the ciphertext only; the nonce is carried in
/// the clear ahead of it.
///
/// # Errors
///
/// [`SealError::UnknownCipher`] if `cipher_name` has no table entry;
/// [`SealError::InvalidKeyLength`] if `key` does not fit the cipher.
pub fn encrypt_with(plaintext: &[u8], key: &[u8], cipher_name: &str) -> Result<String, SealError> {
    let cipher = spec::lookup(cipher_name)?;

    let mut nonce = vec![0u8; cipher.nonce_len];
    OsRng.fill_bytes(&mut nonce);

    let mut ciphertext = plaintext.to_vec();
    stream::apply_keystream(cipher, key, &nonce, &mut ciphertext)?;

    let tag = authenticate(key, &ciphertext);

    let mut raw = Vec::with_capacity(cipher.nonce_len + TAG_LEN + ciphertext.len());
    raw.extend_from_slice(&nonce);
    raw.extend_from_slice(&tag);
    raw.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(raw))
}

/// Open a token sealed with [`encrypt`].
///
/// # Errors
///
/// See [`decrypt_with`].
pub fn decrypt(token: &str, key: &[u8]) -> Result<Vec<u8>, SealError> {
    decrypt_with(token, key, DEFAULT_CIPHER)
}

/// Open a token sealed with [`encrypt_with`], returning the plaintext
/// bytes.
///
/// The tag is recomputed and compared in constant time before the cipher
/// runs; a mismatch releases nothing, not even partial plaintext.
///
/// # Errors
///
/// [`SealError::MalformedEnvelope`] if the token is not Base64 or is too
/// short to hold a nonce and tag; [`SealError::UnknownCipher`] if
/// `cipher_name` has no table entry; [`SealError::AuthenticationFailed`] if
/// the tag does not verify (tampered data or wrong key — indistinguishable);
/// [`SealError::InvalidKeyLength`] if `key` does not fit the cipher.
pub fn decrypt_with(token: &str, key: &[u8], cipher_name: &str) -> Result<Vec<u8>, SealError> {
    let raw = STANDARD
        .decode(token)
        .map_err(|_| SealError::MalformedEnvelope)?;
    let cipher = spec::lookup(cipher_name)?;

    if raw.len() < cipher.nonce_len + TAG_LEN {
        return Err(SealError::MalformedEnvelope);
    }
    let (nonce, rest) = raw.split_at(cipher.nonce_len);
    let (tag, ciphertext) = rest.split_at(TAG_LEN);

    // Verify (constant-time) before the cipher touches anything.
    let mut mac = new_mac(key);
    mac.update(ciphertext);
    mac.verify_slice(tag)
        .map_err(|_| SealError::AuthenticationFailed)?;

    let mut plaintext = ciphertext.to_vec();
    stream::apply_keystream(cipher, key, nonce, &mut plaintext)?;
    Ok(plaintext)
}

fn new_mac(key: &[u8]) -> HmacSha3 {
    // HMAC accepts keys of any length.
    HmacSha3::new_from_slice(key).expect("HMAC accepts any key length")
}

fn authenticate(key: &[u8], ciphertext: &[u8]) -> [u8; TAG_LEN] {
    let mut mac = new_mac(key);
    mac.update(ciphertext);
    mac.finalize().into_bytes().into()
}
