//! Keystream dispatch: one arm per table entry in [`crate::spec`].

use aes::{Aes128, Aes192, Aes256};
use aria::{Aria128, Aria192, Aria256};
use camellia::{Camellia128, Camellia192, Camellia256};
use chacha20::ChaCha20;
use cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use des::TdesEde3;
use ofb::Ofb;
use sm4::Sm4;

use crate::error::SealError;
use crate::spec::CipherSpec;

/// XOR the keystream for `spec` into `data` in place.
///
/// Stream and counter modes are their own inverse, so the same call both
/// encrypts and decrypts. `nonce` must be `spec.nonce_len` bytes (callers
/// size it from the same table entry).
///
/// # Errors
///
/// [`SealError::InvalidKeyLength`] if `key` is not `spec.key_len` bytes.
pub(crate) fn apply_keystream(
    spec: &CipherSpec,
    key: &[u8],
    nonce: &[u8],
    data: &mut [u8],
) -> Result<(), SealError> {
    match spec.name {
        "aes-128-ctr" => xor::<Ctr128BE<Aes128>>(spec, key, nonce, data),
        "aes-192-ctr" => xor::<Ctr128BE<Aes192>>(spec, key, nonce, data),
        "aes-256-ctr" => xor::<Ctr128BE<Aes256>>(spec, key, nonce, data),
        "aria-128-ctr" => xor::<Ctr128BE<Aria128>>(spec, key, nonce, data),
        "aria-192-ctr" => xor::<Ctr128BE<Aria192>>(spec, key, nonce, data),
        "aria-256-ctr" => xor::<Ctr128BE<Aria256>>(spec, key, nonce, data),
        "camellia-128-ctr" => xor::<Ctr128BE<Camellia128>>(spec, key, nonce, data),
        "camellia-192-ctr" => xor::<Ctr128BE<Camellia192>>(spec, key, nonce, data),
        "camellia-256-ctr" => xor::<Ctr128BE<Camellia256>>(spec, key, nonce, data),
        "chacha20" => xor::<ChaCha20>(spec, key, nonce, data),
        "des-ede3-ofb" => xor::<Ofb<TdesEde3>>(spec, key, nonce, data),
        "sm4-ctr" => xor::<Ctr128BE<Sm4>>(spec, key, nonce, data),
        other => Err(SealError::UnknownCipher(other.to_owned())),
    }
}

fn xor<C: KeyIvInit + StreamCipher>(
    spec: &CipherSpec,
    key: &[u8],
    nonce: &[u8],
    data: &mut [u8],
) -> Result<(), SealError> {
    let mut cipher = C::new_from_slices(key, nonce).map_err(|_| SealError::InvalidKeyLength {
        cipher: spec.name.to_owned(),
        expected: spec.key_len,
    })?;
    cipher.apply_keystream(data);
    Ok(())
}
