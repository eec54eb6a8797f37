//! Tamper-evident symmetric encryption envelopes.
//!
//! [`encrypt`] turns plaintext bytes into a single opaque Base64 token;
//! [`decrypt`] verifies and reverses it, failing closed on any corruption.
//! The construction is encrypt-then-MAC over a caller-chosen stream cipher:
//! the authentication tag is computed over the ciphertext, so the decrypt
//! path never runs the cipher over data that has not been verified.
//!
//! # Envelope format
//!
//! ```text
//! base64( nonce ‖ tag ‖ ciphertext )
//!
//! offset 0 .. N-1      nonce        (N = CipherSpec.nonce_len, fresh per call)
//! offset N .. N+31     tag          (HMAC-SHA3-256 over ciphertext, 32 bytes)
//! offset N+32 .. end   ciphertext   (same length as the plaintext)
//! ```
//!
//! The nonce travels in the clear — it is not a secret, it only has to be
//! unique per encryption under a given key, which is guaranteed structurally
//! by drawing it from the OS CSPRNG on every call (it is never
//! caller-supplied).
//!
//! # Ciphers
//!
//! Supported algorithms live in a static [`CipherSpec`] table (see
//! [`spec`]); names are matched case-insensitively and an unknown name is a
//! hard [`SealError::UnknownCipher`], never a silent default. The default is
//! [`DEFAULT_CIPHER`] (`aes-256-ctr`).
//!
//! ```
//! use sealedbox::{decrypt, encrypt, generate_key};
//!
//! let key = generate_key(sealedbox::DEFAULT_CIPHER)?;
//! let token = encrypt(b"attack at dawn", key.as_bytes())?;
//! let plaintext = decrypt(&token, key.as_bytes())?;
//! assert_eq!(plaintext, b"attack at dawn");
//! # Ok::<(), sealedbox::SealError>(())
//! ```

pub mod envelope;
pub mod error;
pub mod keygen;
pub mod spec;

mod stream;

pub use envelope::{decrypt, decrypt_with, encrypt, encrypt_with, TAG_LEN};
pub use error::SealError;
pub use keygen::{generate_key, generate_key_bytes};
pub use spec::{key_length, CipherSpec, DEFAULT_CIPHER};
