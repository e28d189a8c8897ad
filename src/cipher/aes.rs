// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Passphrase-keyed authenticated encryption.
//!
//! String-in, string-out adapter around AES-256-GCM-SIV with Argon2id key
//! derivation. Each encryption draws a fresh random salt and nonce, so
//! identical inputs produce distinct tokens. The token is the base64
//! encoding of the envelope:
//!
//! ```text
//! [16 bytes] Argon2 salt
//! [12 bytes] AES-GCM-SIV nonce
//! [N bytes ] ciphertext (plaintext_len + 16 bytes for auth tag)
//! ```
//!
//! AES-256-GCM-SIV is chosen over AES-256-GCM for its nonce-misuse
//! resistance, which provides an extra safety margin since the nonce is
//! randomly generated and shipped alongside the ciphertext.

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use argon2::Argon2;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use zeroize::Zeroizing;

use crate::cipher::error::CipherError;

/// Argon2 salt length in bytes.
pub const SALT_LEN: usize = 16;
/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM-SIV authentication tag length in bytes.
const TAG_LEN: usize = 16;

/// Derive the AES-256 key from passphrase + salt.
fn derive_key(passphrase: &str, salt: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut key = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(passphrase.as_bytes(), salt, &mut *key)
        .expect("Argon2 key derivation should not fail");
    key
}

/// Encrypt `plaintext` under a passphrase, returning an opaque base64 token.
///
/// Infallible: key derivation and AEAD encryption cannot fail for any
/// passphrase or plaintext.
pub fn aes_encrypt(plaintext: &str, passphrase: &str) -> String {
    use rand::RngCore;
    let mut rng = rand::thread_rng();

    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256GcmSiv::new_from_slice(&*key).expect("valid key length");
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .expect("AES-GCM-SIV encrypt should not fail");

    let mut envelope = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    BASE64.encode(envelope)
}

/// Decrypt a token produced by [`aes_encrypt`].
///
/// # Errors
/// Returns [`CipherError::DecryptionFailed`] for every failure mode: the
/// token is not valid base64, the envelope is truncated, the authentication
/// tag does not verify (wrong passphrase or corrupted data), or the
/// plaintext is not valid UTF-8. Never panics on attacker-controlled input.
pub fn aes_decrypt(token: &str, passphrase: &str) -> Result<String, CipherError> {
    let envelope = BASE64
        .decode(token.trim())
        .map_err(|_| CipherError::DecryptionFailed)?;
    if envelope.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
        return Err(CipherError::DecryptionFailed);
    }
    let (salt, rest) = envelope.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let key = derive_key(passphrase, salt);
    let cipher = Aes256GcmSiv::new_from_slice(&*key).expect("valid key length");
    let nonce = Nonce::from_slice(nonce_bytes);
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CipherError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| CipherError::DecryptionFailed)
}
