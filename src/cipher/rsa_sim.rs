// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! RSA simulation stub.
//!
//! **This is not RSA and provides no confidentiality whatsoever.** It is a
//! pedagogical placeholder that demonstrates the *shape* of asymmetric
//! encryption (a public-key encrypt, a private-key decrypt, and ciphertext
//! bound to the key that produced it) by wrapping the plaintext in a tagged
//! string. The plaintext is visible in the "ciphertext". Anything that must
//! actually be kept secret belongs in
//! [`aes_encrypt`](crate::cipher::aes::aes_encrypt).
//!
//! Decryption only succeeds against ciphertext carrying the exact tag
//! pattern produced by [`encrypt`] under the fixed demo public key.

use crate::cipher::error::CipherError;

/// Fixed demo public key.
pub const PUBLIC_KEY: &str = "PU_KEY_8372";
/// Fixed demo private key.
pub const PRIVATE_KEY: &str = "PR_KEY_1928";

const TAG_PREFIX: &str = "RSA-ENC(";

/// A simulated key pair. The keys are fixed demo strings, not key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub public: &'static str,
    pub private: &'static str,
}

/// Return the fixed demo key pair.
pub fn generate_keys() -> KeyPair {
    KeyPair {
        public: PUBLIC_KEY,
        private: PRIVATE_KEY,
    }
}

/// Wrap `text` in the simulated-RSA tag pattern for `public_key`.
pub fn encrypt(text: &str, public_key: &str) -> String {
    format!("{TAG_PREFIX}{text})-BY-{public_key}")
}

/// Unwrap ciphertext produced by [`encrypt`] under the demo public key.
///
/// The private key is accepted for interface symmetry but not consulted;
/// the simulation has no key material to verify against.
///
/// # Errors
/// Returns [`CipherError::MalformedCiphertext`] if the input does not carry
/// the exact `RSA-ENC(...)-BY-PU_KEY_8372` tag pattern, including ciphertext
/// produced under a foreign public key.
pub fn decrypt(ciphertext: &str, _private_key: &str) -> Result<String, CipherError> {
    let suffix = format!(")-BY-{PUBLIC_KEY}");
    ciphertext
        .strip_prefix(TAG_PREFIX)
        .and_then(|rest| rest.strip_suffix(suffix.as_str()))
        .map(str::to_string)
        .ok_or(CipherError::MalformedCiphertext)
}
