// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Error types for the cipher transforms.
//!
//! [`CipherError`] covers all failure modes across the classical engines and
//! the modern-cipher adapter. Every variant is a local, recoverable failure:
//! a retried call with identical inputs yields the identical result.

use std::fmt;

/// Errors that can occur while applying a cipher transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key is empty or malformed for the selected cipher
    /// (e.g. a Vigenère key with non-letters, a non-numeric Caesar shift).
    InvalidKey,
    /// Authenticated decryption failed (wrong passphrase or corrupted token).
    DecryptionFailed,
    /// The simulated-RSA ciphertext does not carry the expected tag pattern.
    MalformedCiphertext,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "invalid or empty key for this cipher"),
            Self::DecryptionFailed => write!(f, "decryption failed (wrong passphrase?)"),
            Self::MalformedCiphertext => write!(f, "ciphertext does not match the expected format"),
        }
    }
}

impl std::error::Error for CipherError {}
