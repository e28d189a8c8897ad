// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Cipher transforms: the classical engines and the modern-cipher adapter.
//!
//! Three classical ciphers ([`caesar`], [`vigenere`], [`rail_fence`]) operate
//! per ASCII letter with everything else passing through. The modern adapter
//! wraps AES-256-GCM-SIV (`aes`), SHA-256 (`sha`) and an explicitly-labeled
//! RSA *simulation* (`rsa_sim`). All functions are stateless: every call is a
//! pure function of its arguments.
//!
//! Hosts that select a cipher at runtime go through [`Method`] and [`apply`]
//! instead of dispatching on strings; the match is exhaustive, so adding a
//! variant without wiring it up is a compile error.

pub mod aes;
pub mod caesar;
pub mod error;
pub mod railfence;
pub mod rsa_sim;
pub mod sha;
pub mod vigenere;

pub use aes::{aes_decrypt, aes_encrypt};
pub use caesar::caesar;
pub use error::CipherError;
pub use railfence::rail_fence;
pub use sha::sha256_hex;
pub use vigenere::vigenere;

/// A cipher transform selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Caesar,
    Vigenere,
    RailFence,
    Aes,
    Sha256,
    RsaSim,
}

impl Method {
    /// Look up a method by its host-side identifier.
    pub fn from_name(name: &str) -> Option<Method> {
        match name {
            "caesar" => Some(Method::Caesar),
            "vigenere" => Some(Method::Vigenere),
            "railfence" => Some(Method::RailFence),
            "aes" => Some(Method::Aes),
            "sha256" => Some(Method::Sha256),
            "rsa" => Some(Method::RsaSim),
            _ => None,
        }
    }

    /// The host-side identifier of this method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Caesar => "caesar",
            Method::Vigenere => "vigenere",
            Method::RailFence => "railfence",
            Method::Aes => "aes",
            Method::Sha256 => "sha256",
            Method::RsaSim => "rsa",
        }
    }
}

/// Apply the selected cipher to `text`.
///
/// `key` is interpreted per method: an integer shift for [`Method::Caesar`],
/// a rail count for [`Method::RailFence`], a letter key for
/// [`Method::Vigenere`], a passphrase for [`Method::Aes`], and a demo key
/// for [`Method::RsaSim`]. [`Method::Sha256`] ignores both `key` and
/// `decrypt`, since hashing has no key and no inverse.
///
/// # Errors
/// - [`CipherError::InvalidKey`] if a numeric key does not parse, or the
///   Vigenère key is empty/non-alphabetic.
/// - [`CipherError::DecryptionFailed`] from AES decryption.
/// - [`CipherError::MalformedCiphertext`] from simulated-RSA decryption.
pub fn apply(method: Method, text: &str, key: &str, decrypt: bool) -> Result<String, CipherError> {
    match method {
        Method::Caesar => {
            let shift: i32 = key.trim().parse().map_err(|_| CipherError::InvalidKey)?;
            Ok(caesar(text, shift, decrypt))
        }
        Method::Vigenere => vigenere(text, key, decrypt),
        Method::RailFence => {
            let rails: usize = key.trim().parse().map_err(|_| CipherError::InvalidKey)?;
            Ok(rail_fence(text, rails, decrypt))
        }
        Method::Aes => {
            if decrypt {
                aes_decrypt(text, key)
            } else {
                Ok(aes_encrypt(text, key))
            }
        }
        Method::Sha256 => Ok(sha256_hex(text)),
        Method::RsaSim => {
            if decrypt {
                rsa_sim::decrypt(text, key)
            } else {
                Ok(rsa_sim::encrypt(text, key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_caesar() {
        assert_eq!(apply(Method::Caesar, "abc", "3", false).unwrap(), "def");
        assert_eq!(apply(Method::Caesar, "def", "3", true).unwrap(), "abc");
        assert_eq!(apply(Method::Caesar, "abc", " -1 ", false).unwrap(), "zab");
    }

    #[test]
    fn dispatch_rail_fence() {
        let enc = apply(Method::RailFence, "abcdef", "2", false).unwrap();
        assert_eq!(enc, "acebdf");
        assert_eq!(apply(Method::RailFence, &enc, "2", true).unwrap(), "abcdef");
    }

    #[test]
    fn dispatch_vigenere() {
        let enc = apply(Method::Vigenere, "ATTACKATDAWN", "LEMON", false).unwrap();
        assert_eq!(enc, "LXFOPVEFRNHR");
    }

    #[test]
    fn dispatch_aes_roundtrip() {
        let token = apply(Method::Aes, "payload", "pass", false).unwrap();
        assert_eq!(apply(Method::Aes, &token, "pass", true).unwrap(), "payload");
    }

    #[test]
    fn dispatch_sha256_ignores_key_and_direction() {
        let a = apply(Method::Sha256, "text", "ignored", false).unwrap();
        let b = apply(Method::Sha256, "text", "", true).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn dispatch_rsa_sim() {
        let ct = apply(Method::RsaSim, "msg", rsa_sim::PUBLIC_KEY, false).unwrap();
        assert_eq!(
            apply(Method::RsaSim, &ct, rsa_sim::PRIVATE_KEY, true).unwrap(),
            "msg"
        );
    }

    #[test]
    fn malformed_numeric_keys_rejected() {
        assert!(matches!(
            apply(Method::Caesar, "abc", "three", false),
            Err(CipherError::InvalidKey)
        ));
        assert!(matches!(
            apply(Method::Caesar, "abc", "", false),
            Err(CipherError::InvalidKey)
        ));
        assert!(matches!(
            apply(Method::RailFence, "abc", "2.5", false),
            Err(CipherError::InvalidKey)
        ));
    }

    #[test]
    fn method_names_roundtrip() {
        for method in [
            Method::Caesar,
            Method::Vigenere,
            Method::RailFence,
            Method::Aes,
            Method::Sha256,
            Method::RsaSim,
        ] {
            assert_eq!(Method::from_name(method.name()), Some(method));
        }
        assert_eq!(Method::from_name("rot13"), None);
    }
}
