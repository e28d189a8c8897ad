// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Vigenère polyalphabetic cipher.
//!
//! The key index advances only when a letter character is processed, so
//! punctuation and whitespace pass through without consuming a key position.
//! Both sides must agree on this, otherwise decryption drifts out of phase
//! as soon as the text contains a non-letter.

use crate::cipher::error::CipherError;

/// Apply the Vigenère cipher to `text`.
///
/// The key must be non-empty and consist solely of ASCII letters; it is
/// lower-cased before use. Case of the input text is preserved, and
/// non-letter characters pass through unchanged.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains a
/// non-letter character.
pub fn vigenere(text: &str, key: &str, decrypt: bool) -> Result<String, CipherError> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CipherError::InvalidKey);
    }
    let key: Vec<u8> = key.bytes().map(|b| b.to_ascii_lowercase() - b'a').collect();

    let mut out = String::with_capacity(text.len());
    let mut key_index = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
            let text_val = c.to_ascii_lowercase() as u8 - b'a';
            let key_val = key[key_index % key.len()];
            let rotated = if decrypt {
                (text_val + 26 - key_val) % 26
            } else {
                (text_val + key_val) % 26
            };
            out.push((base + rotated) as char);
            key_index += 1;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_vector() {
        // The textbook LEMON example.
        let enc = vigenere("ATTACKATDAWN", "LEMON", false).unwrap();
        assert_eq!(enc, "LXFOPVEFRNHR");
        assert_eq!(vigenere(&enc, "LEMON", true).unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn key_case_insensitive() {
        let upper = vigenere("attackatdawn", "LEMON", false).unwrap();
        let lower = vigenere("attackatdawn", "lemon", false).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn non_letters_do_not_consume_key() {
        // Same letters with punctuation interleaved must encrypt to the same
        // letter sequence as the compact form.
        let compact = vigenere("attackatdawn", "lemon", false).unwrap();
        let spaced = vigenere("attack at dawn!", "lemon", false).unwrap();
        let spaced_letters: String = spaced.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        assert_eq!(spaced_letters, compact);
        assert!(spaced.contains(' ') && spaced.ends_with('!'));
    }

    #[test]
    fn case_preserved() {
        let enc = vigenere("Attack At Dawn", "lemon", false).unwrap();
        assert_eq!(enc, "Lxfopv Ef Rnhr");
    }

    #[test]
    fn empty_key_rejected() {
        assert!(matches!(vigenere("text", "", false), Err(CipherError::InvalidKey)));
    }

    #[test]
    fn non_alphabetic_key_rejected() {
        assert!(matches!(vigenere("text", "k3y", false), Err(CipherError::InvalidKey)));
        assert!(matches!(vigenere("text", "a b", true), Err(CipherError::InvalidKey)));
    }

    #[test]
    fn roundtrip_mixed_text() {
        let text = "Meet me at 10:30 — bring the USB stick (both of them)!";
        for key in ["k", "cipher", "LongerKeyThanTheText"] {
            let enc = vigenere(text, key, false).unwrap();
            assert_eq!(vigenere(&enc, key, true).unwrap(), text, "key {key}");
        }
    }

    #[test]
    fn empty_text() {
        assert_eq!(vigenere("", "key", false).unwrap(), "");
    }
}
