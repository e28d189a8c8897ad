// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Caesar shift cipher.

/// Apply the Caesar cipher to `text`.
///
/// ASCII letters rotate within their case's 26-letter alphabet; every other
/// character (digits, punctuation, whitespace, non-ASCII) passes through
/// unchanged, so the output always has the same character count as the input.
///
/// `shift` may be negative or larger than 25; it is normalized modulo 26.
/// With `decrypt` set, the inverse rotation is applied, so
/// `caesar(&caesar(t, k, false), k, true) == t` for any `k`.
pub fn caesar(text: &str, shift: i32, decrypt: bool) -> String {
    let s = shift.rem_euclid(26) as u8;
    let s = if decrypt { (26 - s) % 26 } else { s };

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                ((c as u8 - base + s) % 26 + base) as char
            } else {
                c
            }
        })
        .collect()
}
