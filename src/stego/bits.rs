// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Message-to-bitstream serialization.
//!
//! A hidden message is serialized as each character's 8-bit code point,
//! MSB first, in message order, followed by a single all-zero terminator
//! byte. Only code points 1–255 are representable: the codec spends exactly
//! one byte per character, and NUL is reserved as the terminator, so it can
//! never appear inside a message.

use crate::stego::error::StegoError;

/// Serialize `message` into a bitstream of 0/1 values, terminator included.
///
/// The result always has a length that is a multiple of 8:
/// `(message.chars().count() + 1) * 8`.
///
/// # Errors
/// Returns [`StegoError::UnencodableChar`] for NUL or any character above
/// U+00FF.
pub fn message_to_bits(message: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity((message.chars().count() + 1) * 8);
    for c in message.chars() {
        let code = u32::from(c);
        if code == 0 || code > 0xFF {
            return Err(StegoError::UnencodableChar(c));
        }
        push_byte(&mut bits, code as u8);
    }
    push_byte(&mut bits, 0); // terminator
    Ok(bits)
}

/// Append `byte` to `bits` MSB-first.
fn push_byte(bits: &mut Vec<u8>, byte: u8) {
    for pos in (0..8).rev() {
        bits.push((byte >> pos) & 1);
    }
}
