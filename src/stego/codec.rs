// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! LSB encode/decode over flat RGBA pixel buffers.
//!
//! The buffer is a repeating sequence of R, G, B, Alpha channel bytes
//! (`length == width * height * 4`). Message bits are packed three per pixel
//! into the least-significant bits of the R, G, B channels in order; the
//! Alpha channel is never touched. Bitstream bit `i` lands in buffer slot
//! `(i / 3) * 4 + (i % 3)`.
//!
//! Flipping a channel's LSB changes its value by at most 1, which is
//! visually imperceptible.

use crate::stego::bits::message_to_bits;
use crate::stego::error::StegoError;

/// Channel bytes per pixel in the RGBA layout.
const CHANNELS: usize = 4;
/// Message-carrying channels per pixel (R, G, B).
const USABLE: usize = 3;

/// Maximum message byte length a `width` × `height` image can carry,
/// including the mandatory terminator byte.
///
/// Callers use this for pre-flight validation before [`encode`]: a message
/// of up to `capacity(w, h) - 1` characters fits.
pub fn capacity(width: u32, height: u32) -> usize {
    width as usize * height as usize * USABLE / 8
}

/// Embed `message` into the least-significant bits of `pixels`.
///
/// The buffer is mutated in place as a documented side effect; apart from
/// that, the operation is a pure function of its inputs and holds no state
/// between calls. Alpha channel bytes and the upper 7 bits of every R/G/B
/// byte are preserved exactly.
///
/// # Errors
/// - [`StegoError::MessageTooLarge`] if the bitstream (message + terminator)
///   exceeds the buffer's usable bit count (3 of every 4 slots).
/// - [`StegoError::UnencodableChar`] for NUL or any character above U+00FF.
pub fn encode(pixels: &mut [u8], message: &str) -> Result<(), StegoError> {
    let bits = message_to_bits(message)?;
    if bits.len() > pixels.len() * USABLE / CHANNELS {
        return Err(StegoError::MessageTooLarge);
    }

    for (i, &bit) in bits.iter().enumerate() {
        let slot = i / USABLE * CHANNELS + i % USABLE;
        if bit == 1 {
            pixels[slot] |= 1;
        } else {
            pixels[slot] &= !1;
        }
    }
    Ok(())
}

/// Extract a hidden message from the least-significant bits of `pixels`.
///
/// Walks the buffer in order, skipping every 4th slot (Alpha), and collects
/// LSBs MSB-first into bytes. An all-zero byte terminates the message. If
/// the buffer is exhausted before a terminator appears, whatever accumulated
/// is returned; decoding an image with no hidden message is expected to
/// yield an empty or nonsensical string, never an error.
///
/// Exact inverse of [`encode`] on an unmodified buffer.
pub fn decode(pixels: &[u8]) -> String {
    let mut message = String::new();
    let mut acc = 0u8;
    let mut filled = 0u8;

    for (i, &channel) in pixels.iter().enumerate() {
        if i % CHANNELS == CHANNELS - 1 {
            continue; // Alpha carries no payload
        }
        acc = (acc << 1) | (channel & 1);
        filled += 1;
        if filled == 8 {
            if acc == 0 {
                return message; // terminator
            }
            message.push(char::from(acc));
            acc = 0;
            filled = 0;
        }
    }
    message
}
