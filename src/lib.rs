// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! # cipherlab-core
//!
//! Pure-Rust core for an interactive cryptography lab. Three independent
//! engines, invoked with plain values and returning plain values:
//!
//! - **Classical ciphers** (`cipher` module): Caesar, Vigenère and Rail
//!   Fence, each an encrypt/decrypt pair that round-trips exactly.
//! - **Modern-cipher adapter**: passphrase-keyed AES-256-GCM-SIV with
//!   Argon2id key derivation, SHA-256 hashing, and an explicitly-labeled
//!   RSA *simulation* stub (no confidentiality, pedagogy only).
//! - **LSB steganography** (`stego` module): hide a text message in the
//!   least-significant bits of a flat RGBA pixel buffer, three bits per
//!   pixel, Alpha untouched.
//!
//! Everything is synchronous and stateless: the crate owns no buffers,
//! caches nothing between calls, and performs no I/O. Presentation, image
//! acquisition and key storage are the host's concern.
//!
//! # Quick start
//!
//! ```rust
//! use cipherlab_core::{caesar, stego_encode, stego_decode};
//!
//! let secret = caesar("attack at dawn", 3, false);
//! assert_eq!(caesar(&secret, 3, true), "attack at dawn");
//!
//! // 8x8 RGBA image, all-zero pixels.
//! let mut pixels = vec![0u8; 8 * 8 * 4];
//! stego_encode(&mut pixels, "hi").unwrap();
//! assert_eq!(stego_decode(&pixels), "hi");
//! ```

pub mod cipher;
pub mod stego;

pub use cipher::{aes_decrypt, aes_encrypt, apply, caesar, rail_fence, sha256_hex, vigenere};
pub use cipher::{rsa_sim, CipherError, Method};
pub use stego::codec::{capacity as stego_capacity, decode as stego_decode, encode as stego_encode};
pub use stego::StegoError;
