// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! LSB steganography over RGBA pixel buffers.
//!
//! Hides a text message in the least-significant bits of a flat RGBA buffer:
//! [`encode`] packs the message bitstream (8 bits per character plus an
//! all-zero terminator byte) three bits per pixel into the R, G, B channels,
//! [`decode`] walks the same path back, and [`capacity`] tells callers up
//! front how many bytes a given image can carry.
//!
//! None of the operations hold state across calls. `encode` mutates its
//! buffer argument as an explicit, documented side effect; callers must
//! serialize encode/decode per buffer instance, as no internal locking is
//! provided.

pub mod bits;
pub mod codec;
pub mod error;

pub use codec::{capacity, decode, encode};
pub use error::StegoError;
