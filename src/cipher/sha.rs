// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! SHA-256 hashing.

use sha2::{Digest, Sha256};

/// SHA-256 digest of the UTF-8 bytes of `text`, as 64 lowercase hex chars.
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
