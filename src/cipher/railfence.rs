// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab-core

//! Rail Fence transposition cipher.
//!
//! Characters are written in a zig-zag across a fixed number of rails,
//! bouncing at the top and bottom rail, then read off rail by rail.
//! Decryption reconstructs the zig-zag positions, fills them rail-major with
//! the ciphertext, and re-traces the original path.

/// Rail index for each character position along the zig-zag walk.
///
/// Requires `rails >= 2`; the walk bounces at rail 0 and rail `rails - 1`.
fn rail_pattern(len: usize, rails: usize) -> Vec<usize> {
    debug_assert!(rails >= 2);
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..len {
        pattern.push(rail);
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == 0 || rail == rails - 1 {
            down = rail == 0;
        }
    }
    pattern
}

/// Apply the Rail Fence cipher to `text`.
///
/// `rails < 2` returns the input unchanged: a single rail (or none) is the
/// identity transposition, not an error. Operates on characters, so
/// multi-byte text transposes intact.
///
/// `rail_fence(&rail_fence(t, r, false), r, true) == t` for all `r >= 2`.
pub fn rail_fence(text: &str, rails: usize, decrypt: bool) -> String {
    if rails < 2 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let pattern = rail_pattern(chars.len(), rails);

    if !decrypt {
        let mut fence = vec![String::new(); rails];
        for (&rail, &c) in pattern.iter().zip(&chars) {
            fence[rail].push(c);
        }
        fence.concat()
    } else {
        // Fill the marked positions rail-major with the ciphertext characters,
        // then read the grid back along the original positions.
        let mut grid: Vec<Option<char>> = vec![None; chars.len()];
        let mut source = chars.iter().copied();
        for rail in 0..rails {
            for (slot, &r) in grid.iter_mut().zip(&pattern) {
                if r == rail {
                    *slot = source.next();
                }
            }
        }
        grid.into_iter().flatten().collect()
    }
}
