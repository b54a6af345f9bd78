// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ramscrub_pattern - Address-derived reversible bit-pattern.
//!
//! Maps a memory address to the word expected at that address and back.
//! The expected word is a pure function of the address alone, so a
//! corrupted word can never cascade into false positives elsewhere:
//! verification re-derives the expectation from the address being read,
//! never from previously read values.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


/// XOR operand applied to every address.
///
/// Alternating bits make the expected word differ from zeroed or
/// stuck-at garbage, and XOR with a constant is a bijection, so two
/// distinct addresses never share an expected word. Address-decoding
/// faults (a write landing at the wrong address) therefore surface as
/// mismatches too.
pub const XOR_OPERAND: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Returns the word expected at `addr`.
#[inline(always)]
#[must_use]
pub const fn expected(addr: usize) -> u64 {
    addr as u64 ^ XOR_OPERAND
}

/// Returns true if `word` is the value expected at `addr`.
#[inline(always)]
#[must_use]
pub const fn matches(addr: usize, word: u64) -> bool {
    word == expected(addr)
}
