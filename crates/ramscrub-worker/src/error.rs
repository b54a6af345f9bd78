// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ramscrub-worker.

use ramscrub_region::RegionError;
use thiserror::Error;

/// Fatal scrub failures. Neither variant is retried.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ScrubError {
    /// The worker could not obtain any region at or above the minimum
    /// viable size.
    #[error("allocation exhausted: {0}")]
    Allocation(#[from] RegionError),

    /// A stored word did not match the value expected at its address.
    #[error("mismatch at {addr:#x}: expected {expected:#018x}, found {found:#018x}")]
    Mismatch {
        /// Address of the failing word.
        addr: usize,
        /// Word the pattern derives for that address.
        expected: u64,
        /// Word actually read back.
        found: u64,
    },
}
