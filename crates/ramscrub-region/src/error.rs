// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ramscrub-region.

use thiserror::Error;

/// Errors from region syscalls and the degrading allocation loop.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RegionError {
    /// A single `mmap` attempt failed.
    #[error("mmap failed")]
    Map,

    /// Every attempt failed down to the minimum viable size.
    #[error("not enough memory")]
    Exhausted,
}
