// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ramscrub_region - Anonymous memory regions with degrading allocation.
//!
//! A [`Region`] wraps one `mmap`'d anonymous private span owned
//! exclusively by its holder and unmapped on drop. [`Region::allocate`]
//! degrades the requested size one page at a time under memory
//! pressure, so a scrub worker tests as much of its share as the
//! system can actually hand out; callers must therefore size every
//! subsequent operation from [`Region::len`], never from the size they
//! asked for.

#![warn(missing_docs)]

mod error;
mod region;


pub use error::RegionError;
pub use region::{PAGE_BYTES, Region, shrink};
