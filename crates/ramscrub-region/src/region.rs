// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Region - Owned anonymous memory span with degrading allocation.
//!
//! Wraps a single mmap'd span. `map` is one raw attempt; `allocate`
//! retries with progressively smaller sizes until it succeeds or the
//! size drops below one page.

use core::ptr;

use tracing::warn;

use super::error::RegionError;

/// Shrink decrement and minimum viable region size.
pub const PAGE_BYTES: usize = 4096;

/// Returns the next size to attempt after `len` failed, or `None` once
/// the degraded size falls below one page.
///
/// The returned size is always strictly smaller than `len`, so the
/// attempt sequence is strictly decreasing and terminates.
#[must_use]
pub const fn shrink(len: usize) -> Option<usize> {
    let next = len.saturating_sub(PAGE_BYTES);

    if next < PAGE_BYTES { None } else { Some(next) }
}

/// An owned, page-aligned, anonymous private memory span.
///
/// Exclusively owned by its holder; unmapped on drop. Never shared
/// between workers.
#[derive(Debug)]
pub struct Region {
    ptr: *mut u8,
    len: usize,
}

// Safety: Region exclusively owns its mapping; mutation requires &mut.
unsafe impl Send for Region {}
unsafe impl Sync for Region {}

impl Region {
    /// Maps a zero-initialized anonymous private span of exactly `len`
    /// bytes. One attempt, no fallback.
    pub fn map(len: usize) -> Result<Self, RegionError> {
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(RegionError::Map);
        }

        Ok(Self {
            ptr: ptr as *mut u8,
            len,
        })
    }

    /// Allocates a span of up to `requested` bytes, degrading the size
    /// one page per failed attempt.
    ///
    /// The returned region may be smaller than requested; callers must
    /// use [`Region::len`] for all subsequent operations. Fails with
    /// [`RegionError::Exhausted`] once the degraded size falls below
    /// one page.
    pub fn allocate(requested: usize) -> Result<Self, RegionError> {
        let mut len = requested;

        loop {
            match Self::map(len) {
                Ok(region) => return Ok(region),
                Err(_) => match shrink(len) {
                    Some(smaller) => {
                        warn!(bytes = smaller, "mmap failed, retrying with smaller region");
                        len = smaller;
                    }
                    None => return Err(RegionError::Exhausted),
                },
            }
        }
    }

    /// Length of the mapping in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the mapping has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base address of the mapping.
    #[must_use]
    pub fn base_addr(&self) -> usize {
        self.ptr as usize
    }

    /// Word view of the mapping. Trailing bytes beyond the last whole
    /// word are not covered.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        // mmap returns page-aligned memory, so the base is u64-aligned.
        unsafe { core::slice::from_raw_parts(self.ptr as *const u64, self.len / size_of::<u64>()) }
    }

    /// Mutable word view of the mapping.
    #[must_use]
    pub fn as_words_mut(&mut self) -> &mut [u64] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr as *mut u64, self.len / size_of::<u64>()) }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        unsafe { libc::munmap(self.ptr as *mut libc::c_void, self.len) };
    }
}
