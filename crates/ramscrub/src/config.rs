// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Run configuration - validated once at startup, immutable after.

use thiserror::Error;

use ramscrub_worker::WorkerDescriptor;

/// Upper bound on the worker count. A validated configuration bound,
/// not a storage limit.
pub const MAX_WORKERS: usize = 32;

/// Rejected run configurations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    /// Worker count outside `1..=MAX_WORKERS`.
    #[error("worker count must be between 1 and {MAX_WORKERS}, got {0}")]
    WorkerCount(usize),

    /// Zero bytes requested.
    #[error("total bytes to test must be positive")]
    NoMemory,

    /// Total too small to give every worker at least one word.
    #[error("{total} bytes across {workers} workers leaves shares below one word")]
    ShareTooSmall {
        /// Total bytes requested.
        total: usize,
        /// Requested worker count.
        workers: usize,
    },
}

/// Validated (total bytes, worker count) pair.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunConfig {
    total_bytes: usize,
    workers: usize,
}

impl RunConfig {
    /// Validates and freezes a configuration.
    pub fn new(total_bytes: usize, workers: usize) -> Result<Self, ConfigError> {
        if workers == 0 || workers > MAX_WORKERS {
            return Err(ConfigError::WorkerCount(workers));
        }

        if total_bytes == 0 {
            return Err(ConfigError::NoMemory);
        }

        if total_bytes / workers < size_of::<u64>() {
            return Err(ConfigError::ShareTooSmall {
                total: total_bytes,
                workers,
            });
        }

        Ok(Self {
            total_bytes,
            workers,
        })
    }

    /// Total bytes to test.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Number of workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Splits the total evenly across workers.
    ///
    /// The last worker also receives the division remainder, so the
    /// shares sum to exactly the total and no byte goes silently
    /// untested.
    #[must_use]
    pub fn partition(&self) -> Vec<WorkerDescriptor> {
        let share = self.total_bytes / self.workers;
        let remainder = self.total_bytes % self.workers;

        (0..self.workers)
            .map(|index| WorkerDescriptor {
                index,
                share_bytes: if index == self.workers - 1 {
                    share + remainder
                } else {
                    share
                },
            })
            .collect()
    }
}
