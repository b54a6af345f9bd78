// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Progress events emitted by scrub workers.

use core::fmt;
use std::sync::mpsc;

/// Phase a worker is currently in.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Writing the pattern across the region.
    Filling,
    /// Re-reading and comparing every word.
    Verifying,
    /// Verification completed with zero mismatches.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Filling => f.write_str("Filling buffer"),
            Phase::Verifying => f.write_str("Verifying"),
            Phase::Done => f.write_str("Done"),
        }
    }
}

/// A phase-tagged percent-complete notification from one worker.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ProgressEvent {
    /// Index of the emitting worker.
    pub worker: usize,
    /// Percent complete, truncated to an integer in 0..=100.
    pub percent: u8,
    /// Phase the worker was in when the event fired.
    pub phase: Phase,
}

/// Consumer of progress events.
///
/// Reporting is best-effort; a sink must never block the scrub pass.
pub trait ProgressSink {
    /// Delivers one event.
    fn report(&self, event: ProgressEvent);
}

impl ProgressSink for mpsc::Sender<ProgressEvent> {
    fn report(&self, event: ProgressEvent) {
        // A vanished consumer must not fail the scrub pass.
        let _ = self.send(event);
    }
}
