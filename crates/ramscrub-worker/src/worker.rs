// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scrub pass - fill then verify one owned region.

use tracing::debug;

use ramscrub_pattern::expected;
use ramscrub_region::Region;

use super::error::ScrubError;
use super::progress::{Phase, ProgressEvent, ProgressSink};
use super::timer::{REPORT_INTERVAL, ReportTimer};

/// Immutable description of one worker's assignment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WorkerDescriptor {
    /// Worker index in `[0, worker_count)`.
    pub index: usize,
    /// Bytes this worker should try to allocate and scrub.
    pub share_bytes: usize,
}

pub(crate) fn percent_of(bytes_done: usize, total_bytes: usize) -> u8 {
    if total_bytes == 0 {
        return 100;
    }

    ((bytes_done as u128 * 100) / total_bytes as u128) as u8
}

/// Runs one worker's full pass: allocate, fill, verify.
///
/// The report timer is constructed here, inside the worker's own
/// execution context. The region may end up smaller than
/// `desc.share_bytes` under memory pressure; both passes size
/// themselves from the region actually mapped.
pub fn scrub(desc: &WorkerDescriptor, sink: &dyn ProgressSink) -> Result<(), ScrubError> {
    debug!(index = desc.index, bytes = desc.share_bytes, "worker starting");

    let mut region = Region::allocate(desc.share_bytes)?;
    debug!(index = desc.index, bytes = region.len(), "region mapped");

    let timer = ReportTimer::start(REPORT_INTERVAL);

    fill(desc.index, &mut region, &timer, sink);
    verify(desc.index, &region, &timer, sink)?;

    sink.report(ProgressEvent {
        worker: desc.index,
        percent: 100,
        phase: Phase::Done,
    });
    debug!(index = desc.index, "worker done");

    Ok(())
}

/// Writes the address-derived pattern to every word of `region`, in
/// increasing address order. Cannot fail.
pub fn fill(index: usize, region: &mut Region, timer: &ReportTimer, sink: &dyn ProgressSink) {
    let total = region.len();
    let base = region.base_addr();

    sink.report(ProgressEvent {
        worker: index,
        percent: 0,
        phase: Phase::Filling,
    });

    for (i, word) in region.as_words_mut().iter_mut().enumerate() {
        let addr = base + i * size_of::<u64>();
        *word = expected(addr);

        if timer.is_due() {
            sink.report(ProgressEvent {
                worker: index,
                percent: percent_of(i * size_of::<u64>(), total),
                phase: Phase::Filling,
            });
            timer.rearm();
        }
    }
}

/// Compares every word of `region` against the pattern.
///
/// Stops at the first mismatch and reports its address; words past it
/// are never scanned.
pub fn verify(
    index: usize,
    region: &Region,
    timer: &ReportTimer,
    sink: &dyn ProgressSink,
) -> Result<(), ScrubError> {
    let total = region.len();
    let base = region.base_addr();

    sink.report(ProgressEvent {
        worker: index,
        percent: 0,
        phase: Phase::Verifying,
    });

    for (i, word) in region.as_words().iter().enumerate() {
        let addr = base + i * size_of::<u64>();

        if *word != expected(addr) {
            return Err(ScrubError::Mismatch {
                addr,
                expected: expected(addr),
                found: *word,
            });
        }

        if timer.is_due() {
            sink.report(ProgressEvent {
                worker: index,
                percent: percent_of(i * size_of::<u64>(), total),
                phase: Phase::Verifying,
            });
            timer.rearm();
        }
    }

    Ok(())
}
