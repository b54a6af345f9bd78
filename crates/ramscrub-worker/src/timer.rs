// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ReportTimer - Periodic "report due" flag without signals.
//!
//! A private ticker thread raises an atomic flag once per interval.
//! The owning worker polls the flag at a safe boundary (after each
//! word) and rearms it after reporting, so the ticker never preempts
//! the fill/verify computation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between progress reports.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic report-due flag backed by a private ticker thread.
///
/// Owned by exactly one worker; the ticker is stopped and joined on
/// drop.
#[derive(Debug)]
pub struct ReportTimer {
    due: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl ReportTimer {
    /// Starts the ticker. The flag first becomes due one `interval`
    /// from now.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        let due = Arc::new(AtomicBool::new(false));
        let stop = Arc::new(AtomicBool::new(false));

        let ticker = {
            let due = Arc::clone(&due);
            let stop = Arc::clone(&stop);

            thread::spawn(move || Self::run(&due, &stop, interval))
        };

        Self {
            due,
            stop,
            ticker: Some(ticker),
        }
    }

    fn run(due: &AtomicBool, stop: &AtomicBool, interval: Duration) {
        loop {
            let deadline = Instant::now() + interval;

            loop {
                if stop.load(Ordering::Acquire) {
                    return;
                }

                let now = Instant::now();
                if now >= deadline {
                    break;
                }

                // Woken early by unpark on stop, or spuriously.
                thread::park_timeout(deadline - now);
            }

            due.store(true, Ordering::Release);
        }
    }

    /// Returns true if a report is due. One relaxed load; safe to call
    /// once per word in the hot loop.
    #[inline(always)]
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.due.load(Ordering::Relaxed)
    }

    /// Rearms the flag after a report. The next firing is the ticker's
    /// next interval boundary.
    #[inline]
    pub fn rearm(&self) {
        self.due.store(false, Ordering::Relaxed);
    }

    /// Marks a report as due immediately, as the ticker does at each
    /// interval boundary.
    pub fn fire(&self) {
        self.due.store(true, Ordering::Release);
    }
}

impl Drop for ReportTimer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);

        if let Some(ticker) = self.ticker.take() {
            ticker.thread().unpark();
            let _ = ticker.join();
        }
    }
}
