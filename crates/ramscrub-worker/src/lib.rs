// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ramscrub_worker - Fill/verify scrub pass over one owned region.
//!
//! A worker allocates its private region, writes the address-derived
//! pattern across every word, then re-reads and verifies it. Progress
//! is reported through a [`ProgressSink`] whenever a private
//! [`ReportTimer`] marks a report as due; the hot loop only ever pays
//! for one relaxed atomic load per word, so reporting never slows the
//! pass and never races with the ticker.
//!
//! The first verification mismatch is fatal to the worker: it reports
//! the failing address and stops scanning. This is a detector, not a
//! repair tool.

#![warn(missing_docs)]

mod error;
mod progress;
mod timer;
mod worker;


pub use error::ScrubError;
pub use progress::{Phase, ProgressEvent, ProgressSink};
pub use timer::{REPORT_INTERVAL, ReportTimer};
pub use worker::{WorkerDescriptor, fill, scrub, verify};
