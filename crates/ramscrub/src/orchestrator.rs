// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Orchestrator - fan out workers, wait for all, aggregate status.
//!
//! Workers are spawned as named threads over fully disjoint regions;
//! there is no shared memory and no synchronization between them.
//! Isolation, not locking, provides safety. The orchestrator only
//! spawns and joins.

use std::io;
use std::sync::mpsc;
use std::thread;

use thiserror::Error;
use tracing::error;

use ramscrub_worker::{ProgressEvent, scrub};

use crate::config::RunConfig;

/// Aggregate run failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A worker thread could not be spawned.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),

    /// At least one worker reported a fatal condition.
    #[error("{failed} of {total} workers failed")]
    WorkersFailed {
        /// Workers that exited with a failure.
        failed: usize,
        /// Workers spawned.
        total: usize,
    },
}

/// Runs the full scrub: partition, spawn, wait, aggregate.
///
/// Each worker independently allocates, fills, and verifies its own
/// share, feeding `events` from inside its own thread. A worker's
/// failure never stops its siblings; every handle is joined before the
/// aggregate status is computed. All event senders are dropped on
/// return, hanging up the display collector.
pub fn run(config: &RunConfig, events: mpsc::Sender<ProgressEvent>) -> Result<(), RunError> {
    let descriptors = config.partition();

    let mut handles = Vec::with_capacity(descriptors.len());
    for desc in descriptors {
        let sink = events.clone();

        let handle = thread::Builder::new()
            .name(format!("scrub-worker-{}", desc.index))
            .spawn(move || {
                let result = scrub(&desc, &sink);

                if let Err(err) = &result {
                    error!(worker = desc.index, %err, "worker failed");
                }

                result
            })?;

        handles.push((desc.index, handle));
    }
    drop(events);

    let total = handles.len();
    let mut failed = 0;

    for (index, handle) in handles {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(_)) => failed += 1,
            Err(_) => {
                error!(worker = index, "worker panicked");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(RunError::WorkersFailed { failed, total });
    }

    Ok(())
}
