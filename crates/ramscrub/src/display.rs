// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Display collector - cursor-addressed terminal updates.
//!
//! A single collector thread drains the worker event channel and owns
//! the terminal, so cursor-addressed writes from independent workers
//! can never interleave. Each worker gets a fixed percent column on
//! the top line and a fixed status line below it, both updated in
//! place.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use ramscrub_worker::{Phase, ProgressEvent};

/// Terminal columns reserved per worker on the percent line.
const PERCENT_FIELD_WIDTH: usize = 6;

/// Percent field update: carriage return, then cursor right to the
/// worker's column.
pub(crate) fn percent_update(index: usize, percent: u8) -> String {
    format!("\r\x1b[{:03}C{}% ", index * PERCENT_FIELD_WIDTH, percent)
}

/// Status line update: cursor down to the worker's line, clear it,
/// write, cursor back up.
pub(crate) fn line_update(index: usize, text: &str) -> String {
    let down = index + 1;
    format!("\x1b[{down}B\r\x1b[K[{index}] {text}\x1b[{down}A")
}

fn render(out: &mut impl Write, last_phase: &mut HashMap<usize, Phase>, event: ProgressEvent) {
    if last_phase.insert(event.worker, event.phase) != Some(event.phase) {
        let _ = out.write_all(line_update(event.worker, &event.phase.to_string()).as_bytes());
    }

    let _ = out.write_all(percent_update(event.worker, event.percent).as_bytes());
    let _ = out.flush();
}

/// Spawns the collector thread. It exits once every worker's sender
/// has hung up.
pub fn spawn_collector(events: mpsc::Receiver<ProgressEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut out = io::stdout().lock();
        let mut last_phase = HashMap::new();

        for event in events {
            render(&mut out, &mut last_phase, event);
        }
    })
}

/// Moves the cursor past the per-worker status lines so the shell
/// prompt lands below them.
pub fn finish(workers: usize) {
    let mut out = io::stdout().lock();

    for _ in 0..workers {
        let _ = out.write_all(b"\n");
    }
    let _ = out.flush();
}
