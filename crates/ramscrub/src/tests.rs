// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the ramscrub binary: configuration, partitioning,
//! orchestration, display rendering, CLI surface.

use std::sync::mpsc;

use clap::Parser;

use ramscrub_region::PAGE_BYTES;
use ramscrub_worker::{Phase, ProgressEvent};

use crate::Cli;
use crate::config::{ConfigError, MAX_WORKERS, RunConfig};
use crate::display::{line_update, percent_update};
use crate::orchestrator;

// =============================================================================
// RunConfig
// =============================================================================

#[test]
fn test_config_rejects_zero_workers() {
    assert_eq!(RunConfig::new(4096, 0), Err(ConfigError::WorkerCount(0)));
}

#[test]
fn test_config_rejects_too_many_workers() {
    let result = RunConfig::new(1 << 30, MAX_WORKERS + 1);
    assert_eq!(result, Err(ConfigError::WorkerCount(MAX_WORKERS + 1)));
}

#[test]
fn test_config_accepts_bounds() {
    RunConfig::new(1 << 20, 1).expect("Failed to new()");
    RunConfig::new(1 << 20, MAX_WORKERS).expect("Failed to new()");
}

#[test]
fn test_config_rejects_zero_bytes() {
    assert_eq!(RunConfig::new(0, 1), Err(ConfigError::NoMemory));
}

#[test]
fn test_config_rejects_sub_word_shares() {
    let result = RunConfig::new(16, 4);
    assert_eq!(
        result,
        Err(ConfigError::ShareTooSmall {
            total: 16,
            workers: 4,
        })
    );
}

// =============================================================================
// partition()
// =============================================================================

#[test]
fn test_partition_is_even_when_divisible() {
    let config = RunConfig::new(4096 * 8, 4).expect("Failed to new()");
    let shares = config.partition();

    assert_eq!(shares.len(), 4);
    assert!(shares.iter().all(|d| d.share_bytes == 4096 * 2));
}

#[test]
fn test_partition_assigns_remainder_to_last_worker() {
    let config = RunConfig::new(4096 * 8 + 17, 4).expect("Failed to new()");
    let shares = config.partition();

    assert_eq!(shares[0].share_bytes, 8196);
    assert_eq!(shares[1].share_bytes, 8196);
    assert_eq!(shares[2].share_bytes, 8196);
    assert_eq!(shares[3].share_bytes, 8197);

    let sum: usize = shares.iter().map(|d| d.share_bytes).sum();
    assert_eq!(sum, config.total_bytes());
}

#[test]
fn test_partition_indices_are_distinct_and_ordered() {
    let config = RunConfig::new(1 << 20, 7).expect("Failed to new()");

    for (i, desc) in config.partition().iter().enumerate() {
        assert_eq!(desc.index, i);
    }
}

#[test]
fn test_partition_is_deterministic() {
    let config = RunConfig::new(123_456_792, 5).expect("Failed to new()");

    assert_eq!(config.partition(), config.partition());
}

// =============================================================================
// orchestrator::run()
// =============================================================================

fn run_and_collect(
    total: usize,
    workers: usize,
) -> (Result<(), orchestrator::RunError>, Vec<ProgressEvent>) {
    let config = RunConfig::new(total, workers).expect("Failed to new()");
    let (tx, rx) = mpsc::channel();

    let outcome = orchestrator::run(&config, tx);
    let events: Vec<ProgressEvent> = rx.iter().collect();

    (outcome, events)
}

#[test]
fn test_single_worker_run_succeeds() {
    let (outcome, events) = run_and_collect(PAGE_BYTES * 2, 1);

    outcome.expect("Failed to run()");
    assert!(
        events
            .iter()
            .any(|e| e.worker == 0 && e.phase == Phase::Done && e.percent == 100)
    );
}

#[test]
fn test_four_workers_all_report_done() {
    let (outcome, events) = run_and_collect(PAGE_BYTES * 8, 4);

    outcome.expect("Failed to run()");
    for worker in 0..4 {
        assert!(
            events
                .iter()
                .any(|e| e.worker == worker && e.phase == Phase::Done),
            "worker {worker} never reported Done"
        );
    }
}

// =============================================================================
// display rendering
// =============================================================================

#[test]
fn test_percent_update_targets_six_column_field() {
    assert_eq!(percent_update(0, 0), "\r\x1b[000C0% ");
    assert_eq!(percent_update(2, 47), "\r\x1b[012C47% ");
}

#[test]
fn test_line_update_moves_down_writes_and_returns() {
    assert_eq!(line_update(0, "Filling buffer"), "\x1b[1B\r\x1b[K[0] Filling buffer\x1b[1A");
    assert_eq!(line_update(3, "Verifying"), "\x1b[4B\r\x1b[K[3] Verifying\x1b[4A");
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn test_cli_requires_gigabytes_and_threads() {
    assert!(Cli::try_parse_from(["ramscrub"]).is_err());
    assert!(Cli::try_parse_from(["ramscrub", "-g", "1"]).is_err());
    assert!(Cli::try_parse_from(["ramscrub", "-t", "4"]).is_err());
}

#[test]
fn test_cli_parses_required_flags() {
    let cli = Cli::try_parse_from(["ramscrub", "-g", "2", "-t", "4"]).expect("Failed to parse");

    assert_eq!(cli.gigabytes, 2);
    assert_eq!(cli.threads, 4);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_cli_help_is_terminal() {
    let err = Cli::try_parse_from(["ramscrub", "-h"]).expect_err("help must short-circuit");

    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
