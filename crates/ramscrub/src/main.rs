// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ramscrub - parallel physical-memory stress and verification tool.
//!
//! Partitions the requested capacity across isolated workers; each
//! worker maps its own anonymous region, fills it with an
//! address-derived pattern, and verifies every word. Any mismatch or
//! allocation exhaustion fails the run.

use std::sync::mpsc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod display;
mod orchestrator;

#[cfg(test)]
mod tests;

use config::RunConfig;

const BYTES_PER_GIB: usize = 1024 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "ramscrub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Total memory to test, in GiB
    #[arg(short, long)]
    gigabytes: usize,

    /// Number of scrub workers (max 32)
    #[arg(short, long)]
    threads: usize,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let kind = err.kind();
            err.print()?;

            // Help and version are terminal and not failures; anything
            // else is a usage error and exits 1 before any worker or
            // allocation exists.
            if kind == clap::error::ErrorKind::DisplayHelp
                || kind == clap::error::ErrorKind::DisplayVersion
            {
                return Ok(());
            }
            std::process::exit(1);
        }
    };

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Progress rendering owns stdout; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::new(cli.gigabytes * BYTES_PER_GIB, cli.threads)?;

    let (events_tx, events_rx) = mpsc::channel();
    let collector = display::spawn_collector(events_rx);

    let outcome = orchestrator::run(&config, events_tx);

    // All senders are gone once run() returns; the collector drains
    // what is left and exits.
    let _ = collector.join();
    display::finish(config.workers());

    outcome?;

    Ok(())
}
