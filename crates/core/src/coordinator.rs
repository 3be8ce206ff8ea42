// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel fan-out of health probes.
//!
//! Every probe runs on its own worker thread and reports into its own result
//! slot. The coordinator joins on all of them before returning, so callers
//! never see partial results. A probe that panics, or overruns its timeout by
//! more than the grace period, is reported as unknown without affecting the
//! other slots.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::probe::{Probe, ProbeReport, ProbeResult};

/// Extra time allowed past the slowest probe's own timeout.
pub const DEFAULT_GRACE: Duration = Duration::from_millis(500);

/// Runs a fixed set of probes concurrently.
#[derive(Debug, Clone)]
pub struct Coordinator {
    grace: Duration,
}

impl Default for Coordinator {
    fn default() -> Self {
        Coordinator {
            grace: DEFAULT_GRACE,
        }
    }
}

impl Coordinator {
    pub fn new(grace: Duration) -> Self {
        Coordinator { grace }
    }

    /// Runs all `probes` at once and returns one report per probe, in input order.
    ///
    /// Wall-clock time is bounded by the largest probe timeout plus the grace
    /// period, not by the sum of the timeouts.
    pub fn run(&self, probes: &[Arc<dyn Probe>]) -> Vec<ProbeReport> {
        let longest = probes
            .iter()
            .map(|p| p.timeout())
            .max()
            .unwrap_or_default();
        let deadline = Instant::now() + longest + self.grace;

        let (tx, rx) = mpsc::channel::<(usize, ProbeResult)>();
        for (slot, probe) in probes.iter().enumerate() {
            let worker = Arc::clone(probe);
            let tx = tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("probe-{}", slot))
                .spawn(move || {
                    let start = Instant::now();
                    let result = worker.check();
                    tracing::debug!(
                        "{} probe: {} ({:?}) in {}ms",
                        worker.label(),
                        result.token,
                        result.health,
                        start.elapsed().as_millis()
                    );
                    // The receiver is gone only if the deadline passed.
                    let _ = tx.send((slot, result));
                });
            if let Err(e) = spawned {
                tracing::warn!("failed to start {} probe: {}", probe.label(), e);
            }
        }
        // Once every worker has finished or died the channel disconnects.
        drop(tx);

        let mut slots: Vec<Option<ProbeResult>> = vec![None; probes.len()];
        let mut outstanding = probes.len();
        while outstanding > 0 {
            let wait = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(wait) {
                Ok((slot, result)) => {
                    slots[slot] = Some(result);
                    outstanding -= 1;
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("{} probe(s) still running at deadline", outstanding);
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        probes
            .iter()
            .zip(slots)
            .map(|(probe, slot)| {
                ProbeReport::new(probe.as_ref(), slot.unwrap_or_else(ProbeResult::unknown))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
