// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::probe::{Health, ProbeKind, UNKNOWN_TOKEN};

/// Sleeps for `delay`, then reports `token`.
struct FakeProbe {
    label: &'static str,
    delay: Duration,
    timeout: Duration,
    token: &'static str,
}

impl FakeProbe {
    fn arc(label: &'static str, delay_ms: u64, token: &'static str) -> Arc<dyn Probe> {
        Arc::new(FakeProbe {
            label,
            delay: Duration::from_millis(delay_ms),
            timeout: Duration::from_millis(400),
            token,
        })
    }
}

impl Probe for FakeProbe {
    fn label(&self) -> &str {
        self.label
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Process
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn check(&self) -> ProbeResult {
        thread::sleep(self.delay);
        ProbeResult::judged(self.token, true)
    }
}

struct PanickingProbe;

impl Probe for PanickingProbe {
    fn label(&self) -> &str {
        "Broken"
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Http
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(100)
    }

    fn check(&self) -> ProbeResult {
        panic!("probe blew up");
    }
}

#[test]
fn returns_one_report_per_probe_in_order() {
    let probes = vec![
        FakeProbe::arc("A", 60, "1"),
        FakeProbe::arc("B", 0, "2"),
        FakeProbe::arc("C", 30, "3"),
    ];
    let reports = Coordinator::default().run(&probes);
    let labels: Vec<_> = reports.iter().map(|r| r.label.as_str()).collect();
    let tokens: Vec<_> = reports.iter().map(|r| r.result.token.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(tokens, vec!["1", "2", "3"]);
}

#[test]
fn probes_run_in_parallel() {
    let probes = vec![
        FakeProbe::arc("A", 300, "1"),
        FakeProbe::arc("B", 300, "2"),
        FakeProbe::arc("C", 300, "3"),
    ];
    let start = Instant::now();
    let reports = Coordinator::default().run(&probes);
    let elapsed = start.elapsed();
    assert_eq!(reports.len(), 3);
    assert!(
        elapsed < Duration::from_millis(800),
        "expected ~300ms, took {:?}",
        elapsed
    );
}

#[test]
fn overrunning_probe_is_unknown_without_contaminating_others() {
    let probes = vec![
        FakeProbe::arc("AiPipe", 5_000, "200"),
        FakeProbe::arc("CF Tunnel", 10, "1"),
    ];
    let start = Instant::now();
    let reports = Coordinator::new(Duration::from_millis(100)).run(&probes);
    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(reports[0].result.token, UNKNOWN_TOKEN);
    assert_eq!(reports[0].result.health, Health::Unhealthy);
    assert_eq!(reports[1].result.token, "1");
    assert_eq!(reports[1].result.health, Health::Healthy);
}

#[test]
fn panicking_probe_is_unknown() {
    let broken: Arc<dyn Probe> = Arc::new(PanickingProbe);
    let probes = vec![broken, FakeProbe::arc("B", 0, "7")];
    let reports = Coordinator::default().run(&probes);
    assert_eq!(reports[0].label, "Broken");
    assert_eq!(reports[0].result.token, UNKNOWN_TOKEN);
    assert_eq!(reports[1].result.token, "7");
}

#[test]
fn no_probes_no_reports() {
    assert!(Coordinator::default().run(&[]).is_empty());
}
