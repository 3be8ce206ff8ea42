// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure health probes.
//!
//! A probe never returns an error: whatever goes wrong underneath (refused
//! connection, timeout, missing binary, garbage output) becomes an unhealthy
//! [`ProbeResult`] carrying the [`UNKNOWN_TOKEN`].

use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token reported when a probe could not determine its target's state.
pub const UNKNOWN_TOKEN: &str = "?";
/// Token reported for a probe whose target is not configured.
pub const NOT_CONFIGURED_TOKEN: &str = "not configured";

pub const HEALTHY_SYMBOL: &str = "✅";
pub const ALERT_SYMBOL: &str = "🚨";
pub const MUTED_SYMBOL: &str = "—";

/// Status code an HTTP probe expects unless told otherwise.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;
/// Program used to count processes.
pub const DEFAULT_PROCESS_PROGRAM: &str = "pgrep";

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Derived health of a probe target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    Healthy,
    Unhealthy,
    /// The check was skipped because its target is not configured.
    NotApplicable,
}

/// How an unhealthy result is shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureDisplay {
    /// Render the alert symbol and keep the probe in the summary line.
    #[default]
    Alert,
    /// Render the muted symbol and leave the probe out of the summary line.
    Quiet,
}

/// What a probe measures, which decides how its token reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    /// Token is an HTTP status code.
    Http,
    /// Token is a count of running processes.
    Process,
}

impl ProbeKind {
    /// Suffix printed after the raw token.
    pub fn unit(&self) -> &'static str {
        match self {
            ProbeKind::Http => "",
            ProbeKind::Process => " proc(s)",
        }
    }
}

/// Outcome of one health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Raw status token: a status code, a process count, or a sentinel.
    pub token: String,
    pub health: Health,
}

impl ProbeResult {
    /// Healthy iff `ok`, keeping `token` either way.
    pub fn judged(token: impl Into<String>, ok: bool) -> Self {
        ProbeResult {
            token: token.into(),
            health: if ok { Health::Healthy } else { Health::Unhealthy },
        }
    }

    pub fn unknown() -> Self {
        ProbeResult::judged(UNKNOWN_TOKEN, false)
    }

    pub fn not_applicable() -> Self {
        ProbeResult {
            token: NOT_CONFIGURED_TOKEN.to_string(),
            health: Health::NotApplicable,
        }
    }
}

/// A single independent health check.
///
/// Implementations must bound their own running time by [`Probe::timeout`]
/// and fold every failure into the returned result.
pub trait Probe: Send + Sync {
    /// Name shown in the snapshot (e.g. "AiPipe").
    fn label(&self) -> &str;

    fn kind(&self) -> ProbeKind;

    fn timeout(&self) -> Duration;

    fn failure_display(&self) -> FailureDisplay {
        FailureDisplay::Alert
    }

    fn check(&self) -> ProbeResult;
}

/// A probe outcome tagged with the probe that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub label: String,
    pub kind: ProbeKind,
    pub failure_display: FailureDisplay,
    pub result: ProbeResult,
}

impl ProbeReport {
    pub fn new(probe: &dyn Probe, result: ProbeResult) -> Self {
        ProbeReport {
            label: probe.label().to_string(),
            kind: probe.kind(),
            failure_display: probe.failure_display(),
            result,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match (self.result.health, self.failure_display) {
            (Health::Healthy, _) => HEALTHY_SYMBOL,
            (Health::Unhealthy, FailureDisplay::Alert) => ALERT_SYMBOL,
            (Health::Unhealthy, FailureDisplay::Quiet) | (Health::NotApplicable, _) => {
                MUTED_SYMBOL
            }
        }
    }

    /// Whether the probe belongs in the one-line infra summary.
    pub fn in_summary(&self) -> bool {
        self.symbol() != MUTED_SYMBOL
    }

    /// Raw token, unit and symbol, e.g. `1 proc(s) (✅)`.
    pub fn detail(&self) -> String {
        let unit = match self.result.health {
            Health::NotApplicable => "",
            _ if self.result.token == UNKNOWN_TOKEN => "",
            _ => self.kind.unit(),
        };
        format!("{}{} ({})", self.result.token, unit, self.symbol())
    }
}

/// Checks that a URL answers with an expected status code.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    label: String,
    url: Option<String>,
    expect: u16,
    timeout: Duration,
    failure_display: FailureDisplay,
    required: bool,
}

impl HttpProbe {
    /// A probe of `url`; `None` or a blank URL makes the check not applicable.
    pub fn new(label: impl Into<String>, url: Option<String>, timeout: Duration) -> Self {
        HttpProbe {
            label: label.into(),
            url: url.filter(|u| !u.trim().is_empty()),
            expect: DEFAULT_EXPECTED_STATUS,
            timeout,
            failure_display: FailureDisplay::Alert,
            required: false,
        }
    }

    /// Marks the target as mandatory: a missing URL is then a failed check
    /// rather than a skipped one.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_expect(mut self, expect: u16) -> Self {
        self.expect = expect;
        self
    }

    pub fn with_failure_display(mut self, failure_display: FailureDisplay) -> Self {
        self.failure_display = failure_display;
        self
    }

    fn fetch_status(&self, url: &str) -> Result<u16> {
        // No certificate checks and no redirects: only this exact endpoint counts.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let response = client.get(url).send()?;
        Ok(response.status().as_u16())
    }
}

impl Probe for HttpProbe {
    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Http
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn failure_display(&self) -> FailureDisplay {
        self.failure_display
    }

    fn check(&self) -> ProbeResult {
        let Some(url) = self.url.as_deref() else {
            if self.required {
                tracing::warn!("{} probe has no url configured", self.label);
                return ProbeResult::unknown();
            }
            return ProbeResult::not_applicable();
        };
        match self.fetch_status(url) {
            Ok(code) => ProbeResult::judged(code.to_string(), code == self.expect),
            Err(e) => {
                tracing::debug!("{} probe of {} failed: {}", self.label, url, e);
                ProbeResult::unknown()
            }
        }
    }
}

/// Counts running processes whose name matches a pattern.
#[derive(Debug, Clone)]
pub struct ProcessProbe {
    label: String,
    pattern: String,
    program: String,
    timeout: Duration,
    failure_display: FailureDisplay,
}

impl ProcessProbe {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>, timeout: Duration) -> Self {
        ProcessProbe {
            label: label.into(),
            pattern: pattern.into(),
            program: DEFAULT_PROCESS_PROGRAM.to_string(),
            timeout,
            failure_display: FailureDisplay::Alert,
        }
    }

    /// Replaces `pgrep` with another program taking `-c <pattern>`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_failure_display(mut self, failure_display: FailureDisplay) -> Self {
        self.failure_display = failure_display;
        self
    }

    fn count(&self) -> Result<u32> {
        let mut command = Command::new(&self.program);
        command.arg("-c").arg(&self.pattern);
        let output = run_with_timeout(&mut command, self.timeout)?;

        // pgrep exits 1 when nothing matched, which is a count of zero.
        if !matches!(output.status.code(), Some(0) | Some(1)) {
            return Err(Error::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = stdout.trim();
        text.parse()
            .map_err(|_| Error::UnexpectedOutput(text.to_string()))
    }
}

impl Probe for ProcessProbe {
    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Process
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn failure_display(&self) -> FailureDisplay {
        self.failure_display
    }

    fn check(&self) -> ProbeResult {
        match self.count() {
            Ok(count) => ProbeResult::judged(count.to_string(), count > 0),
            Err(e) => {
                tracing::debug!("{} probe for '{}' failed: {}", self.label, self.pattern, e);
                ProbeResult::unknown()
            }
        }
    }
}

/// Runs `command` to completion, killing it once `timeout` has elapsed.
///
/// Stdout is captured; stdin and stderr are discarded.
pub fn run_with_timeout(command: &mut Command, timeout: Duration) -> Result<Output> {
    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let start = Instant::now();
    loop {
        if child.try_wait()?.is_some() {
            return Ok(child.wait_with_output()?);
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::Timeout {
                what: program,
                after: timeout,
            });
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
