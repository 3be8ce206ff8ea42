// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Layered configuration for `brief`.
//!
//! Three layers, lowest precedence first:
//! - built-in defaults ([`Config::default`])
//! - an optional `brief.toml`, merged key by key onto the defaults
//! - `BOOTSTRAP_*` / `BRIEF_*` environment variables ([`EnvOverrides`])
//!
//! Relative paths resolve against the workspace directory; a leading `~/`
//! expands to the home directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use brief_core::{
    Coordinator, FailureDisplay, HttpProbe, LocalZone, Notes, Probe, ProcessProbe, Schema,
    SnapshotSettings,
};
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "brief.toml";
pub const DEFAULT_WORKSPACE: &str = "~/.openclaw/workspace";

/// Effective configuration after all layers are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name used in the greeting.
    pub user_name: String,
    pub paths: PathsConfig,
    pub timezone: LocalZone,
    pub display: DisplayConfig,
    pub blockers: BlockersConfig,
    pub probes: ProbesConfig,
    pub notes: Notes,
    pub schema: Schema,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_name: "there".to_string(),
            paths: PathsConfig::default(),
            timezone: LocalZone::default(),
            display: DisplayConfig::default(),
            blockers: BlockersConfig::default(),
            probes: ProbesConfig::default(),
            notes: Notes::default(),
            schema: Schema::default(),
        }
    }
}

/// Source and destination paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub workspace: PathBuf,
    pub backlog: PathBuf,
    pub blockers: PathBuf,
    pub output: PathBuf,
    /// Directory holding `YYYY-MM-DD.md` daily notes.
    pub memory: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            workspace: PathBuf::from(DEFAULT_WORKSPACE),
            backlog: PathBuf::from("workflow/sprint.json"),
            blockers: PathBuf::from("workflow/blockers.json"),
            output: PathBuf::from("BOOTSTRAP.md"),
            memory: PathBuf::from("memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pending items listed per group in the sprint section.
    pub max_pending: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_pending: brief_core::snapshot::DEFAULT_MAX_PENDING,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockersConfig {
    /// Used when the blockers document is missing or has no list.
    pub fallback: Vec<String>,
}

/// The three standard probes plus the coordinator grace period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbesConfig {
    /// Extra wait beyond the slowest probe timeout before giving up.
    pub grace_ms: u64,
    pub prod: HttpProbeConfig,
    pub local: HttpProbeConfig,
    pub process: ProcessProbeConfig,
}

impl Default for ProbesConfig {
    fn default() -> Self {
        ProbesConfig {
            grace_ms: brief_core::coordinator::DEFAULT_GRACE.as_millis() as u64,
            prod: HttpProbeConfig {
                label: "Prod".to_string(),
                url: None,
                expect: brief_core::probe::DEFAULT_EXPECTED_STATUS,
                timeout_secs: 8,
                on_failure: FailureDisplay::Alert,
            },
            local: HttpProbeConfig {
                label: "AiPipe".to_string(),
                url: Some("http://127.0.0.1:8082/healthz".to_string()),
                expect: brief_core::probe::DEFAULT_EXPECTED_STATUS,
                timeout_secs: 5,
                on_failure: FailureDisplay::Alert,
            },
            process: ProcessProbeConfig {
                label: "CF Tunnel".to_string(),
                name: "cloudflared".to_string(),
                program: brief_core::probe::DEFAULT_PROCESS_PROGRAM.to_string(),
                timeout_secs: 3,
                on_failure: FailureDisplay::Quiet,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpProbeConfig {
    pub label: String,
    /// Unset or empty skips the prod check; the local check reports it as `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub expect: u16,
    pub timeout_secs: u64,
    pub on_failure: FailureDisplay,
}

impl HttpProbeConfig {
    fn build(&self) -> HttpProbe {
        HttpProbe::new(
            self.label.clone(),
            self.url.clone(),
            Duration::from_secs(self.timeout_secs),
        )
        .with_expect(self.expect)
        .with_failure_display(self.on_failure)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessProbeConfig {
    pub label: String,
    /// Process name pattern passed to the counting program.
    pub name: String,
    pub program: String,
    pub timeout_secs: u64,
    pub on_failure: FailureDisplay,
}

impl ProcessProbeConfig {
    fn build(&self) -> ProcessProbe {
        ProcessProbe::new(
            self.label.clone(),
            self.name.clone(),
            Duration::from_secs(self.timeout_secs),
        )
        .with_program(self.program.clone())
        .with_failure_display(self.on_failure)
    }
}

/// Values read from the environment, applied over the file layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub user_name: Option<String>,
    pub prod_url: Option<String>,
    pub tz_offset: Option<i32>,
    pub tz_label: Option<String>,
    pub workspace: Option<PathBuf>,
    /// Config file named by `BRIEF_CONFIG`.
    pub config: Option<PathBuf>,
}

impl EnvOverrides {
    /// Reads the process environment. An unparsable offset is ignored.
    pub fn from_env() -> Self {
        let tz_offset = match env::tz_offset() {
            Ok(offset) => offset,
            Err(e) => {
                tracing::warn!("{}; using configured offset", e);
                None
            }
        };
        EnvOverrides {
            user_name: env::user_name(),
            prod_url: env::prod_url(),
            tz_offset,
            tz_label: env::tz_label(),
            workspace: env::workspace(),
            config: env::config_path(),
        }
    }

    fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.user_name {
            config.user_name = name.clone();
        }
        if let Some(url) = &self.prod_url {
            config.probes.prod.url = Some(url.clone());
        }
        if let Some(offset) = self.tz_offset {
            config.timezone.offset_hours = offset;
        }
        if let Some(label) = &self.tz_label {
            config.timezone.label = label.clone();
        }
        if let Some(workspace) = &self.workspace {
            config.paths.workspace = workspace.clone();
        }
    }
}

impl Config {
    /// Loads configuration from the process environment and an optional
    /// explicitly named file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, &EnvOverrides::from_env())
    }

    /// Loads configuration with the given environment layer.
    ///
    /// An explicit file (argument, then `overrides.config`) must exist and
    /// parse. Without one, `<workspace>/brief.toml` is read if present; if it
    /// cannot be read or parsed the defaults are used.
    pub fn load_with(explicit: Option<&Path>, overrides: &EnvOverrides) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| overrides.config.clone());

        let mut config = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(&path)?
            }
            None => {
                let workspace = overrides
                    .workspace
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKSPACE));
                let implicit = expand_home(&workspace).join(CONFIG_FILE_NAME);
                if implicit.is_file() {
                    Self::from_file(&implicit).unwrap_or_else(|e| {
                        tracing::warn!("{}; using defaults", e);
                        Config::default()
                    })
                } else {
                    tracing::debug!("no config at {}, using defaults", implicit.display());
                    Config::default()
                }
            }
        };

        overrides.apply(&mut config);
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("loading config from {}", path.display());
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text, path)
    }

    /// Parses `text` and merges it onto the defaults. `origin` names the
    /// file in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let parse_error = |source: toml::de::Error| Error::TomlParse {
            path: origin.to_path_buf(),
            source,
        };
        let overlay: toml::Table = toml::from_str(text).map_err(parse_error)?;
        let mut merged = toml::Value::try_from(Config::default())?;
        merge(&mut merged, toml::Value::Table(overlay));
        merged.try_into().map_err(parse_error)
    }

    /// Pretty TOML of the effective configuration.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn workspace_dir(&self) -> PathBuf {
        expand_home(&self.paths.workspace)
    }

    /// Resolves `path` against the workspace unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let expanded = expand_home(path);
        if expanded.is_absolute() {
            expanded
        } else {
            self.workspace_dir().join(expanded)
        }
    }

    pub fn backlog_path(&self) -> PathBuf {
        self.resolve(&self.paths.backlog)
    }

    pub fn blockers_path(&self) -> PathBuf {
        self.resolve(&self.paths.blockers)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.paths.output)
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.resolve(&self.paths.memory)
    }

    /// The standard probes in display order: prod, local, process.
    ///
    /// The local check is always attempted; without a URL it reports `?`.
    pub fn probes(&self) -> Vec<Arc<dyn Probe>> {
        vec![
            Arc::new(self.probes.prod.build()),
            Arc::new(self.probes.local.build().required()),
            Arc::new(self.probes.process.build()),
        ]
    }

    pub fn coordinator(&self) -> Coordinator {
        Coordinator::new(Duration::from_millis(self.probes.grace_ms))
    }

    pub fn snapshot_settings(&self) -> SnapshotSettings {
        let backlog_name = self
            .paths
            .backlog
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.paths.backlog.display().to_string());
        SnapshotSettings {
            user_name: self.user_name.clone(),
            backlog_name,
            max_pending: self.display.max_pending,
            notes: self.notes.clone(),
        }
    }
}

/// Recursively merges `overlay` onto `base`. Tables merge key by key; any
/// other value, arrays included, replaces what was there.
pub fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
