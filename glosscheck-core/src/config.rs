//! Configuration file loading for glosscheck.
//!
//! Discovers and loads `glosscheck.toml` from a project directory.
//! Explicit overrides from the host take precedence over the file.

use crate::settings::{DEFAULT_MAX_PARALLEL, Discipline, ValidateSettings};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use glosscheck_domain::{RunContext, RunOptions};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "glosscheck.toml";

/// Top-level configuration from glosscheck.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlosscheckConfig {
    pub run: RunConfig,
}

/// `[run]` section of the config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub fix_mode: bool,
    pub rerun_after_fix: bool,
    pub hard_fail_on_err: bool,
    pub discipline: Discipline,

    /// Concurrency bound for the split discipline.
    pub max_parallel: Option<usize>,

    /// Whole-run deadline in milliseconds.
    pub timeout_ms: Option<u64>,
}

/// Discover the glosscheck.toml config file in `root`.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

pub fn load_config(path: &Utf8Path) -> anyhow::Result<GlosscheckConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<GlosscheckConfig> {
    let config: GlosscheckConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `root`, or return the default if there is none.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<GlosscheckConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(GlosscheckConfig::default()),
    }
}

/// Host-side overrides. `None` defers to the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub fix_mode: Option<bool>,
    pub rerun_after_fix: Option<bool>,
    pub hard_fail_on_err: Option<bool>,
    pub discipline: Option<Discipline>,
    pub max_parallel: Option<usize>,
    pub timeout: Option<Duration>,
}

/// Config file and overrides folded into ready-to-use settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub settings: ValidateSettings,
    pub timeout: Option<Duration>,
}

impl MergedConfig {
    /// Fresh cancellation context honouring the configured timeout.
    pub fn context(&self) -> RunContext {
        match self.timeout {
            Some(timeout) => RunContext::with_timeout(timeout),
            None => RunContext::new(),
        }
    }
}

pub struct ConfigMerger {
    config: GlosscheckConfig,
}

impl ConfigMerger {
    pub fn new(config: GlosscheckConfig) -> Self {
        Self { config }
    }

    pub fn merge(self, overrides: &RunOverrides) -> MergedConfig {
        let run = self.config.run;

        let options = RunOptions {
            fix_mode: overrides.fix_mode.unwrap_or(run.fix_mode),
            rerun_after_fix: overrides.rerun_after_fix.unwrap_or(run.rerun_after_fix),
            hard_fail_on_err: overrides.hard_fail_on_err.unwrap_or(run.hard_fail_on_err),
        };

        let max_parallel = overrides
            .max_parallel
            .or(run.max_parallel)
            .unwrap_or(DEFAULT_MAX_PARALLEL);

        MergedConfig {
            settings: ValidateSettings {
                options,
                discipline: overrides.discipline.unwrap_or(run.discipline),
                max_parallel,
            },
            timeout: overrides
                .timeout
                .or(run.timeout_ms.map(Duration::from_millis)),
        }
    }
}
