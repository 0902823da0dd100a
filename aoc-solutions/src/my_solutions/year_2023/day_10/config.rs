//! Interior scan configuration

use anyhow::{anyhow, bail, Context};
use std::str::FromStr;

/// Environment variable selecting the scan mode
pub const SCAN_MODE_ENV: &str = "AOC_INTERIOR_SCAN";
/// Environment variable fixing the scan thread count
pub const SCAN_THREADS_ENV: &str = "AOC_INTERIOR_THREADS";

/// How the per-cell interior test is scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// One cell after another on the calling thread
    Sequential,
    /// Cells spread over a rayon pool (default)
    #[default]
    Parallel,
}

impl FromStr for ScanMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            other => Err(anyhow!("expected 'sequential' or 'parallel', got {other:?}")),
        }
    }
}

/// Resolved configuration for the interior scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub mode: ScanMode,
    /// Dedicated pool size for [`ScanMode::Parallel`]; the global pool is used when unset
    pub threads: Option<usize>,
}

impl ScanConfig {
    pub fn sequential() -> Self {
        Self::default().with_mode(ScanMode::Sequential)
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Read [`SCAN_MODE_ENV`] and [`SCAN_THREADS_ENV`]; unset variables keep defaults
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup instead of the process environment
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup(SCAN_MODE_ENV) {
            config.mode = mode
                .parse()
                .with_context(|| format!("invalid {SCAN_MODE_ENV}"))?;
        }

        if let Some(threads) = lookup(SCAN_THREADS_ENV) {
            let threads: usize = threads
                .trim()
                .parse()
                .with_context(|| format!("invalid {SCAN_THREADS_ENV}: {threads:?}"))?;
            if threads == 0 {
                bail!("invalid {SCAN_THREADS_ENV}: must be at least 1");
            }
            if config.mode == ScanMode::Sequential {
                tracing::warn!(threads, "{SCAN_THREADS_ENV} ignored for sequential scan");
            }
            config.threads = Some(threads);
        }

        Ok(config)
    }
}
