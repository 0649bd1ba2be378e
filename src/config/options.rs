// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything one run needs. Built explicitly by the caller; nothing global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub scrape: ScrapeOptions,
    pub fetch: FetchOptions,
    pub db_path: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            fetch: FetchOptions::default(),
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl RunOptions {
    pub fn with_db_path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.scrape.feed_url = url.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub feed_url: String,
    /// Headshot fetch workers. 0 and 1 both mean sequential.
    pub workers: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            feed_url: s!(FEED_URL),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl ScrapeOptions {
    /// Worker count actually used for `n` entries.
    pub fn effective_workers(&self, n: usize) -> usize {
        self.workers.clamp(1, MAX_WORKERS).min(n.max(1))
    }
}

/// Pass-through HTTP settings. Not validated here; the client rejects what it can't use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub headers: Vec<(String, String)>,
    pub proxy: Option<String>,
    /// `None` disables the client's default timeout entirely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            proxy: None,
            timeout: None,
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    /// Parse a `Name: value` pair as typed on the command line.
    pub fn push_header_line(&mut self, line: &str) -> Result<(), String> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| format!("Header must look like `Name: value`, got `{line}`"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Empty header name in `{line}`"));
        }
        self.headers.push((s!(name), s!(value.trim())));
        Ok(())
    }
}
