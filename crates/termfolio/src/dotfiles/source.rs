use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use super::DotfileEntry;

/// Where dotfile text comes from
pub trait DotfileSource {
    /// Raw text of one file. Any failure means the file is skipped.
    fn fetch(&self, entry: &DotfileEntry) -> Result<String>;
}

/// Fetches files over HTTP from a raw-content base URL
#[derive(Debug)]
pub struct HttpSource {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("termfolio/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, entry: &DotfileEntry) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            entry.path.trim_start_matches('/')
        )
    }
}

impl DotfileSource for HttpSource {
    fn fetch(&self, entry: &DotfileEntry) -> Result<String> {
        let url = self.url_for(entry);
        tracing::debug!("GET {}", url);

        // ureq reports 4xx/5xx as Error::Status
        let response = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("fetching {url}"))?;

        response
            .into_string()
            .with_context(|| format!("reading body of {url}"))
    }
}

/// Reads files from a local checkout
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DotfileSource for DirectorySource {
    fn fetch(&self, entry: &DotfileEntry) -> Result<String> {
        let path = self.root.join(&entry.path);
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }
}
