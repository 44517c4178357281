use anyhow::{Context, Result};

/// Opens URLs outside the terminal
pub trait LinkOpener: Send {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Hands URLs to the desktop's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("opening {url}"))
    }
}

/// Remembers URLs instead of opening them
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, through this handle or any clone of it.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened
            .lock()
            .map_err(|_| anyhow::anyhow!("opener log poisoned"))?
            .push(url.to_string());
        Ok(())
    }
}
