//! Dotfile pipeline: fetch source files and turn them into highlighted
//! [`Document`]s for the typing panes.
//!
//! A file that fails to fetch or highlight is logged and left out; callers
//! never see a partial document.

mod highlight;
mod source;

use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};
use termfolio_core::Document;

pub use highlight::SyntaxHighlighter;
pub use source::{DirectorySource, DotfileSource, HttpSource};

pub const DEFAULT_RAW_BASE_URL: &str =
    "https://raw.githubusercontent.com/kevintraver/dotfiles/master";

/// One file to fetch, relative to the source root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotfileEntry {
    pub path: String,
    /// Highlighting language tag, e.g. `shellscript` or `bash`
    pub language: String,
}

impl DotfileEntry {
    pub fn new(path: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
        }
    }

    /// Last path component.
    pub fn filename(&self) -> &str {
        self.path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.path)
    }
}

pub fn default_manifest() -> Vec<DotfileEntry> {
    vec![
        DotfileEntry::new("zsh/aliases/tools.zsh", "shellscript"),
        DotfileEntry::new("zsh/aliases/git.zsh", "shellscript"),
        DotfileEntry::new("zsh/aliases/filesystem.zsh", "shellscript"),
        DotfileEntry::new("zsh/aliases/development.zsh", "shellscript"),
        DotfileEntry::new("zsh/aliases/networking.zsh", "shellscript"),
        DotfileEntry::new("yabai/scripts/focus_meeting.sh", "bash"),
    ]
}

/// Fetches and highlights every entry, in manifest order.
pub fn fetch_and_tokenize(
    source: &dyn DotfileSource,
    manifest: &[DotfileEntry],
    highlighter: &SyntaxHighlighter,
) -> Vec<Document> {
    let mut documents = Vec::with_capacity(manifest.len());

    for entry in manifest {
        let text = match source.fetch(entry) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Skipping dotfile {}: {:#}", entry.path, e);
                continue;
            }
        };

        match highlighter.highlight(&text, &entry.language) {
            Ok(lines) => {
                tracing::debug!("Highlighted {} ({} lines)", entry.path, lines.len());
                documents.push(Document::new(
                    entry.path.as_str(),
                    entry.filename(),
                    entry.language.as_str(),
                    lines,
                ));
            }
            Err(e) => tracing::warn!("Skipping dotfile {}: {:#}", entry.path, e),
        }
    }

    documents
}

/// Runs [`fetch_and_tokenize`] on a background thread.
///
/// The receiver yields exactly one batch of documents (possibly empty).
pub fn spawn_loader(
    source: Box<dyn DotfileSource + Send>,
    manifest: Vec<DotfileEntry>,
) -> mpsc::Receiver<Vec<Document>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let highlighter = SyntaxHighlighter::new();
        let documents = fetch_and_tokenize(source.as_ref(), &manifest, &highlighter);
        tracing::info!("Loaded {}/{} dotfiles", documents.len(), manifest.len());
        // The app may have quit already
        let _ = tx.send(documents);
    });

    rx
}
