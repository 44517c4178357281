use termfolio::dotfiles::{DotfileEntry, SyntaxHighlighter};
use termfolio_core::Document;

pub const GIT_ALIASES: &str = "# git helpers\nalias g='git'\nalias gs='git status'\n";
pub const FOCUS_SCRIPT: &str =
    "#!/usr/bin/env bash\nyabai -m window --focus \"$1\" || echo \"no window\"\n";

/// Highlighted documents shaped like the default manifest.
pub fn sample_documents(count: usize) -> Vec<Document> {
    let highlighter = SyntaxHighlighter::new();
    (0..count)
        .map(|i| {
            let entry = DotfileEntry::new(format!("zsh/aliases/file{i}.zsh"), "shellscript");
            let lines = highlighter
                .highlight(GIT_ALIASES, &entry.language)
                .expect("highlighting fixture");
            Document::new(entry.path.as_str(), entry.filename(), "shellscript", lines)
        })
        .collect()
}

/// A single long plain document, useful when the reveal must not finish.
pub fn long_document(chars: usize) -> Document {
    Document::from_plain("long.zsh", &"x".repeat(chars), "#a9b1d6")
}
