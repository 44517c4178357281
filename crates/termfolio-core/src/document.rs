//! Tokenized source documents.
//!
//! A [`Document`] is the output of the fetch-and-highlight step: the lines of
//! one source file, each split into runs of text sharing a single color.
//! Colors are opaque strings and are never interpreted here.

use serde::{Deserialize, Serialize};

/// A contiguous run of text sharing one highlight color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub content: String,
    pub color: String,
}

impl Token {
    pub fn new(content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: color.into(),
        }
    }

    /// Length in characters (Unicode scalar values), not bytes.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// One line of a document; concatenating the token contents gives its text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub tokens: Vec<Token>,
}

impl Line {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn char_len(&self) -> usize {
        self.tokens.iter().map(Token::char_len).sum()
    }

    /// The plain text of the line, without colors.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }
}

/// A syntax-highlighted source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Path of the file relative to its source root
    pub path: String,
    /// Display name, usually the last path component
    pub filename: String,
    /// Language tag the file was highlighted with
    pub language: String,
    pub lines: Vec<Line>,
}

impl Document {
    pub fn new(
        path: impl Into<String>,
        filename: impl Into<String>,
        language: impl Into<String>,
        lines: Vec<Line>,
    ) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
            language: language.into(),
            lines,
        }
    }

    /// Builds a single-color document from plain text, one line per `\n`.
    pub fn from_plain(filename: &str, text: &str, color: &str) -> Self {
        let lines = text
            .lines()
            .map(|l| {
                if l.is_empty() {
                    Line::default()
                } else {
                    Line::new(vec![Token::new(l, color)])
                }
            })
            .collect();
        Self::new(filename, filename, "plaintext", lines)
    }

    /// Number of reveal steps needed to show the whole document.
    ///
    /// Every line costs its character count plus one for the line break,
    /// including the last line.
    pub fn total_chars(&self) -> usize {
        self.lines.iter().map(|l| l.char_len() + 1).sum()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
