//! Maps a global reveal count onto a document's lines and tokens.
//!
//! The reveal count walks the document in reading order. Every character of
//! every token costs one step and every line break costs one more, so a
//! document with lines `"a"` and `"b"` needs four steps to be fully shown.
//! [`translate`] turns such a count into the part of the document that is
//! visible plus the position of the text cursor.

use crate::document::Document;

/// Where the blinking cursor sits, in visible-line coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Index of the line in the document (and in [`VisibleContent::lines`])
    pub line: usize,
    /// Column in characters from the start of the line
    pub column: usize,
}

/// A token, or the revealed prefix of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleToken<'a> {
    pub content: &'a str,
    pub color: &'a str,
}

/// The revealed part of one line
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VisibleLine<'a> {
    pub tokens: Vec<VisibleToken<'a>>,
}

impl VisibleLine<'_> {
    pub fn char_len(&self) -> usize {
        self.tokens.iter().map(|t| t.content.chars().count()).sum()
    }

    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.content).collect()
    }
}

/// Result of [`translate`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisibleContent<'a> {
    /// Lines from the top of the document down to the cursor line, in order.
    /// Never empty.
    pub lines: Vec<VisibleLine<'a>>,
    pub cursor: CursorPosition,
}

/// Computes the visible part of `document` after `reveal` steps.
///
/// Lines below the cursor are not part of the result at all. The line that
/// holds the cursor is always present, even when none of its characters are
/// revealed yet, and the first line is always present so an empty document
/// still renders a prompt. Counts past [`Document::total_chars`] are
/// clamped; at the end the cursor rests after the last character.
///
/// The result borrows from `document`; truncated tokens are prefixes of the
/// original strings, cut on character boundaries.
pub fn translate(document: &Document, reveal: usize) -> VisibleContent<'_> {
    let reveal = reveal.min(document.total_chars());
    let mut consumed = 0usize;
    let mut lines = Vec::new();
    let mut cursor = None;

    for (line_idx, line) in document.lines.iter().enumerate() {
        let mut visible = VisibleLine::default();
        let mut visible_len = 0usize;
        let mut line_complete = true;

        for token in &line.tokens {
            let token_start = consumed;
            let token_len = token.char_len();

            if reveal <= token_start {
                line_complete = false;
                break;
            } else if reveal >= token_start + token_len {
                visible.tokens.push(VisibleToken {
                    content: &token.content,
                    color: &token.color,
                });
                consumed += token_len;
                visible_len += token_len;
            } else {
                let take = reveal - token_start;
                visible.tokens.push(VisibleToken {
                    content: char_prefix(&token.content, take),
                    color: &token.color,
                });
                visible_len += take;
                line_complete = false;
                break;
            }
        }

        lines.push(visible);

        if !line_complete {
            cursor = Some(CursorPosition {
                line: line_idx,
                column: visible_len,
            });
            break;
        }

        // Line break
        consumed += 1;
        if consumed > reveal {
            cursor = Some(CursorPosition {
                line: line_idx,
                column: visible_len,
            });
            break;
        }
    }

    if lines.is_empty() {
        lines.push(VisibleLine::default());
    }

    let cursor = cursor.unwrap_or_else(|| match document.lines.last() {
        Some(last) => CursorPosition {
            line: document.lines.len() - 1,
            column: last.char_len(),
        },
        None => CursorPosition::default(),
    });

    VisibleContent { lines, cursor }
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
