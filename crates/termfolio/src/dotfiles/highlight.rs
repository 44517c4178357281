//! Syntax highlighting via syntect.
//!
//! Lines are parsed with syntect's TextMate grammars; the resulting scope
//! stack is reduced to a small set of categories, and every category has a
//! fixed Tokyo Night color.

use anyhow::{Context, Result};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use termfolio_core::{Line, Token};

/// Foreground for text outside any highlighted scope
pub const DEFAULT_FOREGROUND: &str = "#a9b1d6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HighlightCategory {
    Comment,
    String,
    Keyword,
    Operator,
    Function,
    Constant,
    Variable,
}

impl HighlightCategory {
    fn color(self) -> &'static str {
        match self {
            Self::Comment => "#565f89",
            Self::String => "#9ece6a",
            Self::Keyword => "#bb9af7",
            Self::Operator => "#89ddff",
            Self::Function => "#7aa2f7",
            Self::Constant => "#ff9e64",
            Self::Variable => "#e0af68",
        }
    }
}

fn scope_to_category(scope: &str) -> Option<HighlightCategory> {
    if scope.starts_with("comment") || scope.starts_with("punctuation.definition.comment") {
        return Some(HighlightCategory::Comment);
    }
    if scope.starts_with("string") || scope.starts_with("punctuation.definition.string") {
        return Some(HighlightCategory::String);
    }
    if scope.starts_with("keyword.operator") || scope.starts_with("punctuation") {
        return Some(HighlightCategory::Operator);
    }
    if scope.starts_with("keyword") || scope.starts_with("storage") {
        return Some(HighlightCategory::Keyword);
    }
    if scope.starts_with("entity.name.function")
        || scope.starts_with("support.function")
        || scope.starts_with("meta.function-call")
    {
        return Some(HighlightCategory::Function);
    }
    if scope.starts_with("constant") {
        return Some(HighlightCategory::Constant);
    }
    if scope.starts_with("variable") {
        return Some(HighlightCategory::Variable);
    }
    None
}

/// Innermost scope with a known category wins.
fn scope_stack_color(scopes: &ScopeStack) -> &'static str {
    scopes
        .as_slice()
        .iter()
        .rev()
        .find_map(|scope| scope_to_category(&scope.build_string()))
        .map(HighlightCategory::color)
        .unwrap_or(DEFAULT_FOREGROUND)
}

/// Turns source text into colored lines
#[derive(Debug)]
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn syntax_for(&self, language: &str) -> &SyntaxReference {
        let token = match language {
            "shellscript" | "shell" | "bash" | "zsh" | "sh" => "sh",
            other => other,
        };
        self.syntax_set
            .find_syntax_by_token(token)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    /// Highlights `text` line by line.
    ///
    /// Line breaks are not part of any token, empty runs are dropped, and
    /// adjacent runs of the same color are merged.
    pub fn highlight(&self, text: &str, language: &str) -> Result<Vec<Line>> {
        let syntax = self.syntax_for(language);
        let mut state = ParseState::new(syntax);
        let mut scopes = ScopeStack::new();
        let mut lines = Vec::new();

        for (line_no, raw) in text.lines().enumerate() {
            let line_for_syntect = format!("{raw}\n");
            let ops = state
                .parse_line(&line_for_syntect, &self.syntax_set)
                .with_context(|| format!("parsing line {} as {}", line_no + 1, syntax.name))?;

            let mut tokens = Vec::new();
            let mut offset = 0;
            for (op_offset, op) in ops {
                let end = op_offset.min(raw.len());
                if end > offset {
                    push_token(&mut tokens, &raw[offset..end], scope_stack_color(&scopes));
                    offset = end;
                }
                let _ = scopes.apply(&op);
            }
            if offset < raw.len() {
                push_token(&mut tokens, &raw[offset..], scope_stack_color(&scopes));
            }

            lines.push(Line::new(tokens));
        }

        Ok(lines)
    }
}

fn push_token(tokens: &mut Vec<Token>, content: &str, color: &str) {
    if content.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(last) if last.color == color => last.content.push_str(content),
        _ => tokens.push(Token::new(content, color)),
    }
}
