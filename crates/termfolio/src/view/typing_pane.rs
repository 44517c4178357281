//! A bordered pane showing the revealed part of a highlighted document.
//!
//! Renders as a gutter of 1-based line numbers followed by colored spans.
//! While the reveal is incomplete a block cursor trails the last revealed
//! character, and the view scrolls so the cursor line stays in sight.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use ratatui::Frame;
use termfolio_core::VisibleContent;

use super::Theme;

/// Everything needed to draw one pane
#[derive(Debug, Clone)]
pub struct TypingPaneView<'a> {
    pub title: &'a str,
    pub visible: VisibleContent<'a>,
    /// Draw the block cursor this frame
    pub show_cursor: bool,
    /// Overlay shown while the mouse is over the pane
    pub hover_label: Option<&'a str>,
}

/// Width of the line-number gutter, including its trailing space
pub const GUTTER_WIDTH: u16 = 4;

pub fn render_typing_pane(frame: &mut Frame, area: Rect, view: &TypingPaneView<'_>, theme: &Theme) {
    let border_color = if view.hover_label.is_some() {
        theme.hover_bg
    } else {
        theme.border
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", view.title),
            Style::default().fg(theme.muted),
        ))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let first = scroll_offset(view.visible.cursor.line, inner.height as usize);
    let lines: Vec<Line> = view
        .visible
        .lines
        .iter()
        .enumerate()
        .skip(first)
        .take(inner.height as usize)
        .map(|(idx, line)| {
            let mut spans = Vec::with_capacity(line.tokens.len() + 2);
            spans.push(Span::styled(
                format!("{:>3} ", idx + 1),
                Style::default().fg(theme.gutter),
            ));
            spans.extend(
                line.tokens
                    .iter()
                    .map(|t| Span::styled(t.content, Style::default().fg(theme.token_color(t.color)))),
            );
            if view.show_cursor && idx == view.visible.cursor.line {
                spans.push(Span::styled(" ", Style::default().bg(theme.cursor)));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(label) = view.hover_label {
        render_hover_label(frame, inner, label, theme);
    }
}

/// First visible line so that `cursor_line` is on screen.
pub fn scroll_offset(cursor_line: usize, height: usize) -> usize {
    (cursor_line + 1).saturating_sub(height)
}

fn render_hover_label(frame: &mut Frame, area: Rect, label: &str, theme: &Theme) {
    let text = format!(" {label} → ");
    let width = (text.chars().count() as u16).min(area.width);
    let badge = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        1,
    );
    frame.render_widget(Clear, badge);
    frame.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(theme.hover_fg)
                .bg(theme.hover_bg)
                .add_modifier(Modifier::BOLD),
        ),
        badge,
    );
}
