use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Theme;

/// `> command`, with the block cursor after it when `cursor` is set.
pub fn command_line<'a>(typed: &'a str, cursor: bool, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(theme.prompt)),
        Span::styled(typed, Style::default().fg(theme.command)),
    ];
    if cursor {
        spans.push(Span::styled(" ", Style::default().bg(theme.cursor)));
    }
    Line::from(spans)
}

pub fn enter_prompt_suffix(is_last_tab: bool) -> &'static str {
    if is_last_tab {
        " to go home"
    } else {
        " to continue →"
    }
}

/// `> Press [Enter] to continue →` with a blinking block cursor.
pub fn enter_prompt_line(is_last_tab: bool, cursor_on: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(theme.prompt)),
        Span::styled("Press ", Style::default().fg(theme.foreground_dark)),
        Span::styled(
            "[Enter]",
            Style::default()
                .fg(theme.key_hint)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            enter_prompt_suffix(is_last_tab),
            Style::default().fg(theme.foreground_dark),
        ),
        Span::raw(" "),
    ];
    if cursor_on {
        spans.push(Span::styled(" ", Style::default().bg(theme.cursor)));
    }
    Line::from(spans)
}

pub fn render_enter_prompt(
    frame: &mut Frame,
    area: Rect,
    is_last_tab: bool,
    cursor_on: bool,
    theme: &Theme,
) {
    frame.render_widget(
        Paragraph::new(enter_prompt_line(is_last_tab, cursor_on, theme)),
        area,
    );
}
