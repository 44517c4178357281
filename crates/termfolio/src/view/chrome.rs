//! Window chrome: the rounded frame, the title bar with its three dots, and
//! the area left for the tab bar and page body.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;

use super::Theme;

/// Margin around the window when it is not maximized
pub const WINDOW_INSET: (u16, u16) = (4, 1);

/// Areas produced by [`render_chrome`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeLayout {
    pub window: Rect,
    pub title_bar: Rect,
    /// The green dot
    pub maximize_button: Rect,
    pub tab_bar: Rect,
    pub body: Rect,
}

/// The window rectangle inside `area`.
pub fn window_area(area: Rect, maximized: bool) -> Rect {
    let (dx, dy) = WINDOW_INSET;
    if maximized || area.width <= dx * 2 + 20 || area.height <= dy * 2 + 6 {
        return area;
    }
    Rect::new(area.x + dx, area.y + dy, area.width - dx * 2, area.height - dy * 2)
}

pub fn render_chrome(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    maximized: bool,
    theme: &Theme,
) -> ChromeLayout {
    let window = window_area(area, maximized);
    let border_type = if maximized {
        BorderType::Plain
    } else {
        BorderType::Rounded
    };
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(window);
    frame.render_widget(block, window);

    let [title_bar, tab_bar, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let dots = Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.dot_close)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.dot_minimize)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.dot_maximize)),
    ]);
    frame.render_widget(
        Paragraph::new(dots).style(Style::default().bg(theme.title_bar_bg)),
        title_bar,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        title_bar,
    );

    let maximize_button = if title_bar.width >= 6 && title_bar.height > 0 {
        Rect::new(title_bar.x + 5, title_bar.y, 1, 1)
    } else {
        Rect::default()
    };

    ChromeLayout {
        window,
        title_bar,
        maximize_button,
        tab_bar,
        body,
    }
}
