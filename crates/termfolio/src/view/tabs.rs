use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Theme;
use crate::app::TabId;

/// Columns taken by one tab: dot, space, label, padding.
pub fn tab_width(tab: TabId) -> u16 {
    tab.label().chars().count() as u16 + 4
}

/// Draws the tab bar and returns the clickable area of each visible tab.
pub fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    active: TabId,
    theme: &Theme,
) -> Vec<(TabId, Rect)> {
    let mut spans = Vec::new();
    let mut regions = Vec::new();
    let mut x = area.x;
    let right = area.x + area.width;

    for tab in TabId::ALL {
        let width = tab_width(tab);
        if x + width > right {
            break;
        }

        let (dot, dot_style, label_style) = if tab == active {
            (
                "●",
                Style::default().fg(theme.active_tab_dot).bg(theme.active_tab_bg),
                Style::default()
                    .fg(theme.foreground)
                    .bg(theme.active_tab_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" ", Style::default(), Style::default().fg(theme.muted))
        };
        let pad = if tab == active {
            Style::default().bg(theme.active_tab_bg)
        } else {
            Style::default()
        };

        spans.push(Span::styled(" ", pad));
        spans.push(Span::styled(dot, dot_style));
        spans.push(Span::styled(" ", pad));
        spans.push(Span::styled(tab.label(), label_style));
        spans.push(Span::styled(" ", pad));
        regions.push((tab, Rect::new(x, area.y, width, area.height.min(1))));
        x += width;

        if x < right {
            spans.push(Span::styled("│", Style::default().fg(theme.border)));
            x += 1;
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.title_bar_bg)),
        area,
    );
    regions
}
