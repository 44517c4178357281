//! Social tab: `dig @kevintraver` answered with one record per profile.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use termfolio_core::{CursorBlink, Millis};

use super::prompt::{command_line, enter_prompt_line};
use super::Theme;
use crate::app::page::SocialPage;
use crate::content::{SocialRecord, DIG_HEADER, SOCIAL_RECORDS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLayout {
    pub links: Vec<(Rect, &'static str)>,
}

/// `github.        300  IN  LINK  github.com/kevintraver`
pub fn record_line(record: &SocialRecord, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("│ ", Style::default().fg(theme.border)),
        Span::styled(
            format!("{:<14}", format!("{}.", record.name)),
            Style::default().fg(theme.record_name),
        ),
        Span::styled(
            format!("{:<5}IN  {:<6}", record.ttl, record.kind),
            Style::default().fg(theme.muted),
        ),
        Span::styled(record.display_target(), Style::default().fg(theme.command)),
    ])
}

pub fn render_social(
    frame: &mut Frame,
    area: Rect,
    page: &SocialPage,
    is_last_tab: bool,
    now: Millis,
    blink: &CursorBlink,
    theme: &Theme,
) -> SocialLayout {
    let text_area = Rect::new(
        area.x + 2.min(area.width),
        area.y + 1.min(area.height),
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    );
    let cursor_on = blink.is_on(now);
    let typer = page.typer();

    let mut lines = vec![command_line(
        typer.typed(),
        typer.cursor_visible_phase() && cursor_on,
        theme,
    )];
    let mut links = Vec::new();

    if typer.output_visible() {
        lines.extend(
            DIG_HEADER
                .iter()
                .map(|l| Line::styled(*l, Style::default().fg(theme.foreground_dark))),
        );
        lines.push(Line::default());
        for record in SOCIAL_RECORDS {
            let row = lines.len() as u16;
            if row < text_area.height {
                links.push((
                    Rect::new(text_area.x, text_area.y + row, text_area.width, 1),
                    record.url,
                ));
            }
            lines.push(record_line(record, theme));
        }
        lines.push(Line::default());
        lines.push(enter_prompt_line(is_last_tab, cursor_on, theme));
    }

    frame.render_widget(Paragraph::new(lines), text_area);
    SocialLayout { links }
}
