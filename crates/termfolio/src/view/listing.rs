//! Projects and dev tabs: a grid of panes that each type a command and then
//! print a titled list.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;
use termfolio_core::{CommandTyper, CursorBlink, Millis};

use super::prompt::{command_line, render_enter_prompt};
use super::{wrap_words, Theme};
use crate::app::page::ListingPage;
use crate::content::ListingContent;

/// Clickable rows of a listing tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingLayout {
    pub links: Vec<(Rect, &'static str)>,
}

/// Lines of one pane plus the rows that open a link
struct PaneText<'a> {
    lines: Vec<Line<'a>>,
    /// (first row, row count, url)
    links: Vec<(u16, u16, &'static str)>,
}

pub fn render_listing(
    frame: &mut Frame,
    area: Rect,
    page: &ListingPage,
    is_last_tab: bool,
    now: Millis,
    blink: &CursorBlink,
    theme: &Theme,
) -> ListingLayout {
    let cursor_on = blink.is_on(now);
    let (grid, prompt) = if page.is_complete() && area.height > 2 {
        let [grid, _, prompt] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        (grid, Some(prompt))
    } else {
        (area, None)
    };

    let mut layout = ListingLayout::default();
    let cells = grid_cells(grid, page.content().len());
    for ((content, typer), cell) in page.content().iter().zip(page.typers()).zip(cells) {
        layout
            .links
            .extend(render_listing_pane(frame, cell, content, typer, cursor_on, theme));
    }

    if let Some(prompt) = prompt {
        let prompt = Rect::new(
            prompt.x + 2.min(prompt.width),
            prompt.y,
            prompt.width.saturating_sub(2),
            prompt.height,
        );
        render_enter_prompt(frame, prompt, is_last_tab, cursor_on, theme);
    }

    layout
}

/// Two columns, as many rows as needed.
pub fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = count.min(2);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::vertical((0..rows).map(|_| Constraint::Ratio(1, rows as u32))).split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

fn render_listing_pane(
    frame: &mut Frame,
    area: Rect,
    content: &ListingContent,
    typer: &CommandTyper,
    cursor_on: bool,
    theme: &Theme,
) -> Vec<(Rect, &'static str)> {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_area = Rect::new(
        inner.x + 1.min(inner.width),
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    if text_area.width == 0 || text_area.height == 0 {
        return Vec::new();
    }

    let text = pane_text(content, typer, cursor_on, text_area.width as usize, theme);
    frame.render_widget(Paragraph::new(text.lines), text_area);

    text.links
        .into_iter()
        .filter(|(row, _, _)| *row < text_area.height)
        .map(|(row, rows, url)| {
            let height = rows.min(text_area.height - row);
            (
                Rect::new(text_area.x, text_area.y + row, text_area.width, height),
                url,
            )
        })
        .collect()
}

fn pane_text<'a>(
    content: &ListingContent,
    typer: &'a CommandTyper,
    cursor_on: bool,
    width: usize,
    theme: &Theme,
) -> PaneText<'a> {
    let mut lines = vec![command_line(
        typer.typed(),
        typer.cursor_visible_phase() && cursor_on,
        theme,
    )];
    let mut links = Vec::new();

    if !typer.output_visible() {
        return PaneText { lines, links };
    }

    let bar = Style::default().fg(theme.border);
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("# {}", content.title),
        Style::default()
            .fg(theme.foreground_dark)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());

    for item in content.items {
        let first = lines.len() as u16;
        lines.push(Line::from(vec![
            Span::styled("│ ", bar),
            Span::styled(item.name, Style::default().fg(theme.item_name)),
        ]));
        for desc in wrap_words(item.description, width.saturating_sub(2)) {
            lines.push(Line::from(vec![
                Span::styled("│ ", bar),
                Span::styled(desc, Style::default().fg(theme.muted)),
            ]));
        }
        if let Some(url) = item.url {
            links.push((first, lines.len() as u16 - first, url));
        }
        lines.push(Line::default());
    }

    if let Some(link) = content.link {
        links.push((lines.len() as u16, 1, link.url));
        lines.push(Line::styled(
            format!("→ {}", link.label),
            Style::default().fg(theme.link),
        ));
    }

    PaneText { lines, links }
}
