//! Home tab: the `whoami` transcript above the grid of dotfile panes.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use termfolio_core::{CursorBlink, Millis, Transcript};

use super::prompt::command_line;
use super::typing_pane::{render_typing_pane, TypingPaneView};
use super::Theme;
use crate::app::page::{DotfilePane, HomePage};

/// Where each dotfile pane was drawn, by pane index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeLayout {
    pub panes: Vec<Rect>,
}

/// Rows the whole transcript needs once every section is shown.
pub fn transcript_height(transcript: &Transcript) -> u16 {
    transcript
        .sections()
        .iter()
        .map(|s| 1 + s.output.len() as u16)
        .sum()
}

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    home: &HomePage,
    now: Millis,
    blink: &CursorBlink,
    hovered_pane: Option<usize>,
    theme: &Theme,
) -> HomeLayout {
    let padded = Rect::new(
        area.x + 2.min(area.width),
        area.y + 1.min(area.height),
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    );
    let wanted = transcript_height(home.transcript());
    let [text_area, _, grid_area] = Layout::vertical([
        Constraint::Length(wanted.min(padded.height)),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(padded);

    let cursor_on = blink.is_on(now);
    let mut lines = Vec::new();
    for section in home.transcript().visible_sections() {
        lines.push(command_line(section.command, section.cursor && cursor_on, theme));
        lines.extend(
            section
                .output
                .iter()
                .map(|l| Line::styled(l.as_str(), Style::default().fg(theme.foreground_dark))),
        );
    }
    frame.render_widget(Paragraph::new(lines), text_area);

    let areas = grid_areas(grid_area, home.panes().len());
    for (i, (pane, pane_area)) in home.panes().iter().zip(&areas).enumerate() {
        render_dotfile_pane(frame, *pane_area, pane, now, blink, hovered_pane == Some(i), theme);
    }

    HomeLayout { panes: areas }
}

fn render_dotfile_pane(
    frame: &mut Frame,
    area: Rect,
    pane: &DotfilePane,
    now: Millis,
    blink: &CursorBlink,
    hovered: bool,
    theme: &Theme,
) {
    let view = TypingPaneView {
        title: &pane.clock.document().filename,
        visible: pane.clock.visible(),
        show_cursor: !pane.clock.is_complete() && blink.is_on(now),
        hover_label: hovered.then_some(pane.label.as_str()),
    };
    render_typing_pane(frame, area, &view, theme);
}

/// Two panes side by side on top, the rest sharing the bottom row.
///
/// Returns no areas when the grid is too short to show any code.
pub fn grid_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.height < 4 || area.width < 10 {
        return Vec::new();
    }

    let top_count = count.min(2);
    let bottom_count = count - top_count;
    let (top, bottom) = if bottom_count == 0 {
        (area, None)
    } else {
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
        (top, Some(bottom))
    };

    let mut areas = split_row(top, top_count);
    if let Some(bottom) = bottom {
        areas.extend(split_row(bottom, bottom_count));
    }
    areas
}

fn split_row(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
    Layout::horizontal(constraints).split(area).to_vec()
}
