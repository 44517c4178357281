//! Rendering. Every function here draws one part of the window into a
//! ratatui frame and reports the clickable regions it produced.

pub mod chrome;
pub mod home;
pub mod listing;
pub mod prompt;
pub mod social;
pub mod tabs;
pub mod theme;
pub mod typing_pane;

use ratatui::layout::Rect;

use crate::app::TabId;

pub use theme::Theme;

/// Something the mouse can act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    MaximizeButton,
    Tab(TabId),
    /// Index into the home page's dotfile panes
    DotfilePane(usize),
    Link(String),
}

/// Clickable regions of the last frame; later regions sit on top
#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    regions: Vec<(Rect, HitTarget)>,
}

impl FrameLayout {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| rect_contains(*area, x, y))
            .map(|(_, target)| target)
    }

    pub fn regions(&self) -> &[(Rect, HitTarget)] {
        &self.regions
    }

    /// The area registered for `target`, if any.
    pub fn area_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }
}

pub fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
