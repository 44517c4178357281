//! Tokyo Night colors for the window chrome and panes.

use ratatui::style::Color;

/// Colors used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Output text, one step dimmer than `foreground`
    pub foreground_dark: Color,
    pub title_bar_bg: Color,
    pub border: Color,
    pub muted: Color,
    pub gutter: Color,
    /// The `>` before a command
    pub prompt: Color,
    pub command: Color,
    pub item_name: Color,
    pub record_name: Color,
    pub link: Color,
    pub key_hint: Color,
    pub cursor: Color,
    pub hover_bg: Color,
    pub hover_fg: Color,
    pub dot_close: Color,
    pub dot_minimize: Color,
    pub dot_maximize: Color,
    pub active_tab_bg: Color,
    pub active_tab_dot: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    pub fn tokyo_night() -> Self {
        Self {
            background: Color::Rgb(0x1a, 0x1b, 0x26),
            foreground: Color::Rgb(0xc0, 0xca, 0xf5),
            foreground_dark: Color::Rgb(0xa9, 0xb1, 0xd6),
            title_bar_bg: Color::Rgb(0x16, 0x16, 0x1e),
            border: Color::Rgb(0x29, 0x2e, 0x42),
            muted: Color::Rgb(0x56, 0x5f, 0x89),
            gutter: Color::Rgb(0x3b, 0x42, 0x61),
            prompt: Color::Rgb(0xbb, 0x9a, 0xf7),
            command: Color::Rgb(0x7d, 0xcf, 0xff),
            item_name: Color::Rgb(0xe0, 0xaf, 0x68),
            record_name: Color::Rgb(0x9e, 0xce, 0x6a),
            link: Color::Rgb(0xff, 0x9e, 0x64),
            key_hint: Color::Rgb(0x9e, 0xce, 0x6a),
            cursor: Color::Rgb(0xc0, 0xca, 0xf5),
            hover_bg: Color::Rgb(0x7a, 0xa2, 0xf7),
            hover_fg: Color::Rgb(0x1a, 0x1b, 0x26),
            dot_close: Color::Rgb(0xf7, 0x76, 0x8e),
            dot_minimize: Color::Rgb(0xe0, 0xaf, 0x68),
            dot_maximize: Color::Rgb(0x9e, 0xce, 0x6a),
            active_tab_bg: Color::Rgb(0x24, 0x28, 0x3b),
            active_tab_dot: Color::Rgb(0x9e, 0xce, 0x6a),
        }
    }

    /// Color for a highlighter token, falling back to the foreground.
    pub fn token_color(&self, hex: &str) -> Color {
        parse_hex_color(hex).unwrap_or(self.foreground_dark)
    }
}

/// Parses `#rrggbb`.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
