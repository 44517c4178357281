use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use termfolio::app::{App, RecordingOpener};
use termfolio::config::Config;
use termfolio::services::time_source::TestTimeSource;
use termfolio_core::Document;

/// Frame length used when advancing time
pub const FRAME_MS: u64 = 16;

/// Drives an [`App`] against a virtual terminal and a manual clock
pub struct AppTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
    time: Arc<TestTimeSource>,
    opener: RecordingOpener,
}

impl AppTestHarness {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_config(Config::default(), width, height)
    }

    pub fn with_config(config: Config, width: u16, height: u16) -> Result<Self> {
        let time = TestTimeSource::shared();
        let opener = RecordingOpener::new();
        let app = App::new(config, time.clone())
            .with_seed(0x5eed)
            .with_link_opener(Box::new(opener.clone()));
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        Ok(Self {
            app,
            terminal,
            time,
            opener,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn set_documents(&mut self, documents: Vec<Document>) {
        self.app.set_documents(documents);
    }

    pub fn render(&mut self) -> Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Runs frames for `ms` milliseconds of virtual time, then renders.
    pub fn advance(&mut self, ms: u64) -> Result<()> {
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(FRAME_MS);
            self.time.advance(Duration::from_millis(step));
            self.app.tick();
            remaining -= step;
        }
        self.render()
    }

    /// Advances frame by frame until `done` holds, failing after `max_ms`.
    pub fn advance_until(&mut self, max_ms: u64, mut done: impl FnMut(&App) -> bool) -> Result<()> {
        let mut elapsed = 0;
        while !done(&self.app) {
            if elapsed >= max_ms {
                anyhow::bail!("condition not met after {max_ms}ms");
            }
            self.time.advance(Duration::from_millis(FRAME_MS));
            self.app.tick();
            elapsed += FRAME_MS;
        }
        self.render()
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    pub fn press(&mut self, code: KeyCode) -> Result<()> {
        self.send_key(code, KeyModifiers::NONE)
    }

    pub fn mouse_move(&mut self, column: u16, row: u16) -> Result<()> {
        self.mouse(MouseEventKind::Moved, column, row)
    }

    pub fn click(&mut self, column: u16, row: u16) -> Result<()> {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> Result<()> {
        self.app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render()
    }

    pub fn focus_lost(&mut self) {
        self.app.handle_event(Event::FocusLost);
    }

    pub fn focus_gained(&mut self) {
        self.app.handle_event(Event::FocusGained);
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn screen_to_string(&self) -> String {
        let buffer = self.buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    pub fn screen_row(&self, row: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol())
            .collect()
    }

    /// Top-left cell of the first occurrence of `text`.
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let height = self.buffer().area.height;
        (0..height).find_map(|y| {
            let row: Vec<char> = self.screen_row(y).chars().collect();
            let needle: Vec<char> = text.chars().collect();
            row.windows(needle.len())
                .position(|w| w == needle.as_slice())
                .map(|x| (x as u16, y))
        })
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    /// URLs the app tried to open.
    pub fn opened_links(&self) -> Vec<String> {
        self.opener.opened()
    }
}
