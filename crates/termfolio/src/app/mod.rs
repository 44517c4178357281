//! Application state: the active tab, its page, window flags, and the
//! dispatch of terminal events.

mod opener;
pub mod page;
mod tab;

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use termfolio_core::{CursorBlink, Document, Millis, SplitMix64};

use crate::config::Config;
use crate::services::time_source::SharedTimeSource;
use crate::view::chrome::render_chrome;
use crate::view::home::render_home;
use crate::view::listing::render_listing;
use crate::view::social::render_social;
use crate::view::tabs::render_tabs;
use crate::view::{FrameLayout, HitTarget, Theme};

pub use opener::{LinkOpener, RecordingOpener, SystemOpener};
pub use page::{DotfilePane, HomePage, ListingPage, Page, SocialPage};
pub use tab::TabId;

/// The whole running portfolio
pub struct App {
    config: Config,
    time_source: SharedTimeSource,
    /// Frame timestamps are milliseconds since this instant
    epoch: Instant,
    rng: SplitMix64,
    theme: Theme,
    blink: CursorBlink,
    tab: TabId,
    page: Page,
    documents: Vec<Arc<Document>>,
    loader: Option<Receiver<Vec<Document>>>,
    maximized: bool,
    focused: bool,
    hovered: Option<HitTarget>,
    layout: FrameLayout,
    opener: Box<dyn LinkOpener>,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("tab", &self.tab)
            .field("documents", &self.documents.len())
            .field("maximized", &self.maximized)
            .field("focused", &self.focused)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(config: Config, time_source: SharedTimeSource) -> Self {
        let epoch = time_source.now();
        Self {
            config,
            time_source,
            epoch,
            rng: SplitMix64::from_time(),
            theme: Theme::default(),
            blink: CursorBlink::new(0.0),
            tab: TabId::Home,
            page: Page::mount(TabId::Home, 0.0),
            documents: Vec::new(),
            loader: None,
            maximized: false,
            focused: true,
            hovered: None,
            layout: FrameLayout::default(),
            opener: Box::new(SystemOpener),
            should_quit: false,
        }
    }

    /// Makes every random decision reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SplitMix64::new(seed);
        self
    }

    pub fn with_link_opener(mut self, opener: Box<dyn LinkOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Waits for documents from a background loader.
    pub fn attach_loader(&mut self, loader: Receiver<Vec<Document>>) {
        self.loader = Some(loader);
    }

    /// Installs loaded dotfiles and fills the home grid if it is showing.
    pub fn set_documents(&mut self, documents: Vec<Document>) {
        tracing::info!("{} dotfiles ready", documents.len());
        self.documents = documents.into_iter().map(Arc::new).collect();
        let now = self.now_ms();
        self.attach_home_panes_at(now);
    }

    /// Milliseconds since the app was created.
    pub fn now_ms(&self) -> Millis {
        self.time_source.millis_since(self.epoch)
    }

    /// Collects loader output and advances every animation. Returns `true`
    /// if anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.poll_loader();
        let now = self.now_ms();
        changed |= self.page.update(now, &mut self.rng);
        changed
    }

    fn poll_loader(&mut self) -> bool {
        let Some(loader) = &self.loader else {
            return false;
        };
        match loader.try_recv() {
            Ok(documents) => {
                self.loader = None;
                self.set_documents(documents);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("Dotfile loader exited without sending documents");
                self.loader = None;
                false
            }
        }
    }

    fn attach_home_panes_at(&mut self, now: Millis) {
        let Page::Home(home) = &mut self.page else {
            return;
        };
        home.attach_documents(
            &self.documents,
            &self.config.background_panes,
            &self.config.typing,
            &mut self.rng,
            now,
        );
        if !self.focused {
            self.page.set_active(false);
        }
    }

    /// Replaces the page with a fresh one for `tab`.
    pub fn switch_tab(&mut self, tab: TabId) {
        if tab == self.tab {
            return;
        }
        tracing::debug!("Switching tab {:?} -> {:?}", self.tab, tab);
        let now = self.now_ms();
        self.tab = tab;
        self.page = Page::mount(tab, now);
        self.hovered = None;
        if tab == TabId::Home && !self.documents.is_empty() {
            self.attach_home_panes_at(now);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusGained => self.set_focused(true),
            Event::FocusLost => self.set_focused(false),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
                self.switch_tab(self.tab.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.switch_tab(self.tab.prev());
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = TabId::from_index(index) {
                    self.switch_tab(tab);
                }
            }
            KeyCode::Char('m') => self.toggle_maximized(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let target = self.layout.hit_test(mouse.column, mouse.row).cloned();
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hovered = target,
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = target {
                    self.activate(target);
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self, target: HitTarget) {
        match target {
            HitTarget::MaximizeButton => self.toggle_maximized(),
            HitTarget::Tab(tab) => self.switch_tab(tab),
            HitTarget::DotfilePane(index) => {
                let link = match &self.page {
                    Page::Home(home) => home.panes().get(index).map(|p| p.link.clone()),
                    _ => None,
                };
                if let Some(link) = link {
                    self.open_link(&link);
                }
            }
            HitTarget::Link(url) => self.open_link(&url),
        }
    }

    fn open_link(&mut self, url: &str) {
        match self.opener.open(url) {
            Ok(()) => tracing::info!("Opened {}", url),
            Err(e) => tracing::warn!("Failed to open {}: {:#}", url, e),
        }
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
    }

    /// Pauses the reveal clocks while the terminal is in the background.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        tracing::debug!("Focus {}", if focused { "gained" } else { "lost" });
        self.focused = focused;
        self.page.set_active(focused);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let now = self.now_ms();
        let theme = self.theme;
        let area = frame.area();
        let chrome = render_chrome(
            frame,
            area,
            &self.config.title,
            self.maximized,
            &theme,
        );

        let mut layout = FrameLayout::default();
        layout.push(chrome.maximize_button, HitTarget::MaximizeButton);
        for (tab, area) in render_tabs(frame, chrome.tab_bar, self.tab, &theme) {
            layout.push(area, HitTarget::Tab(tab));
        }

        let hovered_pane = match self.hovered {
            Some(HitTarget::DotfilePane(index)) => Some(index),
            _ => None,
        };
        let is_last = self.tab.is_last();

        match &self.page {
            Page::Home(home) => {
                let home_layout =
                    render_home(frame, chrome.body, home, now, &self.blink, hovered_pane, &theme);
                for (index, area) in home_layout.panes.into_iter().enumerate() {
                    layout.push(area, HitTarget::DotfilePane(index));
                }
            }
            Page::Listing(listing) => {
                let listing_layout =
                    render_listing(frame, chrome.body, listing, is_last, now, &self.blink, &theme);
                for (area, url) in listing_layout.links {
                    layout.push(area, HitTarget::Link(url.to_string()));
                }
            }
            Page::Social(social) => {
                let social_layout =
                    render_social(frame, chrome.body, social, is_last, now, &self.blink, &theme);
                for (area, url) in social_layout.links {
                    layout.push(area, HitTarget::Link(url.to_string()));
                }
            }
        }

        self.layout = layout;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn documents(&self) -> &[Arc<Document>] {
        &self.documents
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn hovered(&self) -> Option<&HitTarget> {
        self.hovered.as_ref()
    }

    /// Clickable regions of the last rendered frame.
    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
