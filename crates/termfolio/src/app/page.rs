//! Per-tab animation state.
//!
//! A page is mounted when its tab becomes active and dropped when the tab is
//! left, so every visit replays its animations from the start.

use std::sync::Arc;

use termfolio_core::{
    CommandTyper, CompletionTracker, Document, Millis, RandomSource, RevealClock, RevealConfig,
    SplitMix64, Transcript, TyperConfig,
};

use super::tab::TabId;
use crate::config::BackgroundPaneConfig;
use crate::content::{self, ListingContent, DEV_PANES, LISTING_STAGGER_MS, PROJECT_PANES};

/// One live-typing dotfile pane of the home grid
#[derive(Debug)]
pub struct DotfilePane {
    pub clock: RevealClock,
    pub label: String,
    pub link: String,
}

#[derive(Debug)]
pub struct HomePage {
    transcript: Transcript,
    panes: Vec<DotfilePane>,
}

impl HomePage {
    pub fn new(now: Millis) -> Self {
        Self {
            transcript: Transcript::new(content::home_sections(), TyperConfig::transcript(), now),
            panes: Vec::new(),
        }
    }

    /// Builds one pane per configured slot whose file was loaded.
    ///
    /// Start delays count from `now`. Replaces any panes built earlier.
    pub fn attach_documents(
        &mut self,
        documents: &[Arc<Document>],
        slots: &[BackgroundPaneConfig],
        typing: &RevealConfig,
        rng: &mut SplitMix64,
        now: Millis,
    ) {
        self.panes = slots
            .iter()
            .filter_map(|slot| {
                let Some(document) = documents.get(slot.file_index) else {
                    tracing::debug!(
                        "No dotfile at index {} ({} loaded), pane '{}' left out",
                        slot.file_index,
                        documents.len(),
                        slot.label
                    );
                    return None;
                };
                let config = typing.clone().with_start_delay(slot.start_delay_ms);
                Some(DotfilePane {
                    clock: RevealClock::new(Arc::clone(document), config, rng.fork(), now),
                    label: slot.label.clone(),
                    link: slot.link.clone(),
                })
            })
            .collect();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn panes(&self) -> &[DotfilePane] {
        &self.panes
    }

    fn update(&mut self, now: Millis, rng: &mut dyn RandomSource) -> bool {
        let mut changed = self.transcript.update(now, rng);
        for pane in &mut self.panes {
            changed |= pane.clock.update(now);
        }
        changed
    }

    fn set_active(&mut self, active: bool) {
        for pane in &mut self.panes {
            pane.clock.set_active(active);
        }
    }
}

/// Panes that each type a command and then list items
#[derive(Debug)]
pub struct ListingPage {
    content: &'static [ListingContent],
    typers: Vec<CommandTyper>,
    completion: CompletionTracker,
}

impl ListingPage {
    /// Pane `i` starts typing `i * 400ms` after `now`.
    pub fn new(content: &'static [ListingContent], now: Millis) -> Self {
        let typers = content
            .iter()
            .enumerate()
            .map(|(i, pane)| {
                CommandTyper::new(
                    pane.command,
                    TyperConfig::listing(),
                    now + i as Millis * LISTING_STAGGER_MS,
                )
            })
            .collect();
        Self {
            content,
            typers,
            completion: CompletionTracker::new(content.len()),
        }
    }

    pub fn content(&self) -> &'static [ListingContent] {
        self.content
    }

    pub fn typers(&self) -> &[CommandTyper] {
        &self.typers
    }

    /// All panes have shown their output.
    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }

    fn update(&mut self, now: Millis, rng: &mut dyn RandomSource) -> bool {
        let mut changed = false;
        for (i, typer) in self.typers.iter_mut().enumerate() {
            changed |= typer.update(now, rng);
            if typer.is_done() && self.completion.mark_complete(i) {
                tracing::trace!(
                    "Listing pane {} done ({}/{})",
                    i,
                    self.completion.completed_count(),
                    self.completion.total()
                );
            }
        }
        changed
    }
}

/// `dig` output for the social links
#[derive(Debug)]
pub struct SocialPage {
    typer: CommandTyper,
}

impl SocialPage {
    pub fn new(now: Millis) -> Self {
        Self {
            typer: CommandTyper::new(content::SOCIAL_COMMAND, TyperConfig::listing(), now),
        }
    }

    pub fn typer(&self) -> &CommandTyper {
        &self.typer
    }

    pub fn is_complete(&self) -> bool {
        self.typer.is_done()
    }
}

#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    Listing(ListingPage),
    Social(SocialPage),
}

impl Page {
    /// Fresh state for `tab`. The home grid is filled in separately.
    pub fn mount(tab: TabId, now: Millis) -> Self {
        match tab {
            TabId::Home => Page::Home(HomePage::new(now)),
            TabId::Projects => Page::Listing(ListingPage::new(PROJECT_PANES, now)),
            TabId::Dev => Page::Listing(ListingPage::new(DEV_PANES, now)),
            TabId::Social => Page::Social(SocialPage::new(now)),
        }
    }

    /// Advances every animation on the page. Returns `true` if anything
    /// visible changed.
    pub fn update(&mut self, now: Millis, rng: &mut dyn RandomSource) -> bool {
        match self {
            Page::Home(home) => home.update(now, rng),
            Page::Listing(listing) => listing.update(now, rng),
            Page::Social(social) => social.typer.update(now, rng),
        }
    }

    /// Pauses or resumes the reveal clocks. Command typers keep running.
    pub fn set_active(&mut self, active: bool) {
        if let Page::Home(home) = self {
            home.set_active(active);
        }
    }
}
