//! Reveal clock: drives the "characters revealed" counter over time.
//!
//! The clock is split in two layers:
//!
//! - [`RevealState`] holds the counter, the fractional-character accumulator
//!   and the time anchor. [`RevealState::advance`] is the pure per-frame
//!   transition and needs no timer or rendering surface to test.
//! - [`RevealClock`] is the host adapter. It owns one document, the start
//!   delay and loop restart deadlines, and the visibility flag, and applies
//!   `advance` once per frame while a frame is scheduled.
//!
//! Scheduling is pull-based: the host calls [`RevealClock::update`] from its
//! frame loop and the clock decides whether that call counts as a tick.
//! Nothing is registered with the host, so dropping a clock leaves no pending
//! work behind.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::random::{RandomSource, SplitMix64};
use crate::translate::{translate, VisibleContent};
use crate::Millis;

/// Typing behavior of one pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Nominal reveal rate in characters per second
    pub base_speed: f64,
    /// Random speed perturbation per tick, in `[0, 1)`
    pub variability: f64,
    /// Chance that a tick reveals nothing, in `[0, 1)`
    pub pause_probability: f64,
    /// Time before the first tick
    pub start_delay_ms: Millis,
    /// Restart from zero after completing
    #[serde(rename = "loop")]
    pub loop_enabled: bool,
    /// Time between completion and restart
    pub loop_delay_ms: Millis,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            base_speed: 40.0,
            variability: 0.3,
            pause_probability: 0.02,
            start_delay_ms: 0.0,
            loop_enabled: false,
            loop_delay_ms: 2000.0,
        }
    }
}

impl RevealConfig {
    /// Settings used by the decorative dotfile panes.
    pub fn background() -> Self {
        Self {
            base_speed: 45.0,
            variability: 0.35,
            pause_probability: 0.015,
            start_delay_ms: 0.0,
            loop_enabled: true,
            loop_delay_ms: 3000.0,
        }
    }

    pub fn with_start_delay(mut self, delay_ms: Millis) -> Self {
        self.start_delay_ms = delay_ms;
        self
    }
}

/// Counter state of a reveal clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    /// Characters revealed so far, in `[0, total_chars]`
    pub char_index: usize,
    /// Fractional characters carried between ticks
    pub accumulator: f64,
    /// Timestamp of the previous tick; `None` until the first tick after a
    /// (re)start or resume
    pub anchor: Option<Millis>,
    /// Start delay has elapsed
    pub started: bool,
    /// `char_index` has reached the total
    pub complete: bool,
}

impl RevealState {
    pub fn new(total_chars: usize, started: bool) -> Self {
        Self {
            char_index: 0,
            accumulator: 0.0,
            anchor: None,
            started,
            complete: total_chars == 0,
        }
    }

    /// Back to zero with no anchor and an empty accumulator.
    pub fn reset(self, total_chars: usize) -> Self {
        Self::new(total_chars, self.started)
    }

    /// Forgets the time anchor so the next tick re-anchors instead of
    /// catching up on the time spent suspended.
    pub fn suspend(self) -> Self {
        Self {
            anchor: None,
            ..self
        }
    }

    /// One animation tick at `timestamp`.
    ///
    /// Draws from `rng` exactly twice on a tick that accounts characters
    /// (pause decision first, then speed jitter) and never on an anchoring
    /// tick.
    pub fn advance(
        &self,
        timestamp: Millis,
        total_chars: usize,
        config: &RevealConfig,
        rng: &mut dyn RandomSource,
    ) -> Self {
        if !self.started || self.complete {
            return *self;
        }

        let Some(previous) = self.anchor else {
            return Self {
                anchor: Some(timestamp),
                ..*self
            };
        };

        let delta = (timestamp - previous).max(0.0);
        let mut next = Self {
            anchor: Some(timestamp),
            ..*self
        };

        if rng.next_f64() < config.pause_probability {
            return next;
        }

        let multiplier = 1.0 + (rng.next_f64() - 0.5) * 2.0 * config.variability;
        let effective_speed = config.base_speed * multiplier;

        next.accumulator += effective_speed * delta / 1000.0;
        let whole = next.accumulator.floor();
        if whole >= 1.0 {
            next.accumulator -= whole;
            next.char_index = next
                .char_index
                .saturating_add(whole as usize)
                .min(total_chars);
        }
        next.complete = next.char_index >= total_chars;
        next
    }
}

/// A reveal counter bound to one document
#[derive(Debug)]
pub struct RevealClock<R: RandomSource = SplitMix64> {
    document: Arc<Document>,
    total_chars: usize,
    config: RevealConfig,
    state: RevealState,
    rng: R,
    active: bool,
    frame_scheduled: bool,
    start_deadline: Option<Millis>,
    loop_deadline: Option<Millis>,
}

impl<R: RandomSource> RevealClock<R> {
    /// Mounts a clock at `now`. The start delay counts from here.
    pub fn new(document: Arc<Document>, config: RevealConfig, rng: R, now: Millis) -> Self {
        let total_chars = document.total_chars();
        let started = config.start_delay_ms <= 0.0;
        let start_deadline = (!started).then(|| now + config.start_delay_ms);

        let mut clock = Self {
            document,
            total_chars,
            config,
            state: RevealState::new(total_chars, started),
            rng,
            active: true,
            frame_scheduled: false,
            start_deadline,
            loop_deadline: None,
        };
        clock.reschedule();
        clock
    }

    /// Runs due timers and, if a frame is scheduled, one tick.
    ///
    /// Timers (start delay, loop restart) run on wall-clock time whether or
    /// not the clock is active; ticks only run while active. Returns `true`
    /// when the revealed count changed.
    pub fn update(&mut self, now: Millis) -> bool {
        let before = self.state.char_index;

        if self.start_deadline.is_some_and(|deadline| now >= deadline) {
            self.start_deadline = None;
            self.state.started = true;
            self.reschedule();
        }

        if self.loop_deadline.is_some_and(|deadline| now >= deadline) {
            self.restart();
        }

        if self.frame_scheduled {
            self.state = self
                .state
                .advance(now, self.total_chars, &self.config, &mut self.rng);
            self.reschedule();
        }

        if self.config.loop_enabled && self.state.complete && self.loop_deadline.is_none() {
            self.loop_deadline = Some(now + self.config.loop_delay_ms);
        }

        self.state.char_index != before
    }

    /// Suspends or resumes ticking, e.g. when the hosting view is hidden.
    ///
    /// Suspending drops the time anchor: time spent hidden is discarded, not
    /// caught up.
    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        if !active {
            self.state = self.state.suspend();
        }
        self.reschedule();
    }

    /// Binds a different document and starts over from zero.
    pub fn set_document(&mut self, document: Arc<Document>) {
        self.total_chars = document.total_chars();
        self.document = document;
        self.state = self.state.reset(self.total_chars);
        self.loop_deadline = None;
        self.reschedule();
    }

    /// Resets the counter to zero and resumes ticking.
    pub fn restart(&mut self) {
        self.state = self.state.reset(self.total_chars);
        self.loop_deadline = None;
        self.reschedule();
    }

    /// Visible lines and cursor for the current count.
    pub fn visible(&self) -> VisibleContent<'_> {
        translate(&self.document, self.state.char_index)
    }

    pub fn char_index(&self) -> usize {
        self.state.char_index
    }

    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    pub fn is_complete(&self) -> bool {
        self.state.char_index >= self.total_chars
    }

    pub fn is_started(&self) -> bool {
        self.state.started
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the next [`update`](Self::update) will tick.
    pub fn is_frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    fn reschedule(&mut self) {
        self.frame_scheduled = self.active && self.state.started && !self.state.complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Line, Token};
    use crate::random::SequenceRandom;

    /// No pauses, no jitter
    fn steady(speed: f64) -> RevealConfig {
        RevealConfig {
            base_speed: speed,
            variability: 0.0,
            pause_probability: 0.0,
            ..RevealConfig::default()
        }
    }

    fn doc(text: &str) -> Arc<Document> {
        Arc::new(Document::from_plain("t.sh", text, "#c0caf5"))
    }

    fn clock(text: &str, config: RevealConfig) -> RevealClock<SequenceRandom> {
        RevealClock::new(doc(text), config, SequenceRandom::constant(0.5), 0.0)
    }

    #[test]
    fn test_first_tick_only_anchors() {
        let mut c = clock("hello world", steady(1000.0));
        assert!(!c.update(5000.0));
        assert_eq!(c.char_index(), 0);
        assert_eq!(c.state().anchor, Some(5000.0));
    }

    #[test]
    fn test_steady_speed_reveals_exact_count() {
        let mut c = clock("0123456789abcdefghij", steady(40.0));
        c.update(0.0);
        assert!(c.update(100.0));
        assert_eq!(c.char_index(), 4);
    }

    #[test]
    fn test_fractional_characters_carry_over() {
        let mut c = clock("0123456789", steady(50.0));
        c.update(0.0);

        c.update(10.0);
        assert_eq!(c.char_index(), 0);
        assert_eq!(c.state().accumulator, 0.5);

        c.update(20.0);
        assert_eq!(c.char_index(), 1);
        assert_eq!(c.state().accumulator, 0.0);
    }

    #[test]
    fn test_pause_draw_skips_accounting() {
        let config = RevealConfig {
            pause_probability: 0.5,
            ..steady(100.0)
        };
        let mut c = RevealClock::new(doc("abcdefghij"), config, SequenceRandom::constant(0.1), 0.0);
        c.update(0.0);
        assert!(!c.update(1000.0));
        assert_eq!(c.char_index(), 0);
        // Anchor still advances through a pause
        assert_eq!(c.state().anchor, Some(1000.0));
    }

    #[test]
    fn test_variability_scales_speed() {
        let config = RevealConfig {
            base_speed: 40.0,
            variability: 0.5,
            pause_probability: 0.02,
            ..RevealConfig::default()
        };
        // Pause draw 0.9 (no pause), speed draw 0.75 -> x1.25 -> 50 cps
        let rng = SequenceRandom::new(vec![0.9, 0.75]);
        let mut c = RevealClock::new(doc(&"x".repeat(100)), config, rng, 0.0);
        c.update(0.0);
        c.update(100.0);
        assert_eq!(c.char_index(), 5);
    }

    #[test]
    fn test_advance_draws_twice_per_accounting_tick() {
        let mut rng = SequenceRandom::constant(0.5);
        let config = steady(10.0);
        let state = RevealState::new(10, true);

        let anchored = state.advance(0.0, 10, &config, &mut rng);
        assert_eq!(rng.draws(), 0);

        anchored.advance(16.0, 10, &config, &mut rng);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_counter_is_clamped_to_total() {
        let mut c = clock("abc", steady(1000.0));
        assert_eq!(c.total_chars(), 4);
        c.update(0.0);
        c.update(60_000.0);
        assert_eq!(c.char_index(), 4);
        assert!(c.is_complete());
        assert!(!c.is_frame_scheduled());
    }

    #[test]
    fn test_negative_delta_reveals_nothing() {
        let state = RevealState {
            anchor: Some(100.0),
            ..RevealState::new(10, true)
        };
        let next = state.advance(50.0, 10, &steady(1000.0), &mut SequenceRandom::constant(0.5));
        assert_eq!(next.char_index, 0);
        assert_eq!(next.anchor, Some(50.0));
    }

    #[test]
    fn test_start_delay_holds_counter_at_zero() {
        let mut c = clock("abcdef", steady(1000.0).with_start_delay(1000.0));
        assert!(!c.is_started());

        c.update(500.0);
        assert_eq!(c.char_index(), 0);
        assert!(!c.is_frame_scheduled());

        // Delay elapses; this frame anchors
        c.update(1000.0);
        assert!(c.is_started());
        assert_eq!(c.char_index(), 0);

        c.update(1002.0);
        assert_eq!(c.char_index(), 2);
    }

    #[test]
    fn test_loop_restarts_after_delay() {
        let config = RevealConfig {
            loop_enabled: true,
            loop_delay_ms: 3000.0,
            ..steady(1000.0)
        };
        let mut c = clock("ab", config);
        c.update(0.0);
        c.update(100.0);
        assert!(c.is_complete());

        c.update(3099.0);
        assert!(c.is_complete());

        assert!(c.update(3100.0));
        assert_eq!(c.char_index(), 0);
        assert!(!c.is_complete());
        assert!(c.is_frame_scheduled());
        // The restart frame re-anchored instead of revealing a burst
        assert_eq!(c.state().anchor, Some(3100.0));
        assert_eq!(c.state().accumulator, 0.0);

        c.update(3101.0);
        assert_eq!(c.char_index(), 1);
    }

    #[test]
    fn test_no_loop_stays_complete() {
        let mut c = clock("ab", steady(1000.0));
        c.update(0.0);
        c.update(100.0);
        c.update(100_000.0);
        assert!(c.is_complete());
        assert_eq!(c.char_index(), 3);
    }

    #[test]
    fn test_suspend_discards_background_time() {
        let mut c = clock(&"x".repeat(1000), steady(100.0));
        c.update(0.0);
        c.update(100.0);
        assert_eq!(c.char_index(), 10);

        c.set_active(false);
        assert!(!c.is_frame_scheduled());
        c.update(50_000.0);
        assert_eq!(c.char_index(), 10);

        c.set_active(true);
        c.update(60_000.0);
        assert_eq!(c.char_index(), 10, "resume frame must only anchor");

        c.update(60_100.0);
        assert_eq!(c.char_index(), 20);
    }

    #[test]
    fn test_start_delay_elapses_while_inactive() {
        let mut c = clock("abc", steady(1000.0).with_start_delay(500.0));
        c.set_active(false);
        c.update(600.0);
        assert!(c.is_started());
        assert!(!c.is_frame_scheduled());

        c.set_active(true);
        assert!(c.is_frame_scheduled());
    }

    #[test]
    fn test_document_swap_resets_everything() {
        let mut c = clock("0123456789", steady(50.0));
        c.update(0.0);
        c.update(110.0);
        assert_eq!(c.char_index(), 5);
        assert!(c.state().accumulator > 0.0);

        c.set_document(doc("another document"));
        assert_eq!(c.char_index(), 0);
        assert_eq!(c.state().anchor, None);
        assert_eq!(c.state().accumulator, 0.0);
        assert_eq!(c.total_chars(), 17);

        c.update(10_000.0);
        assert_eq!(c.char_index(), 0);
    }

    #[test]
    fn test_empty_document_is_complete_immediately() {
        let mut c = RevealClock::new(
            Arc::new(Document::default()),
            steady(40.0),
            SequenceRandom::constant(0.5),
            0.0,
        );
        assert!(c.is_complete());
        assert!(!c.update(1000.0));
        assert_eq!(c.visible().lines.len(), 1);
    }

    #[test]
    fn test_visible_follows_counter() {
        let document = Arc::new(Document::new(
            "a.zsh",
            "a.zsh",
            "shellscript",
            vec![Line::new(vec![
                Token::new("abc", "c1"),
                Token::new("defgh", "c2"),
            ])],
        ));
        let mut c = RevealClock::new(document, steady(1000.0), SequenceRandom::constant(0.5), 0.0);
        c.update(0.0);
        c.update(5.0);

        let visible = c.visible();
        assert_eq!(visible.lines[0].text(), "abcde");
        assert_eq!(visible.cursor.column, 5);
    }

    #[test]
    fn test_config_json_uses_loop_key() {
        let json = serde_json::to_value(RevealConfig::background()).unwrap();
        assert_eq!(json["loop"], true);
        assert_eq!(json["loop_delay_ms"], 3000.0);

        let parsed: RevealConfig = serde_json::from_str(r#"{ "base_speed": 60 }"#).unwrap();
        assert_eq!(parsed.base_speed, 60.0);
        assert_eq!(parsed.variability, 0.3);
    }
}
