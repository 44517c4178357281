//! Shell-command typing for the foreground tabs.
//!
//! Unlike the [`RevealClock`](crate::RevealClock), which reveals a whole
//! document at a characters-per-second rate, a [`CommandTyper`] types one
//! short command a keystroke at a time and then shows the command's output.
//! Every step has a deadline; deadlines chain off the previous deadline
//! rather than off the frame that noticed it, so the result does not depend
//! on how often the host calls `update`.

use crate::random::RandomSource;
use crate::Millis;

/// Keystroke timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TyperConfig {
    /// Minimum delay before each keystroke
    pub char_delay_ms: Millis,
    /// Uniform random extra delay added to each keystroke
    pub char_jitter_ms: Millis,
    /// Delay between the last keystroke and the output
    pub output_pause_ms: Millis,
}

impl TyperConfig {
    /// Timing of the project and tool listings.
    pub fn listing() -> Self {
        Self {
            char_delay_ms: 25.0,
            char_jitter_ms: 20.0,
            output_pause_ms: 300.0,
        }
    }

    /// Timing of the home transcript.
    pub fn transcript() -> Self {
        Self {
            char_delay_ms: 30.0,
            char_jitter_ms: 20.0,
            output_pause_ms: 300.0,
        }
    }

    fn keystroke_delay(&self, rng: &mut dyn RandomSource) -> Millis {
        self.char_delay_ms + rng.next_f64() * self.char_jitter_ms
    }
}

impl Default for TyperConfig {
    fn default() -> Self {
        Self::listing()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyperPhase {
    /// Start delay not yet elapsed
    Waiting,
    Typing,
    /// Command fully typed, output not yet shown
    Pausing,
    Done,
}

/// Types a single command, then reveals its output
#[derive(Debug, Clone)]
pub struct CommandTyper {
    command: String,
    command_chars: usize,
    config: TyperConfig,
    phase: TyperPhase,
    typed_chars: usize,
    next_at: Option<Millis>,
    done_at: Option<Millis>,
}

impl CommandTyper {
    /// A typer that starts typing at `start_at`.
    pub fn new(command: impl Into<String>, config: TyperConfig, start_at: Millis) -> Self {
        let command = command.into();
        Self {
            command_chars: command.chars().count(),
            command,
            config,
            phase: TyperPhase::Waiting,
            typed_chars: 0,
            next_at: Some(start_at),
            done_at: None,
        }
    }

    /// Processes every step that is due at `now`. Returns `true` if anything
    /// visible changed.
    pub fn update(&mut self, now: Millis, rng: &mut dyn RandomSource) -> bool {
        let mut changed = false;

        while let Some(deadline) = self.next_at {
            if now < deadline {
                break;
            }
            changed = true;

            match self.phase {
                TyperPhase::Waiting if self.command_chars == 0 => {
                    self.phase = TyperPhase::Pausing;
                    self.next_at = Some(deadline + self.config.output_pause_ms);
                }
                TyperPhase::Waiting => {
                    self.phase = TyperPhase::Typing;
                    self.next_at = Some(deadline + self.config.keystroke_delay(rng));
                }
                TyperPhase::Typing => {
                    self.typed_chars += 1;
                    if self.typed_chars >= self.command_chars {
                        self.phase = TyperPhase::Pausing;
                        self.next_at = Some(deadline + self.config.output_pause_ms);
                    } else {
                        self.next_at = Some(deadline + self.config.keystroke_delay(rng));
                    }
                }
                TyperPhase::Pausing => {
                    self.phase = TyperPhase::Done;
                    self.next_at = None;
                    self.done_at = Some(deadline);
                }
                TyperPhase::Done => self.next_at = None,
            }
        }

        changed
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// The part of the command typed so far.
    pub fn typed(&self) -> &str {
        match self.command.char_indices().nth(self.typed_chars) {
            Some((idx, _)) => &self.command[..idx],
            None => &self.command,
        }
    }

    pub fn phase(&self) -> TyperPhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase != TyperPhase::Waiting
    }

    pub fn is_done(&self) -> bool {
        self.phase == TyperPhase::Done
    }

    pub fn output_visible(&self) -> bool {
        self.is_done()
    }

    /// Whether the prompt cursor belongs on this command line (it may still
    /// be in the "off" half of its blink).
    pub fn cursor_visible_phase(&self) -> bool {
        matches!(self.phase, TyperPhase::Typing | TyperPhase::Pausing)
    }

    /// When the output appeared.
    pub fn done_at(&self) -> Option<Millis> {
        self.done_at
    }
}

/// One command and what it printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSection {
    pub command: String,
    pub output: Vec<String>,
}

impl TranscriptSection {
    pub fn new(command: impl Into<String>, output: &[&str]) -> Self {
        Self {
            command: command.into(),
            output: output.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// What a section looks like right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub command: &'a str,
    pub output: &'a [String],
    pub cursor: bool,
}

/// Plays a list of sections one after another
#[derive(Debug, Clone)]
pub struct Transcript {
    sections: Vec<TranscriptSection>,
    config: TyperConfig,
    section_gap_ms: Millis,
    current: usize,
    typer: Option<CommandTyper>,
}

impl Transcript {
    pub const DEFAULT_SECTION_GAP_MS: Millis = 600.0;

    pub fn new(sections: Vec<TranscriptSection>, config: TyperConfig, start_at: Millis) -> Self {
        let typer = sections
            .first()
            .map(|s| CommandTyper::new(s.command.as_str(), config, start_at));
        Self {
            sections,
            config,
            section_gap_ms: Self::DEFAULT_SECTION_GAP_MS,
            current: 0,
            typer,
        }
    }

    pub fn with_section_gap(mut self, gap_ms: Millis) -> Self {
        self.section_gap_ms = gap_ms;
        self
    }

    pub fn update(&mut self, now: Millis, rng: &mut dyn RandomSource) -> bool {
        let mut changed = false;

        while let Some(typer) = self.typer.as_mut() {
            changed |= typer.update(now, rng);

            let Some(done_at) = typer.done_at() else {
                break;
            };
            let next_start = done_at + self.section_gap_ms;
            if now < next_start {
                break;
            }

            self.current += 1;
            changed = true;
            self.typer = self
                .sections
                .get(self.current)
                .map(|s| CommandTyper::new(s.command.as_str(), self.config, next_start));
        }

        changed
    }

    /// Sections that have started, oldest first.
    pub fn visible_sections(&self) -> impl Iterator<Item = SectionView<'_>> {
        self.sections
            .iter()
            .enumerate()
            .filter_map(move |(idx, section)| {
                if idx < self.current {
                    return Some(SectionView {
                        command: &section.command,
                        output: &section.output,
                        cursor: false,
                    });
                }
                if idx > self.current {
                    return None;
                }
                let typer = self.typer.as_ref()?;
                let output: &[String] = if typer.output_visible() {
                    &section.output
                } else {
                    &[]
                };
                Some(SectionView {
                    command: typer.typed(),
                    output,
                    cursor: !typer.output_visible(),
                })
            })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn sections(&self) -> &[TranscriptSection] {
        &self.sections
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.sections.len()
    }
}
