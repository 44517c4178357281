//! Core of the termfolio typing animation.
//!
//! Nothing in this crate performs I/O or reads a clock on its own: every
//! time-dependent type is driven by millisecond timestamps supplied by the
//! host, and every random decision goes through a [`RandomSource`].

pub mod blink;
pub mod clock;
pub mod completion;
pub mod document;
pub mod random;
pub mod translate;
pub mod typer;

pub use blink::CursorBlink;
pub use clock::{RevealClock, RevealConfig, RevealState};
pub use completion::CompletionTracker;
pub use document::{Document, Line, Token};
pub use random::{RandomSource, SequenceRandom, SplitMix64};
pub use translate::{translate, CursorPosition, VisibleContent, VisibleLine, VisibleToken};
pub use typer::{CommandTyper, SectionView, Transcript, TranscriptSection, TyperConfig, TyperPhase};

/// Millisecond timestamp as produced by the host's frame scheduler.
///
/// Only differences between timestamps are meaningful.
pub type Millis = f64;
