//! Where frame timestamps come from.
//!
//! The app never calls `Instant::now()` itself. It asks a [`TimeSource`],
//! so tests can step animations frame by frame with [`TestTimeSource`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait TimeSource: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Instant;

    /// Never negative, even if `earlier` is ahead of this source.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }

    /// Milliseconds since `earlier`, the unit of every animation timer.
    fn millis_since(&self, earlier: Instant) -> f64 {
        self.elapsed_since(earlier).as_secs_f64() * 1000.0
    }
}

pub type SharedTimeSource = Arc<dyn TimeSource>;

/// The monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// ```
/// use termfolio::services::time_source::{TestTimeSource, TimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let epoch = time.now();
/// time.advance(Duration::from_millis(530));
/// assert_eq!(time.millis_since(epoch), 530.0);
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    offset_micros: AtomicU64,
    origin: Instant,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    pub fn new() -> Self {
        Self {
            offset_micros: AtomicU64::new(0),
            origin: Instant::now(),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn advance(&self, step: Duration) {
        self.offset_micros
            .fetch_add(step.as_micros() as u64, Ordering::SeqCst);
    }

    /// Virtual time since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.offset_micros.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}
