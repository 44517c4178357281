use crate::Millis;

/// Text cursor blink, derived purely from time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorBlink {
    /// Length of each on and off half
    pub period_ms: Millis,
    epoch: Millis,
}

impl CursorBlink {
    pub const DEFAULT_PERIOD_MS: Millis = 530.0;

    /// A blink that is "on" from `epoch` for one period.
    pub fn new(epoch: Millis) -> Self {
        Self {
            period_ms: Self::DEFAULT_PERIOD_MS,
            epoch,
        }
    }

    pub fn with_period(mut self, period_ms: Millis) -> Self {
        self.period_ms = period_ms;
        self
    }

    pub fn is_on(&self, now: Millis) -> bool {
        if self.period_ms <= 0.0 {
            return true;
        }
        let elapsed = (now - self.epoch).max(0.0);
        (elapsed / self.period_ms).floor() as u64 % 2 == 0
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(0.0)
    }
}
