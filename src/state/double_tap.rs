// Double-tap zoom suppression state

/// Remembers when the last touch ended so a second quick tap can be told
/// apart from a fresh one.
#[derive(Debug, Clone)]
pub struct DoubleTapGuard {
    window_ms: f64,
    last_touch_end_ms: f64,
}

impl DoubleTapGuard {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_touch_end_ms: 0.0,
        }
    }

    /// Records a touch-end at `now_ms`. Returns true when the browser's
    /// default handling should be blocked.
    pub fn on_touch_end(&mut self, now_ms: f64) -> bool {
        let suppress = now_ms - self.last_touch_end_ms <= self.window_ms;
        self.last_touch_end_ms = now_ms;
        suppress
    }

    #[cfg(test)]
    pub(crate) fn last_touch_end_ms(&self) -> f64 {
        self.last_touch_end_ms
    }
}

impl Default for DoubleTapGuard {
    fn default() -> Self {
        Self::new(300.0)
    }
}
