// Scroll-into-view on focus for narrow viewports

/// Decides whether a focused field should be scrolled into view and tracks
/// the pending timer for it.
#[derive(Debug, Clone)]
pub struct FocusScroll {
    breakpoint_px: f64,
    delay_ms: i32,
    cancel_on_blur: bool,
    pending: Option<i32>,
}

impl FocusScroll {
    pub fn new(breakpoint_px: f64, delay_ms: i32, cancel_on_blur: bool) -> Self {
        Self {
            breakpoint_px,
            delay_ms,
            cancel_on_blur,
            pending: None,
        }
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.breakpoint_px
    }

    /// Delay before scrolling, or `None` on wide viewports.
    pub fn delay_for(&self, viewport_width: f64) -> Option<i32> {
        self.is_mobile(viewport_width).then_some(self.delay_ms)
    }

    /// Remembers a scheduled timer. Only the latest one can be cancelled.
    pub fn track(&mut self, handle: i32) {
        if self.cancel_on_blur {
            self.pending = Some(handle);
        }
    }

    pub fn fired(&mut self, handle: i32) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    /// Timer to clear on blur. Always `None` unless cancellation is on.
    pub fn take_cancellable(&mut self) -> Option<i32> {
        if self.cancel_on_blur {
            self.pending.take()
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> Option<i32> {
        self.pending
    }
}

impl Default for FocusScroll {
    fn default() -> Self {
        Self::new(768.0, 300, false)
    }
}
