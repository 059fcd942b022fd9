//! Tunables for the mobile input helpers.
//!
//! The page may carry an inline block like
//! `<script type="application/json" id="auth-ux-config">{"debug": true}</script>`.
//! Missing fields keep their defaults.

use serde::Deserialize;

use crate::error::UxError;

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "auth-ux-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UxConfig {
    /// Two touch-ends at most this far apart count as a double tap.
    pub double_tap_window_ms: f64,
    /// Viewports at or below this width get scroll-into-view on focus.
    pub mobile_breakpoint_px: f64,
    pub scroll_delay_ms: i32,
    /// Clear the pending scroll when the field loses focus before it fires.
    pub cancel_scroll_on_blur: bool,
    pub debug: bool,
}

impl Default for UxConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: 300.0,
            mobile_breakpoint_px: 768.0,
            scroll_delay_ms: 300,
            cancel_scroll_on_blur: false,
            debug: false,
        }
    }
}

impl UxConfig {
    pub fn from_json(raw: &str) -> Result<Self, UxError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let cfg: UxConfig = serde_json::from_str(raw)?;
        Ok(cfg.sanitized())
    }

    /// Reads the inline config block. No block means defaults.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, UxError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.double_tap_window_ms.is_finite() || self.double_tap_window_ms < 0.0 {
            self.double_tap_window_ms = defaults.double_tap_window_ms;
        }
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px < 0.0 {
            self.mobile_breakpoint_px = defaults.mobile_breakpoint_px;
        }
        self.scroll_delay_ms = self.scroll_delay_ms.max(0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_defaults() {
        assert_eq!(UxConfig::from_json("").unwrap(), UxConfig::default());
        assert_eq!(UxConfig::from_json("  {}  ").unwrap(), UxConfig::default());
    }

    #[test]
    fn defaults_match_page_behaviour() {
        let cfg = UxConfig::default();
        assert_eq!(cfg.double_tap_window_ms, 300.0);
        assert_eq!(cfg.mobile_breakpoint_px, 768.0);
        assert_eq!(cfg.scroll_delay_ms, 300);
        assert!(!cfg.cancel_scroll_on_blur);
        assert!(!cfg.debug);
    }

    #[test]
    fn partial_json_overrides_named_fields_only() {
        let cfg = UxConfig::from_json(r#"{"mobile_breakpoint_px": 600, "debug": true}"#).unwrap();
        assert_eq!(cfg.mobile_breakpoint_px, 600.0);
        assert!(cfg.debug);
        assert_eq!(cfg.double_tap_window_ms, 300.0);
        assert_eq!(cfg.scroll_delay_ms, 300);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = UxConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, UxError::Config(_)));
    }

    #[test]
    fn negative_values_fall_back() {
        let cfg = UxConfig::from_json(
            r#"{"double_tap_window_ms": -5, "mobile_breakpoint_px": -1, "scroll_delay_ms": -20}"#,
        )
        .unwrap();
        assert_eq!(cfg.double_tap_window_ms, 300.0);
        assert_eq!(cfg.mobile_breakpoint_px, 768.0);
        assert_eq!(cfg.scroll_delay_ms, 0);
    }
}
