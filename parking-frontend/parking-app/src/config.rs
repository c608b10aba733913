use serde::Deserialize;

use crate::{notice::NoticeTiming, render::Markup};

/// Runtime knobs for the page glue. Every field has a default, so the host
/// page only passes what it wants to change.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a floating notice stays visible.
    pub notice_timeout_ms: u32,
    /// Delay between a notice losing `visible` and leaving the document.
    pub notice_fade_ms: u32,
    /// Delay before `visible` is applied so the CSS transition runs.
    pub notice_show_delay_ms: u32,
    /// `false` interpolates server values into the results markup unescaped,
    /// the way the legacy page script did.
    pub escape_html: bool,
    /// Drop responses that arrive after a newer search on the same input.
    pub discard_stale_responses: bool,
}

pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 2000;
pub const DEFAULT_NOTICE_FADE_MS: u32 = 300;
pub const DEFAULT_NOTICE_SHOW_DELAY_MS: u32 = 10;

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            notice_fade_ms: DEFAULT_NOTICE_FADE_MS,
            notice_show_delay_ms: DEFAULT_NOTICE_SHOW_DELAY_MS,
            escape_html: true,
            discard_stale_responses: true,
        }
    }
}

impl UiConfig {
    pub fn notice_timing(&self) -> NoticeTiming {
        NoticeTiming {
            show_delay_ms: self.notice_show_delay_ms,
            visible_ms: self.notice_timeout_ms,
            fade_ms: self.notice_fade_ms,
        }
    }

    pub fn markup(&self) -> Markup {
        if self.escape_html {
            Markup::Escaped
        } else {
            Markup::Raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: UiConfig = serde_json::from_str(r#"{"notice_timeout_ms":3500}"#).unwrap();
        assert_eq!(config.notice_timeout_ms, 3500);
        assert_eq!(config.notice_fade_ms, 300);
        assert_eq!(config.notice_show_delay_ms, 10);
        assert!(config.escape_html);
        assert!(config.discard_stale_responses);
    }

    #[test]
    fn legacy_markup_opt_out() {
        let config: UiConfig = serde_json::from_str(r#"{"escape_html":false}"#).unwrap();
        assert_eq!(config.markup(), Markup::Raw);
        assert_eq!(UiConfig::default().markup(), Markup::Escaped);
    }

    #[test]
    fn timing_follows_config() {
        let timing = UiConfig::default().notice_timing();
        assert_eq!(timing.show_delay_ms, 10);
        assert_eq!(timing.visible_ms, 2000);
        assert_eq!(timing.fade_ms, 300);
    }
}
