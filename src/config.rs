//! Site Configuration
//!
//! Tuning constants for scroll behaviour and animations, provided via context.

use leptos::prelude::*;

/// Site-wide tuning values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Scroll offset (px) past which the navbar hides
    pub navbar_hide_threshold_px: f64,
    /// Delay before scrolling to a section handed over by a route change
    pub section_scroll_delay_ms: u32,
    /// Interval between counter increments
    pub counter_tick_ms: u32,
    /// Number of increments a counter takes to reach its target
    pub counter_steps: u32,
    /// Scroll progress (percent) past which the scroll-to-top button shows
    pub scroll_top_threshold_pct: f64,
    /// Console log level
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_hide_threshold_px: 50.0,
            section_scroll_delay_ms: 50,
            counter_tick_ms: 60,
            counter_steps: 40,
            scroll_top_threshold_pct: 20.0,
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}

/// Get the site config from context, falling back to defaults
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.navbar_hide_threshold_px, 50.0);
        assert_eq!(config.section_scroll_delay_ms, 50);
        assert_eq!(config.counter_tick_ms, 60);
        assert_eq!(config.counter_steps, 40);
        assert_eq!(config.scroll_top_threshold_pct, 20.0);
    }
}
