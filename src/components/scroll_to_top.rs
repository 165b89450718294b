//! Scroll To Top Button
//!
//! Floating button that appears once the page is scrolled far enough down.

use leptos::prelude::*;
use leptos_scroll::{scroll_to_top, use_window_scroll};

use crate::config::use_site_config;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let threshold = use_site_config().scroll_top_threshold_pct;
    let (visible, set_visible) = signal(false);

    use_window_scroll(move |metrics| {
        let show = metrics.progress_percent() > threshold;
        if visible.get_untracked() != show {
            set_visible.set(show);
        }
    });

    view! {
        <button
            class=move || if visible.get() { "scroll-top-btn" } else { "scroll-top-btn hidden-btn" }
            aria-label="Scroll to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
