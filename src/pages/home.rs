//! Home Page
//!
//! Landing sections. Consumes a section handed over by a route change.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use leptos_scroll::{after_delay, scroll_to_section};

use crate::components::{About, Footer, Hero, Navbar, Projects, ScrollToTop, Services};
use crate::config::use_site_config;
use crate::state::navigation::{consume_pending, SECTION_PARAM};

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let delay_ms = use_site_config().section_scroll_delay_ms;

    Effect::new(move |_| {
        let Some((pending, replacement)) = consume_pending(query.read().get(SECTION_PARAM)) else {
            return;
        };

        log::debug!("[NAV] Pending scroll to #{}", pending.section());
        navigate(
            replacement,
            NavigateOptions { replace: true, scroll: false, ..Default::default() },
        );
        let section = pending.into_section();
        after_delay(delay_ms, move || scroll_to_section(&section));
    });

    view! {
        <div class="min-h-screen bg-white overflow-x-hidden">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Services />
                <Projects />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}
