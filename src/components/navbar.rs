//! Navbar Component
//!
//! Fixed top bar with brand logo, desktop links and a collapsible mobile menu.
//! Hides once the page is scrolled past the configured threshold.

use leptos::prelude::*;
use leptos_scroll::use_window_scroll;

use crate::config::use_site_config;
use crate::content::{COMPANY_NAME, HOME_ITEM, NAV_ITEMS};
use crate::context::use_nav_handler;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_site_store();
    let threshold = use_site_config().navbar_hide_threshold_px;
    let go = use_nav_handler();

    use_window_scroll(move |metrics| {
        // Subscribers only hear about it when the navbar flips
        store.nav().maybe_update(|nav| nav.on_scroll(metrics.scroll_y, threshold));
    });

    let nav_class = move || {
        store.nav().with(|nav| {
            let mut class = String::from("navbar fixed top-0 w-full z-40");
            if !nav.navbar_visible {
                class.push_str(" navbar-hidden");
            }
            if nav.is_scrolled(threshold) {
                class.push_str(" glass-effect shadow-lg");
            }
            class
        })
    };
    let menu_open = move || store.nav().with(|nav| nav.mobile_menu_open);

    let go_home = go.clone();
    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let go = go.clone();
            view! {
                <button class="nav-link" on:click=move |_| go(item)>
                    {item.label}
                    <span class="nav-link-underline"></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=nav_class>
            <div class="container mx-auto px-3 sm:px-4 md:px-6 py-2 sm:py-3 md:py-4">
                <div class="flex items-center justify-between h-12 sm:h-14 md:h-16">
                    <div class="brand cursor-pointer h-full flex items-center" on:click=move |_| go_home(&HOME_ITEM)>
                        <span class="brand-name">{COMPANY_NAME}</span>
                    </div>

                    <div class="hidden md:flex space-x-6 lg:space-x-8">
                        {desktop_links}
                    </div>

                    <button
                        class="mobile-menu-btn md:hidden"
                        aria-label="Toggle menu"
                        on:click=move |_| store.nav().update(|nav| nav.toggle_mobile_menu())
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=menu_open>
                    <div class="mobile-menu md:hidden">
                        {NAV_ITEMS.iter().map(|item| {
                            let go = go.clone();
                            view! {
                                <button class="mobile-nav-link" on:click=move |_| go(item)>
                                    {item.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
