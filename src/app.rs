//! Site App
//!
//! Root component: context, meta tags and routes.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::SeoMeta;
use crate::config::SiteConfig;
use crate::context::provide_site_context;
use crate::pages::{HomePage, NotFound, PortfolioPage};
use crate::state::navigation;
use crate::store::{store_set_route, use_site_store};

/// Keeps the store's route in step with the router location
#[component]
fn RouteTracker() -> impl IntoView {
    let store = use_site_store();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let route = navigation::Route::from_path(&path).unwrap_or_else(|err| {
            log::debug!("[NAV] {}", err);
            navigation::Route::NotFound
        });
        store_set_route(&store, route);
    });
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_site_context(config);

    view! {
        <Router>
            <SeoMeta />
            <RouteTracker />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/portfolio") view=PortfolioPage />
            </Routes>
        </Router>
    }
}
