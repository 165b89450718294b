//! Site Context
//!
//! Provides config and store to the component tree, plus the navbar click handler.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_scroll::scroll_to_section;
use reactive_stores::Store;

use crate::config::SiteConfig;
use crate::models::NavItem;
use crate::state::navigation::NavAction;
use crate::store::{use_site_store, SiteState, SiteStateStoreFields};

/// Provide config and a fresh store to all children
pub fn provide_site_context(config: SiteConfig) {
    provide_context(config);
    provide_context(Store::new(SiteState::new()));
}

/// Handler for nav clicks: changes route or scrolls, per `NavState::navigate`.
///
/// Must be called inside the `<Router>`.
pub fn use_nav_handler() -> impl Fn(&NavItem) + Clone + 'static {
    let store = use_site_store();
    let navigate = use_navigate();

    move |item: &NavItem| {
        let action = store.nav().try_update(|nav| nav.navigate(item));
        match action {
            None => {}
            Some(NavAction::ChangeRoute(dest)) => {
                let href = dest.href();
                log::debug!("[NAV] {} -> {}", item.label, href);
                navigate(&href, Default::default());
            }
            Some(NavAction::ScrollTo(section)) => scroll_to_section(section),
        }
    }
}
