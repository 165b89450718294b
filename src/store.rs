//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Category;
use crate::state::filter::{Filter, Selection};
use crate::state::navigation::{NavState, Route};

/// State shared across pages, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Route, mobile menu and navbar visibility
    pub nav: NavState,
    /// Category filter for the home page products gallery
    pub product_filter: Filter<Category>,
    /// Service filter for the portfolio page (keyed by service id)
    pub portfolio_filter: Filter<&'static str>,
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the router's current route; a page change also closes the mobile menu
pub fn store_set_route(store: &SiteStore, route: Route) {
    if store.nav().read_untracked().route != route {
        log::debug!("[NAV] Route is now {:?}", route);
        store.nav().update(|nav| {
            nav.set_route(route);
            nav.close_mobile_menu();
        });
    }
}

/// Select a products gallery category
pub fn store_set_product_filter(store: &SiteStore, selection: Selection<Category>) {
    log::debug!("[FILTER] Products: {:?}", selection);
    store.product_filter().update(|filter| filter.set(selection));
}

/// Select a portfolio service
pub fn store_set_portfolio_filter(store: &SiteStore, selection: Selection<&'static str>) {
    log::debug!("[FILTER] Portfolio: {:?}", selection);
    store.portfolio_filter().update(|filter| filter.set(selection));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(f: impl FnOnce(SiteStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(SiteState::new())));
    }

    #[test]
    fn test_set_route_closes_mobile_menu() {
        with_store(|store| {
            store.nav().update(|nav| nav.toggle_mobile_menu());
            store_set_route(&store, Route::Portfolio);

            let nav = store.nav().get_untracked();
            assert_eq!(nav.route, Route::Portfolio);
            assert!(!nav.mobile_menu_open);
        });
    }

    #[test]
    fn test_same_route_keeps_menu() {
        with_store(|store| {
            store.nav().update(|nav| nav.toggle_mobile_menu());
            store_set_route(&store, Route::Home);
            assert!(store.nav().get_untracked().mobile_menu_open);
        });
    }

    #[test]
    fn test_filters_are_independent() {
        with_store(|store| {
            store_set_product_filter(&store, Selection::Only(Category::Web));
            assert!(store.product_filter().get_untracked().is_active(Selection::Only(Category::Web)));
            assert!(store.portfolio_filter().get_untracked().is_active(Selection::All));

            store_set_portfolio_filter(&store, Selection::Only("3"));
            assert!(store.product_filter().get_untracked().is_active(Selection::Only(Category::Web)));
        });
    }
}
