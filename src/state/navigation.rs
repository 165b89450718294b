//! Navigation State
//!
//! Turns navbar clicks into either a route change or an in-page scroll.
//! A section requested from another page travels with the route change as
//! the `section` query parameter and is consumed once by the home page.

use crate::error::SiteError;
use crate::models::NavItem;

pub const HOME_PATH: &str = "/";
pub const PORTFOLIO_PATH: &str = "/portfolio";

/// Query parameter carrying a pending scroll target
pub const SECTION_PARAM: &str = "section";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Portfolio,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Result<Self, SiteError> {
        match path.trim_end_matches('/') {
            "" => Ok(Route::Home),
            PORTFOLIO_PATH => Ok(Route::Portfolio),
            _ => Err(SiteError::UnknownRoute(path.to_string())),
        }
    }

    pub fn is_home(self) -> bool {
        self == Route::Home
    }
}

/// Section to scroll to once the home page has mounted.
///
/// Not `Clone`: the only way to use it is to consume it.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingScroll(String);

impl PendingScroll {
    pub fn new(section: impl Into<String>) -> Self {
        Self(section.into())
    }

    /// Read-and-clear a value taken from the route
    pub fn take_from(slot: &mut Option<String>) -> Option<Self> {
        slot.take().filter(|s| !s.is_empty()).map(Self)
    }

    pub fn section(&self) -> &str {
        &self.0
    }

    pub fn into_section(self) -> String {
        self.0
    }
}

/// Read-and-clear the section handed to the home page through its query.
///
/// Returns the target together with the href that must replace the current
/// history entry, so the next mount of the same entry finds nothing.
pub fn consume_pending(section_param: Option<String>) -> Option<(PendingScroll, &'static str)> {
    let mut slot = section_param;
    PendingScroll::take_from(&mut slot).map(|pending| (pending, HOME_PATH))
}

/// Where a route change should land
#[derive(Debug, PartialEq, Eq)]
pub struct Destination {
    pub path: &'static str,
    pub pending: Option<PendingScroll>,
}

impl Destination {
    pub fn href(&self) -> String {
        match &self.pending {
            Some(p) => format!("{}?{}={}", self.path, SECTION_PARAM, p.section()),
            None => self.path.to_string(),
        }
    }
}

/// What the view must do in response to a nav click
#[derive(Debug, PartialEq, Eq)]
pub enum NavAction {
    ChangeRoute(Destination),
    ScrollTo(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    pub route: Route,
    pub mobile_menu_open: bool,
    pub scroll_y: f64,
    pub navbar_visible: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            mobile_menu_open: false,
            scroll_y: 0.0,
            navbar_visible: true,
        }
    }
}

impl NavState {
    /// Handle a navbar click. Always closes the mobile menu.
    pub fn navigate(&mut self, item: &NavItem) -> NavAction {
        self.mobile_menu_open = false;

        match (item.is_page, item.path) {
            (true, Some(path)) => NavAction::ChangeRoute(Destination { path, pending: None }),
            _ if !self.route.is_home() => NavAction::ChangeRoute(Destination {
                path: HOME_PATH,
                pending: Some(PendingScroll::new(item.id)),
            }),
            _ => NavAction::ScrollTo(item.id),
        }
    }

    /// Record the router's current location
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Hide the navbar once scrolled past `threshold`, show it again above.
    /// Returns whether the navbar's visibility flipped.
    pub fn on_scroll(&mut self, scroll_y: f64, threshold: f64) -> bool {
        let was_visible = self.navbar_visible;
        self.scroll_y = scroll_y;
        self.navbar_visible = scroll_y <= threshold;
        self.navbar_visible != was_visible
    }

    pub fn is_scrolled(&self, threshold: f64) -> bool {
        self.scroll_y > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT: NavItem = NavItem::section("Contact", "contact");
    const PORTFOLIO: NavItem = NavItem::page("Portfolio", "portfolio", PORTFOLIO_PATH);

    fn on(route: Route) -> NavState {
        let mut state = NavState::default();
        state.set_route(route);
        state
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/").unwrap(), Route::Home);
        assert_eq!(Route::from_path("").unwrap(), Route::Home);
        assert_eq!(Route::from_path("/portfolio").unwrap(), Route::Portfolio);
        assert_eq!(Route::from_path("/portfolio/").unwrap(), Route::Portfolio);
        assert!(matches!(Route::from_path("/blog"), Err(SiteError::UnknownRoute(_))));
    }

    #[test]
    fn test_page_item_changes_route_without_pending() {
        for route in [Route::Home, Route::Portfolio, Route::NotFound] {
            let mut state = on(route);
            state.mobile_menu_open = true;
            let action = state.navigate(&PORTFOLIO);
            assert_eq!(
                action,
                NavAction::ChangeRoute(Destination { path: PORTFOLIO_PATH, pending: None })
            );
            assert!(!state.mobile_menu_open);
        }
    }

    #[test]
    fn test_section_item_on_home_scrolls_directly() {
        let mut state = on(Route::Home);
        assert_eq!(state.navigate(&CONTACT), NavAction::ScrollTo("contact"));
    }

    #[test]
    fn test_section_item_elsewhere_hands_over_target() {
        let mut state = on(Route::Portfolio);
        state.mobile_menu_open = true;
        let NavAction::ChangeRoute(dest) = state.navigate(&CONTACT) else {
            panic!("expected a route change");
        };
        assert_eq!(dest.path, HOME_PATH);
        assert_eq!(dest.pending.as_ref().map(PendingScroll::section), Some("contact"));
        assert_eq!(dest.href(), "/?section=contact");
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_page_flag_without_path_is_a_section() {
        let item = NavItem { label: "Odd", id: "odd", is_page: true, path: None };
        let mut state = on(Route::Home);
        assert_eq!(state.navigate(&item), NavAction::ScrollTo("odd"));
    }

    /// Value of `section` in an href's query, as the router would report it
    fn section_param(href: &str) -> Option<String> {
        let (_, query) = href.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("section="))
            .map(str::to_string)
    }

    #[test]
    fn test_pending_scroll_consumed_once() {
        let mut state = on(Route::Portfolio);
        let NavAction::ChangeRoute(dest) = state.navigate(&CONTACT) else {
            panic!("expected a route change");
        };

        // First mount of the home page picks the target up
        let (pending, replacement) = consume_pending(section_param(&dest.href())).unwrap();
        assert_eq!(pending.into_section(), "contact");
        assert_eq!(replacement, HOME_PATH);

        // Mounting again on the replaced entry finds nothing
        assert_eq!(section_param(replacement), None);
        assert_eq!(consume_pending(section_param(replacement)), None);
    }

    #[test]
    fn test_page_route_carries_no_pending() {
        let mut state = on(Route::Home);
        let NavAction::ChangeRoute(dest) = state.navigate(&PORTFOLIO) else {
            panic!("expected a route change");
        };
        assert_eq!(consume_pending(section_param(&dest.href())), None);
    }

    #[test]
    fn test_take_from_clears_slot() {
        let mut slot = Some("contact".to_string());
        assert!(PendingScroll::take_from(&mut slot).is_some());
        assert_eq!(slot, None);
        assert_eq!(PendingScroll::take_from(&mut slot), None);
    }

    #[test]
    fn test_empty_pending_scroll_ignored() {
        let mut slot = Some(String::new());
        assert_eq!(PendingScroll::take_from(&mut slot), None);
        assert_eq!(slot, None);
    }

    #[test]
    fn test_navbar_visibility_threshold() {
        let mut state = NavState::default();
        assert!(!state.on_scroll(50.0, 50.0));
        assert!(state.navbar_visible);
        assert!(!state.is_scrolled(50.0));

        assert!(state.on_scroll(51.0, 50.0));
        assert!(!state.navbar_visible);
        assert!(state.is_scrolled(50.0));

        assert!(state.on_scroll(10.0, 50.0));
        assert!(state.navbar_visible);
    }

    #[test]
    fn test_scroll_within_band_reports_no_change() {
        let mut state = NavState::default();
        assert!(!state.on_scroll(10.0, 50.0));
        assert!(!state.on_scroll(40.0, 50.0));

        assert!(state.on_scroll(300.0, 50.0));
        assert!(!state.on_scroll(800.0, 50.0));
        // Offset is still recorded
        assert_eq!(state.scroll_y, 800.0);
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let mut state = NavState::default();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open);
    }
}
