//! Leptos Scroll Utilities
//!
//! Small DOM helpers for section-based landing pages:
//! smooth scrolling to anchors, scroll tracking and one-shot viewport triggers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smoothly scroll the element with the given id into view.
///
/// Missing elements are ignored: the set of ids is fixed by the page itself.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Run `f` once after `delay_ms` milliseconds
pub fn after_delay<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, f).forget();
}

/// Current vertical scroll offset in pixels
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Snapshot of the window's scroll geometry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Read the current metrics from the window, if there is one
    pub fn current() -> Option<Self> {
        let win = web_sys::window()?;
        let root = win.document()?.document_element()?;
        let viewport_height = win.inner_height().ok()?.as_f64()?;
        Some(Self {
            scroll_y: win.scroll_y().ok()?,
            scroll_height: f64::from(root.scroll_height()),
            viewport_height,
        })
    }

    /// How far down the page the user has scrolled, 0..=100
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

/// Call `on_scroll` with the window's scroll metrics on every scroll event.
///
/// The listener is removed when the calling owner is cleaned up.
pub fn use_window_scroll<F>(on_scroll: F)
where
    F: Fn(ScrollMetrics) + 'static,
{
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(metrics) = ScrollMetrics::current() {
            on_scroll(metrics);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Something that stops delivering callbacks when told to
trait Disconnect {
    fn disconnect(&self);
}

impl Disconnect for IntersectionObserver {
    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

/// Disconnect `source` and drop `keep_alive` when the current owner is cleaned up
fn disconnect_on_cleanup<S, K>(source: S, keep_alive: K)
where
    S: Disconnect + 'static,
    K: 'static,
{
    let held = SendWrapper::new((source, keep_alive));
    on_cleanup(move || {
        let (source, keep_alive) = held.take();
        source.disconnect();
        drop(keep_alive);
    });
}

/// Invoke `on_enter` the first time `element` intersects the viewport.
///
/// The observer disconnects itself after firing, so re-entering the
/// viewport never calls back again. It is also disconnected, and its
/// callback released, when the calling owner is cleaned up.
pub fn observe_once<F>(element: &web_sys::Element, on_enter: F)
where
    F: FnOnce() + 'static,
{
    let mut on_enter = Some(on_enter);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if !entered {
                return;
            }
            observer.disconnect();
            if let Some(f) = on_enter.take() {
                f();
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            disconnect_on_cleanup(observer, callback);
        }
        Err(err) => log::warn!("IntersectionObserver unavailable: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Watcher(Rc<Cell<u32>>);

    impl Disconnect for Watcher {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_disconnects_when_owner_cleaned_up() {
        let owner = Owner::new();
        let disconnects = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));

        owner.with(|| {
            disconnect_on_cleanup(Watcher(disconnects.clone()), DropFlag(dropped.clone()))
        });
        assert_eq!(disconnects.get(), 0);
        assert!(!dropped.get());

        owner.cleanup();
        assert_eq!(disconnects.get(), 1);
        assert!(dropped.get());
    }

    fn metrics(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_y, scroll_height, viewport_height }
    }

    #[test]
    fn test_progress_top_and_bottom() {
        assert_eq!(metrics(0.0, 3000.0, 1000.0).progress_percent(), 0.0);
        assert_eq!(metrics(2000.0, 3000.0, 1000.0).progress_percent(), 100.0);
        assert_eq!(metrics(500.0, 3000.0, 1000.0).progress_percent(), 25.0);
    }

    #[test]
    fn test_progress_short_page() {
        // Page shorter than the viewport cannot scroll
        assert_eq!(metrics(0.0, 800.0, 1000.0).progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_clamped_on_overscroll() {
        // Elastic overscroll can report offsets past the end
        assert_eq!(metrics(2100.0, 3000.0, 1000.0).progress_percent(), 100.0);
        assert_eq!(metrics(-40.0, 3000.0, 1000.0).progress_percent(), 0.0);
    }
}
