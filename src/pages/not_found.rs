//! Not Found Page
//!
//! Fallback for unknown paths.

use leptos::prelude::*;

use crate::components::Navbar;
use crate::state::navigation::HOME_PATH;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Navbar />
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a href=HOME_PATH class="btn-primary">"Go Home"</a>
            </div>
        </div>
    }
}
