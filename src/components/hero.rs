//! Hero Section
//!
//! Landing banner; the brand logo scrolls back here.

use leptos::prelude::*;

use crate::content::{HOME_ITEM, PORTFOLIO_ITEM, SERVICES_ITEM};
use crate::context::use_nav_handler;

#[component]
pub fn Hero() -> impl IntoView {
    let go = use_nav_handler();
    let go_portfolio = go.clone();

    view! {
        <section id=HOME_ITEM.id class="hero min-h-screen flex items-center justify-center relative pt-16">
            <div class="text-center px-4 max-w-4xl mx-auto">
                <h1 class="hero-title fade-in-up">"Technology That Moves Your Business Forward"</h1>
                <p class="text-xl sm:text-2xl text-gray-600 max-w-2xl mx-auto mb-10 fade-in-up delay-200">
                    "Websites, mobile apps, custom software and AI automation, designed and delivered by one team."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 fade-in-up delay-400">
                    <button class="btn-primary" on:click=move |_| go(&SERVICES_ITEM)>
                        "Explore Services"
                    </button>
                    <button class="btn-outline" on:click=move |_| go_portfolio(&PORTFOLIO_ITEM)>
                        "View Portfolio"
                    </button>
                </div>
            </div>
        </section>
    }
}
