//! Footer / Contact Section

use leptos::prelude::*;

use crate::content::{COMPANY_NAME, CONTACT_ITEM, NAV_ITEMS};
use crate::context::use_nav_handler;

#[component]
pub fn Footer() -> impl IntoView {
    let go = use_nav_handler();

    view! {
        <footer id=CONTACT_ITEM.id class="footer bg-gray-900 text-gray-300 py-16">
            <div class="container mx-auto px-6 grid md:grid-cols-3 gap-10">
                <div>
                    <h3 class="brand-name text-white mb-4">{COMPANY_NAME}</h3>
                    <p class="text-gray-400">
                        "Websites, mobile apps, custom software and AI automation for growing businesses."
                    </p>
                </div>

                <div>
                    <h4 class="text-white font-semibold mb-4">"Explore"</h4>
                    <ul class="space-y-2">
                        {NAV_ITEMS.iter().filter(|item| item.id != CONTACT_ITEM.id).map(|item| {
                            let go = go.clone();
                            view! {
                                <li>
                                    <button class="footer-link" on:click=move |_| go(item)>{item.label}</button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="text-white font-semibold mb-4">"Get In Touch"</h4>
                    <ul class="space-y-2 text-gray-400">
                        <li><a href="mailto:hello@airavatatechnologies.com" class="footer-link">"hello@airavatatechnologies.com"</a></li>
                        <li>"Mumbai, India"</li>
                    </ul>
                </div>
            </div>
            <p class="text-center text-gray-500 text-sm mt-12">
                "© 2026 Airavata Technologies. All rights reserved."
            </p>
        </footer>
    }
}
