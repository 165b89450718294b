//! Portfolio Page
//!
//! Delivered case studies, filterable by service line.

use leptos::prelude::*;

use crate::components::{CaseStudyModal, Footer, Navbar, ScrollToTop};
use crate::content::{portfolio_service, CASE_STUDIES, PORTFOLIO_SERVICES};
use crate::models::CaseStudy;
use crate::state::filter::Selection;
use crate::state::modal::DetailModal;
use crate::store::{store_set_portfolio_filter, use_site_store, SiteStateStoreFields};

/// Service tab
#[component]
fn ServiceTab(selection: Selection<&'static str>, label: &'static str) -> impl IntoView {
    let store = use_site_store();
    let is_active = move || store.portfolio_filter().read().is_active(selection);

    view! {
        <button
            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
            on:click=move |_| store_set_portfolio_filter(&store, selection)
        >
            {label}
        </button>
    }
}

#[component]
fn CaseStudyCard(study: &'static CaseStudy, #[prop(into)] on_open: Callback<()>) -> impl IntoView {
    let service = portfolio_service(study.service_id);

    view! {
        <div class="project-card bg-white rounded-2xl shadow-xl overflow-hidden cursor-pointer" on:click=move |_| on_open.run(())>
            <img src=study.image_url alt=study.name class="w-full h-56 object-cover object-top" />
            <div class="p-6 flex flex-col">
                {service.map(|s| view! {
                    <p class="text-sm text-blue-600 font-medium mb-1">{s.icon} " " {s.tagline}</p>
                })}
                <h3 class="text-xl font-bold text-gray-800 mb-2">{study.name}</h3>
                <p class="text-gray-600 mb-4 line-clamp-2">{study.short_description}</p>
                <div class="flex flex-wrap gap-2">
                    {study.technologies.iter().map(|tech| view! {
                        <span class="tag-pill px-3 py-1 text-sm">{*tech}</span>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let store = use_site_store();
    let (details, set_details) = signal(DetailModal::<&'static CaseStudy>::new());

    let visible = move || store.portfolio_filter().read().visible(CASE_STUDIES);

    view! {
        <div class="min-h-screen bg-white overflow-x-hidden">
            <Navbar />
            <main class="pt-28 pb-20">
                <div class="container mx-auto px-6">
                    <div class="text-center mb-12 fade-in-up">
                        <h1 class="section-title">"Our Portfolio"</h1>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Client work across web, mobile, software and marketing."
                        </p>
                    </div>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        <ServiceTab selection=Selection::All label="All Work" />
                        {PORTFOLIO_SERVICES.iter().map(|service| view! {
                            <ServiceTab selection=Selection::Only(service.id) label=service.title />
                        }).collect_view()}
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=visible
                            key=|study| study.id
                            children=move |study| {
                                view! {
                                    <CaseStudyCard
                                        study=study
                                        on_open=move |_| {
                                            log::debug!("[MODAL] Case study: {}", study.id);
                                            set_details.update(|d| d.open(study));
                                        }
                                    />
                                }
                            }
                        />
                    </div>

                    <Show when=move || visible().is_empty()>
                        <p class="text-center text-gray-500 mt-8">"No case studies for this service yet."</p>
                    </Show>
                </div>
            </main>
            <Footer />
            <ScrollToTop />

            <CaseStudyModal details=details set_details=set_details />
        </div>
    }
}
