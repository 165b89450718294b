//! Projects Section
//!
//! Featured products gallery with category filter and detail modal.

use leptos::prelude::*;

use crate::components::ProjectDetailsModal;
use crate::content::{ALL_PRODUCTS_LABEL, PROJECTS};
use crate::models::{Category, Project};
use crate::state::filter::Selection;
use crate::state::modal::DetailModal;
use crate::store::{store_set_product_filter, use_site_store, SiteStateStoreFields};

/// Product card with thumbnail, tags and "View Details"
#[component]
fn ProjectCard(project: &'static Project, #[prop(into)] on_view_details: Callback<()>) -> impl IntoView {
    view! {
        <div class="project-card bg-white rounded-2xl shadow-xl overflow-hidden">
            <div class="relative group">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-56 object-cover object-top cursor-pointer"
                    on:click=move |_| on_view_details.run(())
                />
                {project.video_url.map(|_| view! {
                    <div class="play-overlay absolute inset-0 flex items-center justify-center">"▶"</div>
                })}
            </div>

            <div class="p-6 h-64 flex flex-col">
                <h3 class="text-xl font-bold text-gray-800 mb-3">{project.title}</h3>
                <p class="text-gray-600 mb-4 line-clamp-2 flex-grow">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project.tags.iter().map(|tag| view! {
                        <span class="tag-pill px-3 py-1 text-sm">{*tag}</span>
                    }).collect_view()}
                </div>
                <button class="btn-primary w-full mt-auto" on:click=move |_| on_view_details.run(())>
                    "View Details ↗"
                </button>
            </div>
        </div>
    }
}

/// One filter pill
#[component]
fn FilterButton(selection: Selection<Category>, label: &'static str) -> impl IntoView {
    let store = use_site_store();
    let is_active = move || store.product_filter().read().is_active(selection);

    view! {
        <button
            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
            on:click=move |_| store_set_product_filter(&store, selection)
        >
            {label}
        </button>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let store = use_site_store();
    let (details, set_details) = signal(DetailModal::<&'static Project>::new());

    let visible = move || store.product_filter().read().visible(PROJECTS);

    view! {
        <section id="projects" class="py-20 bg-gradient-to-br from-gray-50 to-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 fade-in-up">
                    <h2 class="section-title">"Featured Products"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Showcasing our latest innovations and successful client partnerships."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    <FilterButton selection=Selection::All label=ALL_PRODUCTS_LABEL />
                    {Category::ALL.into_iter().map(|category| view! {
                        <FilterButton selection=Selection::Only(category) label=category.label() />
                    }).collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=visible
                        key=|project| project.id
                        children=move |project| {
                            view! {
                                <ProjectCard
                                    project=project
                                    on_view_details=move |_| {
                                        log::debug!("[MODAL] Project details: {}", project.title);
                                        set_details.update(|d| d.open(project));
                                    }
                                />
                            }
                        }
                    />
                </div>

                <Show when=move || visible().is_empty()>
                    <p class="text-center text-gray-500 mt-8">"No products in this category yet."</p>
                </Show>
            </div>

            <ProjectDetailsModal details=details set_details=set_details />
        </section>
    }
}
