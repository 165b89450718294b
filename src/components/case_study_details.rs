//! Case Study Details Modal
//!
//! Portfolio engagement overlay with client facts, gallery and outcomes.

use leptos::prelude::*;

use crate::components::{CloseButton, ImageZoom, ModalFrame};
use crate::content::portfolio_service;
use crate::models::CaseStudy;
use crate::state::modal::DetailModal;

/// Label / value row in the client facts grid
#[component]
fn Fact(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="fact">
            <div class="text-xs uppercase tracking-wider text-gray-500">{label}</div>
            <div class="text-gray-800 font-medium">{value}</div>
        </div>
    }
}

#[component]
pub fn CaseStudyModal(
    details: ReadSignal<DetailModal<&'static CaseStudy>>,
    set_details: WriteSignal<DetailModal<&'static CaseStudy>>,
) -> impl IntoView {
    let selected = Memo::new(move |_| details.read().selected().copied());
    let zoomed = Memo::new(move |_| details.read().zoomed().cloned());
    let close = move |_: ()| set_details.update(DetailModal::close);

    view! {
        {move || selected.get().map(|study| {
            let service = portfolio_service(study.service_id).map(|s| s.title).unwrap_or_default();
            view! {
                <ModalFrame
                    on_close=close
                    layer_class="bg-black/50 backdrop-blur-sm z-50"
                    panel_class="bg-white rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto"
                >
                    <div class="sticky top-0 bg-white border-b border-gray-200 p-6 flex justify-between items-center">
                        <div>
                            <p class="text-sm text-blue-600 font-medium">{service}</p>
                            <h2 class="text-2xl font-bold text-gray-800">{study.name}</h2>
                        </div>
                        <CloseButton on_close=close class="border border-gray-300 rounded-full p-2 hover:bg-gray-100" />
                    </div>

                    <div class="p-6">
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                            <Fact label="Client" value=study.client_name />
                            <Fact label="Industry" value=study.client_industry />
                            <Fact label="Location" value=study.client_location />
                            <Fact label="Duration" value=study.duration />
                            <Fact label="Completed" value=study.completed_date />
                            {study.database.map(|db| view! { <Fact label="Database" value=db /> })}
                            {study.is_mobile_first.then(|| view! { <Fact label="Approach" value="Mobile first" /> })}
                        </div>

                        <div class="mb-8">
                            <h3 class="text-lg font-semibold mb-4">"Gallery"</h3>
                            <div class="grid md:grid-cols-2 gap-4">
                                {study.gallery_images.iter().enumerate().map(|(index, img)| {
                                    let alt = format!("{} screenshot {}", study.name, index + 1);
                                    let zoom_alt = alt.clone();
                                    view! {
                                        <div
                                            class="rounded-lg overflow-hidden shadow-md cursor-pointer hover:shadow-xl"
                                            on:click=move |_| {
                                                let alt = zoom_alt.clone();
                                                set_details.update(|d| d.zoom(*img, alt));
                                            }
                                        >
                                            <img src=*img alt=alt class="w-full h-48 object-cover object-top" />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="mb-8">
                            <h3 class="text-lg font-semibold mb-4">"Overview"</h3>
                            <p class="text-gray-600 leading-relaxed">{study.full_description}</p>
                        </div>

                        <div class="mb-8">
                            <h3 class="text-lg font-semibold mb-4">"Technologies"</h3>
                            <div class="flex flex-wrap gap-2">
                                {study.technologies.iter().map(|tech| view! {
                                    <span class="tag-pill px-4 py-2">{*tech}</span>
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="grid md:grid-cols-2 gap-8 mb-8">
                            <div>
                                <h3 class="text-lg font-semibold mb-4">"Key Features"</h3>
                                <ul class="space-y-2">
                                    {study.features.iter().map(|feature| view! {
                                        <li class="flex items-start">
                                            <span class="feature-dot"></span>
                                            <span class="text-gray-600">{*feature}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold mb-4">"Outcomes"</h3>
                                <ul class="space-y-2">
                                    {study.outcomes.iter().map(|outcome| view! {
                                        <li class="outcome text-gray-800 font-medium">{*outcome}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        </div>

                        <a href=study.website_url target="_blank" rel="noopener noreferrer" class="btn-primary">
                            "Visit Website ↗"
                        </a>
                    </div>
                </ModalFrame>
            }
        })}

        <ImageZoom zoomed=zoomed on_close=move |_| set_details.update(DetailModal::close_zoom) />
    }
}
