//! Project Details Modal
//!
//! Full information overlay for a product: demo video, zoomable gallery,
//! description, technologies, features and links.

use leptos::prelude::*;

use crate::components::{CloseButton, ImageZoom, ModalFrame};
use crate::models::Project;
use crate::state::modal::DetailModal;

#[component]
pub fn ProjectDetailsModal(
    details: ReadSignal<DetailModal<&'static Project>>,
    set_details: WriteSignal<DetailModal<&'static Project>>,
) -> impl IntoView {
    let selected = Memo::new(move |_| details.read().selected().copied());
    let zoomed = Memo::new(move |_| details.read().zoomed().cloned());

    let close = move |_: ()| {
        log::debug!("[MODAL] Project details closed");
        set_details.update(DetailModal::close);
    };

    view! {
        {move || selected.get().map(|project| view! {
            <ModalFrame
                on_close=close
                layer_class="bg-black/50 backdrop-blur-sm z-50"
                panel_class="bg-white rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto"
            >
                <div class="sticky top-0 bg-white border-b border-gray-200 p-6 flex justify-between items-center">
                    <h2 class="text-2xl font-bold text-gray-800">{project.title}</h2>
                    <CloseButton on_close=close class="border border-gray-300 rounded-full p-2 hover:bg-gray-100" />
                </div>

                <div class="p-6">
                    {project.video_url.map(|url| view! {
                        <div class="mb-8">
                            <h3 class="text-lg font-semibold mb-4">"Project Demo"</h3>
                            <div class="aspect-video rounded-lg overflow-hidden shadow-lg">
                                <iframe
                                    src=url
                                    title=format!("{} Demo", project.title)
                                    class="w-full h-full"
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen=true
                                ></iframe>
                            </div>
                        </div>
                    })}

                    <div class="mb-8">
                        <h3 class="text-lg font-semibold mb-4">"Project Gallery"</h3>
                        <div class="grid md:grid-cols-2 gap-4">
                            {project.images.iter().enumerate().map(|(index, img)| {
                                let alt = format!("{} screenshot {}", project.title, index + 1);
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
                        <h3 class="text-lg font-semibold mb-4">"About This Project"</h3>
                        <p class="text-gray-600 leading-relaxed">{project.brief_description}</p>
                    </div>

                    <div class="mb-8">
                        <h3 class="text-lg font-semibold mb-4">"Technologies Used"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project.tags.iter().map(|tag| view! {
                                <span class="tag-pill px-4 py-2">{*tag}</span>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="mb-8">
                        <h3 class="text-lg font-semibold mb-4">"Key Features"</h3>
                        <ul class="space-y-2">
                            {project.features.iter().map(|feature| view! {
                                <li class="flex items-start">
                                    <span class="feature-dot"></span>
                                    <span class="text-gray-600">{*feature}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    {(project.live_url.is_some() || project.github_url.is_some()).then(|| view! {
                        <div class="flex gap-4">
                            {project.live_url.map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer" class="btn-primary">
                                    "🌐 Live Demo"
                                </a>
                            })}
                            {project.github_url.map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer" class="btn-outline">
                                    "View Code"
                                </a>
                            })}
                        </div>
                    })}
                </div>
            </ModalFrame>
        })}

        <ImageZoom zoomed=zoomed on_close=move |_| set_details.update(DetailModal::close_zoom) />
    }
}
