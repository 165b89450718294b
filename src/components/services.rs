//! Services Section
//!
//! Grid of service cards; clicking a card opens its detail dialog.

use leptos::prelude::*;

use crate::components::{CloseButton, ModalFrame};
use crate::content::{CONTACT_ITEM, SERVICES};
use crate::context::use_nav_handler;
use crate::models::Service;
use crate::state::modal::Modal;

/// Detail dialog for a single service
#[component]
fn ServiceModal(
    modal: ReadSignal<Modal<&'static Service>>,
    set_modal: WriteSignal<Modal<&'static Service>>,
) -> impl IntoView {
    let go = use_nav_handler();
    let selected = Memo::new(move |_| modal.read().selected().copied());
    let close = move |_: ()| set_modal.update(Modal::close);

    move || {
        let go = go.clone();
        selected.get().map(|service| view! {
            <ModalFrame
                on_close=close
                layer_class="bg-black/50 backdrop-blur-sm z-50"
                panel_class="bg-white rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto"
            >
                <div class=format!("service-modal-header bg-gradient-to-r {} p-6 flex justify-between items-center", service.gradient)>
                    <div class="flex items-center gap-3 text-white">
                        <span class="text-3xl">{service.icon}</span>
                        <h2 class="text-2xl font-bold">{service.title}</h2>
                    </div>
                    <CloseButton on_close=close class="bg-white/20 hover:bg-white/30 text-white rounded-full p-2" />
                </div>

                <div class="p-6">
                    <p class="text-gray-600 leading-relaxed mb-6">{service.description}</p>
                    <h3 class="text-lg font-semibold mb-4">"What We Offer"</h3>
                    <ul class="space-y-2 mb-8">
                        {service.features.iter().map(|feature| view! {
                            <li class="flex items-start">
                                <span class="feature-dot"></span>
                                <span class="text-gray-600">{*feature}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            set_modal.update(Modal::close);
                            go(&CONTACT_ITEM);
                        }
                    >
                        "Discuss Your Project"
                    </button>
                </div>
            </ModalFrame>
        })
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let (modal, set_modal) = signal(Modal::<&'static Service>::new());

    view! {
        <section id="services" class="py-4 bg-white relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-12 fade-in-up">
                    <h2 class="section-title">
                        "Innovative Technology Services"
                        <br />
                        <span class="section-title-accent">"for Business Growth"</span>
                    </h2>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES.iter().map(|service| view! {
                        <div
                            class="glass-card service-card cursor-pointer p-8 rounded-2xl"
                            on:click=move |_| {
                                log::debug!("[MODAL] Service details: {}", service.title);
                                set_modal.update(|m| m.open(service));
                            }
                        >
                            <div class=format!("service-icon bg-gradient-to-br {}", service.gradient)>
                                {service.icon}
                            </div>
                            <h3 class="text-xl font-semibold text-gray-800 mt-4">{service.title}</h3>
                            <p class="text-sm text-blue-600 mt-2">"Click to know more"</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <ServiceModal modal=modal set_modal=set_modal />
        </section>
    }
}
