//! About Section

use leptos::prelude::*;

use crate::components::StatCounter;
use crate::content::{CORE_VALUES, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about-section py-20 relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-16 fade-in-up">
                    <h2 class="section-title">"About Airavata"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "We are a technology partner for growing businesses, turning ideas into dependable \
                         websites, apps and software that deliver measurable results."
                    </p>
                </div>

                <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 mb-20">
                    {STATS.iter().map(|stat| view! { <StatCounter stat=*stat /> }).collect_view()}
                </div>

                <h3 class="text-3xl font-light text-center text-gray-800 mb-10">"Our Core Values"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {CORE_VALUES.iter().map(|value| view! {
                        <div class="core-value-card rounded-2xl overflow-hidden relative">
                            <div class="core-value-backdrop absolute inset-0"></div>
                            <div class="core-value-content relative p-6 flex flex-col h-full">
                                <h4 class="text-xl font-semibold text-white mb-4">{value.title}</h4>
                                <p class="text-white/90 flex-grow">{value.description}</p>
                                <div class=format!("mt-4 h-0.5 w-12 bg-gradient-to-r {}", value.color)></div>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
