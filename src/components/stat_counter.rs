//! Stat Counter Component
//!
//! Headline figure that counts up the first time it scrolls into view.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_scroll::observe_once;

use crate::config::use_site_config;
use crate::models::Stat;
use crate::state::counter::{format_count, Counter, CounterPhase};

/// Drive `counter` to completion: wait, start, then tick until done.
/// Stops early if the component is gone.
async fn animate(counter: WriteSignal<Counter>, delay_ms: u32, tick_ms: u32) {
    TimeoutFuture::new(delay_ms).await;

    match counter.try_update(Counter::start) {
        Some(Ok(())) => {}
        Some(Err(err)) => {
            log::debug!("[COUNTER] {}", err);
            return;
        }
        None => return,
    }

    loop {
        TimeoutFuture::new(tick_ms).await;
        let done = counter.try_update(|c| {
            c.tick();
            c.is_done()
        });
        if done != Some(false) {
            break;
        }
    }
}

#[component]
pub fn StatCounter(stat: Stat) -> impl IntoView {
    let config = use_site_config();
    let (counter, set_counter) = signal(Counter::new(stat.value, config.counter_steps));
    let node_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            observe_once(&el, move || {
                spawn_local(animate(set_counter, stat.delay_ms, config.counter_tick_ms));
            });
        }
    });

    view! {
        <div
            class=move || match counter.read().phase() {
                CounterPhase::Idle => "stat-counter text-center group",
                CounterPhase::Animating => "stat-counter counting text-center group",
                CounterPhase::Done => "stat-counter done text-center group",
            }
            node_ref=node_ref
        >
            <div class="stat-value">
                {move || format!("{}{}{}", stat.prefix, format_count(counter.read().count()), stat.suffix)}
            </div>
            <div class="text-sm font-medium text-gray-600 uppercase tracking-widest mb-2">{stat.label}</div>
            <div class="stat-underline mx-auto w-12 h-0.5 rounded-full"></div>
        </div>
    }
}
