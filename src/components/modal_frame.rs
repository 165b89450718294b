//! Modal Frame Component
//!
//! Full-screen backdrop with a centred panel. Clicking the backdrop closes;
//! clicks inside the panel stay inside.

use leptos::prelude::*;

/// Backdrop + panel wrapper shared by every dialog
///
/// # Arguments
/// * `on_close` - Called on backdrop click
/// * `layer_class` - Extra backdrop classes (stacking level, tint)
/// * `panel_class` - Classes for the inner panel
#[component]
pub fn ModalFrame(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] layer_class: String,
    #[prop(optional, into)] panel_class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("modal-backdrop fixed inset-0 flex items-center justify-center p-4 {}", layer_class)
            on:click=move |ev| {
                ev.stop_propagation();
                on_close.run(());
            }
        >
            <div class=panel_class on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Round "×" button used in dialog headers
#[component]
pub fn CloseButton(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button
            class=format!("modal-close-btn {}", class)
            aria-label="Close"
            on:click=move |ev| {
                ev.stop_propagation();
                on_close.run(());
            }
        >
            "✕"
        </button>
    }
}
