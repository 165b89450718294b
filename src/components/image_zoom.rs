//! Image Zoom Overlay
//!
//! Enlarged gallery image above a detail dialog.

use leptos::prelude::*;

use crate::components::{CloseButton, ModalFrame};
use crate::state::modal::ZoomedImage;

#[component]
pub fn ImageZoom(
    #[prop(into)] zoomed: Signal<Option<ZoomedImage>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        zoomed.get().map(|image| {
            view! {
                <ModalFrame
                    on_close=on_close
                    layer_class="bg-black/90 backdrop-blur-sm z-[60]"
                    panel_class="relative max-w-[90vw] max-h-[90vh]"
                >
                    <img
                        src=image.src
                        alt=image.alt
                        class="max-w-full max-h-full object-contain rounded-lg shadow-2xl"
                    />
                    <CloseButton
                        on_close=on_close
                        class="absolute top-4 right-4 bg-black/50 hover:bg-black/70 text-white rounded-full p-2"
                    />
                </ModalFrame>
            }
        })
    }
}
