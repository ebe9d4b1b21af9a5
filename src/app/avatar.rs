use leptos::{ev::MouseEvent, html, prelude::*};

use crate::highlight::{Highlight, PointerSample, Tilt};

/// Round profile picture that tilts toward the cursor.
#[component]
pub fn Avatar(src: &'static str) -> impl IntoView {
    let frame_ref = NodeRef::<html::Div>::new();
    let (highlight, set_highlight) = signal(Highlight::Resting);

    let on_move = move |ev: MouseEvent| {
        let Some(el) = frame_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let sample = PointerSample::new(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
        );
        if let Some(tilt) = Tilt::from_sample(sample, rect.width(), rect.height()) {
            set_highlight.set(Highlight::Tilted(tilt));
        }
    };

    view! {
        <div class="flex justify-center">
            <div class="relative">
                <div class="absolute inset-0 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full blur-2xl opacity-30 animate-pulse"></div>
                <div
                    node_ref=frame_ref
                    on:mousemove=on_move
                    on:mouseleave=move |_| set_highlight.set(Highlight::Resting)
                    class="relative w-80 h-80 rounded-full border-4 border-gray-800 shadow-2xl overflow-hidden cursor-pointer"
                    style:will-change="transform, box-shadow"
                    style:transform=move || highlight.get().transform()
                    style:box-shadow=move || highlight.get().box_shadow()
                    style:transition=move || highlight.get().transition()
                >
                    <img src=src alt="Profile" class="w-full h-full object-cover rounded-full" />
                </div>
            </div>
        </div>
    }
}
