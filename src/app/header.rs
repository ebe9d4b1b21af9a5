use leptos::prelude::*;

use crate::{sections::SectionId, theme::Theme};

const NAV_LINK: &str = "transition-colors duration-300 hover:text-blue-500";
const NAV_LINK_ACTIVE: &str = "transition-colors duration-300 hover:text-blue-500 text-blue-500";

#[component]
pub fn Header(
    brand: &'static str,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] active: Signal<SectionId>,
    #[prop(into)] menu_open: Signal<bool>,
    on_navigate: Callback<SectionId>,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class=move || {
            format!("fixed top-0 w-full z-50 transition-all duration-300 {}", theme.get().nav())
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-xl font-bold bg-gradient-to-r from-blue-500 to-purple-600 bg-clip-text text-transparent">
                        {brand}
                    </div>
                    <div class="hidden md:flex space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(move |id| {
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == id { NAV_LINK_ACTIVE } else { NAV_LINK }
                                        }
                                        on:click=move |_| on_navigate.run(id)
                                    >
                                        {id.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center space-x-4">
                        <button
                            class="p-2 rounded-lg hover:bg-gray-800 transition-colors text-xl"
                            aria-label="Toggle color theme"
                            on:click=move |_| on_toggle_theme.run(())
                        >
                            {move || theme.get().toggle_icon()}
                        </button>
                        <button
                            class="md:hidden text-2xl"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| on_toggle_menu.run(())
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class=move || format!("md:hidden {}", theme.get().mobile_menu())>
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {SectionId::ALL
                            .into_iter()
                            .map(move |id| {
                                view! {
                                    <button
                                        class="block w-full text-left px-3 py-2 rounded-md hover:bg-gray-700 transition-colors"
                                        on:click=move |_| on_navigate.run(id)
                                    >
                                        {id.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
