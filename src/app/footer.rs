use leptos::prelude::*;

use super::contact::SocialLinks;
use crate::{
    content::{build_year, Contact, Owner},
    sections::SectionId,
    theme::Theme,
};

#[component]
pub fn Footer(
    owner: &'static Owner,
    contact: &'static Contact,
    #[prop(into)] theme: Signal<Theme>,
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} All rights reserved. Built with Rust & Leptos"),
        None => "All rights reserved. Built with Rust & Leptos".to_string(),
    };
    view! {
        <footer class=move || format!("{} py-8", theme.get().footer())>
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4 bg-gradient-to-r from-blue-500 to-purple-600 bg-clip-text text-transparent">
                            {owner.headline.as_str()}
                        </h3>
                        <p class="text-gray-400">{owner.tagline.as_str()}</p>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Quick Links"</h4>
                        <div class="space-y-2">
                            {SectionId::QUICK_LINKS
                                .into_iter()
                                .map(move |id| {
                                    view! {
                                        <button
                                            class="block text-gray-400 hover:text-blue-500 transition-colors"
                                            on:click=move |_| on_navigate.run(id)
                                        >
                                            {id.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Connect"</h4>
                        <SocialLinks
                            contact
                            link_class="p-3 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors text-xl"
                        />
                    </div>
                </div>
                <div class="text-center pt-8 border-t border-gray-700">
                    <p class="text-gray-400">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
