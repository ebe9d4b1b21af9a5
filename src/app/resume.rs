use leptos::{ev::MouseEvent, prelude::*};

use super::dom;
use crate::{content::ResumeAsset, sections::SectionId, theme::Theme};

#[component]
pub fn ResumeSection(
    resume: &'static ResumeAsset,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let download = move |_: MouseEvent| {
        if let Err(e) = dom::trigger_download(&resume.path, &resume.filename) {
            log::warn!("couldn't download {}: {e:?}", resume.path);
        }
    };
    view! {
        <section id=SectionId::Resume.anchor() class="min-h-screen flex items-center px-4 py-20">
            <div class="max-w-4xl mx-auto text-center w-full">
                <h2 class="text-4xl md:text-5xl font-bold mb-12">"Resume"</h2>
                <div class=move || format!("{} rounded-2xl p-12", theme.get().surface())>
                    <div class="mb-8">
                        <div class="w-24 h-24 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full mx-auto mb-6 flex items-center justify-center text-4xl">
                            "⬇"
                        </div>
                        <h3 class="text-2xl font-bold mb-4">"Download My Resume"</h3>
                        <p class="text-gray-400 mb-8">{resume.blurb.as_str()}</p>
                    </div>
                    <button
                        class="px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg font-semibold hover:shadow-lg hover:shadow-blue-500/50 transition-all duration-300 transform hover:scale-105 inline-flex items-center space-x-2"
                        on:click=download
                    >
                        <span>"⬇"</span>
                        <span>"Download Resume"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}
