use leptos::{ev::SubmitEvent, prelude::*};

use super::dom;
use crate::{content::Contact, sections::SectionId, theme::Theme};

const ACKNOWLEDGEMENT: &str = "Thank you for your message! This is a demo form.";

/// Mail, LinkedIn and GitHub icon links.
#[component]
pub fn SocialLinks(contact: &'static Contact, link_class: &'static str) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            <a href=contact.mailto() class=link_class aria-label="Email">
                "✉"
            </a>
            <a
                href=contact.linkedin.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class=link_class
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a
                href=contact.github.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class=link_class
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain"></i>
            </a>
        </div>
    }
}

#[component]
pub fn ContactSection(
    contact: &'static Contact,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let card = move || {
        format!(
            "flex items-center space-x-4 p-4 {} rounded-lg transition-colors",
            theme.get().link_card()
        )
    };
    view! {
        <section id=SectionId::Contact.anchor() class="min-h-screen flex items-center px-4 py-20">
            <div class="max-w-4xl mx-auto w-full">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-center">"Get In Touch"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
                        <p class=move || {
                            format!("text-lg {}", theme.get().body_text())
                        }>{contact.pitch.as_str()}</p>
                        <div class="space-y-4">
                            <a href=contact.mailto() class=card>
                                <ContactIcon glyph="✉" />
                                <div>
                                    <p class="text-sm text-gray-400">"Email"</p>
                                    <p class="font-semibold">{contact.email.as_str()}</p>
                                </div>
                            </a>
                            <a
                                href=contact.linkedin.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class=card
                            >
                                <ContactIcon icon_class="devicon-linkedin-plain" />
                                <div>
                                    <p class="text-sm text-gray-400">"LinkedIn"</p>
                                    <p class="font-semibold">"Connect with me"</p>
                                </div>
                            </a>
                            <a
                                href=contact.github.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class=card
                            >
                                <ContactIcon icon_class="devicon-github-plain" />
                                <div>
                                    <p class="text-sm text-gray-400">"GitHub"</p>
                                    <p class="font-semibold">"View my projects"</p>
                                </div>
                            </a>
                        </div>
                    </div>
                    <ContactForm theme />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactIcon(
    #[prop(optional)] glyph: &'static str,
    #[prop(optional)] icon_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-3 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg text-2xl">
            {glyph}
            <i class=icon_class></i>
        </div>
    }
}

/// Demo form: submitting only acknowledges, nothing is sent.
#[component]
fn ContactForm(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let field = move || {
        format!(
            "w-full px-4 py-3 rounded-lg {} border focus:border-blue-500 focus:outline-none transition-colors",
            theme.get().input()
        )
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submitted");
        dom::alert(ACKNOWLEDGEMENT);
    };
    view! {
        <div class=move || format!("{} rounded-xl p-8", theme.get().surface())>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="contact_name" class="block text-sm font-semibold mb-2">
                        "Name"
                    </label>
                    <input id="contact_name" type="text" class=field placeholder="Your Name" />
                </div>
                <div>
                    <label for="contact_email" class="block text-sm font-semibold mb-2">
                        "Email"
                    </label>
                    <input
                        id="contact_email"
                        type="email"
                        class=field
                        placeholder="your.email@example.com"
                    />
                </div>
                <div>
                    <label for="contact_message" class="block text-sm font-semibold mb-2">
                        "Message"
                    </label>
                    <textarea
                        id="contact_message"
                        rows="4"
                        class=field
                        placeholder="Your message..."
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg font-semibold hover:shadow-lg hover:shadow-blue-500/50 transition-all duration-300"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
