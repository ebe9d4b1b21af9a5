use std::time::Duration;

use leptos::prelude::*;

use super::{avatar::Avatar, contact::SocialLinks};
use crate::{
    content::{Contact, Owner},
    particles::{FAR_LAYER, NEAR_LAYER},
    sections::SectionId,
    theme::Theme,
    typewriter::{RoleList, Scheduler, Timing, Typewriter, TypewriterDriver},
};

const HERO_SOCIAL_LINK: &str =
    "p-3 rounded-lg bg-gray-800/80 hover:bg-gray-700 transition-colors backdrop-blur-md text-2xl";

#[component]
pub fn Hero(
    owner: &'static Owner,
    contact: &'static Contact,
    roles: RoleList,
    #[prop(into)] theme: Signal<Theme>,
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    view! {
        <section
            id=SectionId::Home.anchor()
            class="relative min-h-screen flex items-center justify-center px-4 pt-16 overflow-hidden"
        >
            <ParticleField theme />
            <div class="relative z-10 max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-6 animate-fade-in">
                    <RoleTypewriter roles />
                    <p class="text-xl md:text-2xl text-gray-400">{owner.tagline.as_str()}</p>
                    <p class=move || {
                        format!("text-lg {}", theme.get().body_text())
                    }>{owner.intro.as_str()}</p>
                    <div class="flex space-x-4">
                        <button
                            class="px-8 py-3 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg font-semibold hover:shadow-lg hover:shadow-blue-500/50 transition-all duration-300 transform hover:scale-105"
                            on:click=move |_| on_navigate.run(SectionId::Contact)
                        >
                            "Get In Touch"
                        </button>
                        <button
                            class=move || {
                                format!(
                                    "px-8 py-3 border-2 {} rounded-lg font-semibold transition-all duration-300 backdrop-blur-sm bg-opacity-20",
                                    theme.get().outline_button(),
                                )
                            }
                            on:click=move |_| on_navigate.run(SectionId::Projects)
                        >
                            "View Work"
                        </button>
                    </div>
                    <div class="pt-4">
                        <SocialLinks contact link_class=HERO_SOCIAL_LINK />
                    </div>
                </div>
                <Avatar src=owner.profile_image.as_str() />
            </div>
            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce z-10 text-3xl text-gray-400">
                "⌄"
            </div>
        </section>
    }
}

/// Browser timers for the typewriter. Each firing runs `on_fire`.
struct BrowserTimers {
    on_fire: Callback<()>,
}

impl Scheduler for BrowserTimers {
    type Handle = TimeoutHandle;

    fn schedule(&mut self, delay: Duration) -> Option<TimeoutHandle> {
        let on_fire = self.on_fire;
        match set_timeout_with_handle(move || on_fire.run(()), delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("couldn't schedule typewriter tick: {e:?}");
                None
            }
        }
    }

    fn clear(&mut self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Heading that types and deletes each role in turn.
///
/// Exactly one timer is outstanding at any time. It is cleared before a new one
/// is scheduled and when the component is torn down.
#[component]
pub fn RoleTypewriter(roles: RoleList, #[prop(optional)] timing: Option<Timing>) -> impl IntoView {
    let typewriter = Typewriter::new(roles, timing.unwrap_or_default());
    let shown = RwSignal::new(typewriter.displayed_text().to_string());
    let driver = StoredValue::new(None::<TypewriterDriver<BrowserTimers>>);

    let on_fire = Callback::new(move |()| {
        let text = driver
            .try_update_value(|d| {
                d.as_mut()
                    .and_then(TypewriterDriver::fire)
                    .map(|tw| tw.displayed_text().to_string())
            })
            .flatten();
        if let Some(text) = text {
            shown.set(text);
        }
    });
    driver.set_value(Some(TypewriterDriver::new(
        typewriter,
        BrowserTimers { on_fire },
    )));

    // effects only run in the browser, so the server never arms a timer
    Effect::new(move |_| {
        driver.update_value(|d| {
            if let Some(d) = d {
                d.start();
            }
        });
    });
    on_cleanup(move || {
        driver.try_update_value(|d| {
            if let Some(d) = d {
                d.stop();
            }
        });
    });

    view! {
        <h1 class="text-5xl md:text-7xl font-bold leading-tight h-20">
            {move || shown.get()}
            <span class="border-r-4 border-blue-500 ml-1 animate-pulse" />
        </h1>
    }
}

#[component]
fn ParticleField(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="absolute inset-0 z-0 pointer-events-none overflow-hidden" aria-hidden="true">
            <div class="absolute -inset-1/4 rotate-45">
                {[FAR_LAYER, NEAR_LAYER]
                    .into_iter()
                    .map(move |layer| {
                        layer
                            .particles()
                            .into_iter()
                            .map(move |p| {
                                view! {
                                    <span
                                        class="particle absolute rounded-full"
                                        style=move || p.style(&layer, theme.get())
                                    ></span>
                                }
                            })
                            .collect_view()
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
