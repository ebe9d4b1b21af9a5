use leptos::{either::Either, ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use super::{
    contact::ContactSection, dom::DocumentAnchors, footer::Footer, header::Header, hero::Hero,
    resume::ResumeSection,
};
use crate::{
    content::{self, About, Experience, Portfolio, Project, SkillCategory},
    navigator,
    sections::{SectionId, SectionTracker},
    theme::Theme,
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    match content::portfolio() {
        Ok(portfolio) => Either::Left(view! { <Page portfolio /> }),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center">"This page is temporarily unavailable."</p>
            })
        }
    }
}

/// Owns the page-wide UI state and hands children read-only signals plus
/// callbacks to change it.
#[component]
fn Page(portfolio: &'static Portfolio) -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(SectionId::default());
    let tracker = StoredValue::new(SectionTracker::default());

    let rescan = move || {
        let changed = tracker
            .try_update_value(|t| t.update(&DocumentAnchors))
            .flatten();
        if let Some(id) = changed {
            log::debug!("active section: {id}");
            set_active.set(id);
        }
    };
    let _ = use_event_listener(use_window(), ev::scroll, move |_| rescan());
    let _ = use_event_listener(use_window(), ev::resize, move |_| rescan());

    let on_navigate = Callback::new(move |id: SectionId| {
        if navigator::navigate(&DocumentAnchors, id, || set_menu_open.set(false)) {
            log::debug!("scrolling to {id}");
        }
    });
    let on_toggle_theme = Callback::new(move |_: ()| {
        set_theme.update(|t| *t = t.toggled());
        log::debug!("theme: {}", theme.get_untracked());
    });
    let on_toggle_menu = Callback::new(move |_: ()| set_menu_open.update(|open| *open = !*open));

    view! {
        <Title text=portfolio.owner.headline.as_str() />
        <div class=move || {
            format!("min-h-screen transition-colors duration-300 {}", theme.get().page())
        }>
            <Header
                brand=portfolio.owner.name.as_str()
                theme
                active
                menu_open
                on_navigate
                on_toggle_theme
                on_toggle_menu
            />
            <main>
                <Hero
                    owner=&portfolio.owner
                    contact=&portfolio.contact
                    roles=portfolio.roles.clone()
                    theme
                    on_navigate
                />
                <AboutSection about=&portfolio.about theme />
                <SkillsSection skills=&portfolio.skills theme />
                <ExperienceSection experience=&portfolio.experience theme />
                <ProjectsSection projects=&portfolio.projects theme />
                <ResumeSection resume=&portfolio.resume theme />
                <ContactSection contact=&portfolio.contact theme />
            </main>
            <Footer
                owner=&portfolio.owner
                contact=&portfolio.contact
                theme
                on_navigate
            />
        </div>
    }
}

#[component]
fn AboutSection(about: &'static About, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section
            id=SectionId::About.anchor()
            class="min-h-screen flex items-center px-4 py-20 relative z-10"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-8 text-center">"About Me"</h2>
                <div class=move || {
                    format!("{} rounded-2xl p-8 md:p-12 space-y-6 shadow-xl", theme.get().surface())
                }>
                    {about
                        .paragraphs
                        .iter()
                        .map(move |p| view! { <p class="text-lg leading-relaxed">{p.as_str()}</p> })
                        .collect_view()}
                    <div class="grid md:grid-cols-3 gap-6 pt-6">
                        {about
                            .highlights
                            .iter()
                            .map(move |h| {
                                view! {
                                    <div class=move || {
                                        format!("{} rounded-xl p-6 text-center", theme.get().inset())
                                    }>
                                        <div class=format!(
                                            "text-3xl font-bold mb-2 {}",
                                            h.accent,
                                        )>{h.title.as_str()}</div>
                                        <p class="text-sm text-gray-400">{h.caption.as_str()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection(
    skills: &'static [SkillCategory],
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="min-h-screen flex items-center px-4 py-20">
            <div class="max-w-7xl mx-auto w-full">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-center">"Skills & Expertise"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {skills
                        .iter()
                        .map(move |category| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "{} rounded-xl p-6 hover:shadow-xl transition-all duration-300 transform hover:scale-105",
                                        theme.get().surface(),
                                    )
                                }>
                                    <h3 class="text-xl font-bold mb-4 text-blue-500">
                                        {category.title.as_str()}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(move |skill| {
                                                view! {
                                                    <span class=move || {
                                                        format!("px-3 py-1 {} rounded-full text-sm", theme.get().inset())
                                                    }>{skill.as_str()}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection(
    experience: &'static Experience,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <section
            id=SectionId::Experience.anchor()
            class="min-h-screen flex items-center px-4 py-20"
        >
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-8">"Experience"</h2>
                <div class=move || format!("{} rounded-2xl p-12", theme.get().surface())>
                    <div class="mb-6">
                        <div class="w-20 h-20 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full mx-auto mb-4 flex items-center justify-center">
                            <span class="text-3xl">"🚀"</span>
                        </div>
                        <h3 class="text-2xl font-bold mb-4">{experience.title.as_str()}</h3>
                        <p class="text-lg text-gray-400 mb-6">{experience.summary.as_str()}</p>
                        <p class="text-gray-400">{experience.details.as_str()}</p>
                    </div>
                    <div class="mt-8 pt-8 border-t border-gray-700">
                        <p class="text-sm text-gray-500">{experience.placeholder.as_str()}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(
    projects: &'static [Project],
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.anchor() class="min-h-screen flex items-center px-4 py-20">
            <div class="max-w-7xl mx-auto w-full">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-center">"Projects"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {projects
                        .iter()
                        .map(move |project| view! { <ProjectCard project theme /> })
                        .collect_view()}
                </div>
                <p class="text-center text-gray-500 mt-8">"More projects coming soon..."</p>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "{} rounded-xl p-8 hover:shadow-2xl transition-all duration-300 transform hover:scale-105",
                theme.get().surface(),
            )
        }>
            <h3 class="text-2xl font-bold mb-4">{project.title.as_str()}</h3>
            <p class=move || format!("mb-6 {}", theme.get().body_text())>{project.overview.as_str()}</p>
            <div class="mb-6">
                <h4 class="text-sm font-semibold mb-2 text-gray-400">"Tools Used:"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tools
                        .iter()
                        .map(move |tool| {
                            view! {
                                <span class="px-3 py-1 bg-gradient-to-r from-blue-500/20 to-purple-600/20 rounded-full text-sm border border-blue-500/30">
                                    {tool.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex space-x-4">
                <a
                    href=project.code_url.as_str()
                    class=move || {
                        format!(
                            "flex items-center space-x-2 px-4 py-2 {} rounded-lg transition-colors",
                            theme.get().code_button(),
                        )
                    }
                >
                    <i class="devicon-github-plain"></i>
                    <span>"Code"</span>
                </a>
                <a
                    href=project.demo_url.as_str()
                    class="flex items-center space-x-2 px-4 py-2 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg hover:shadow-lg transition-all"
                >
                    <span>"↗"</span>
                    <span>"Demo"</span>
                </a>
            </div>
        </div>
    }
}
