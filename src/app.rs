mod about;
mod blog;
mod case_studies;
mod components;
mod contact;
mod home;
mod projects;
mod skills;
mod timers;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{Timings, BUILD_TIME, SITE_NAME};
use crate::data::profile::{CONTACT, NAV_ITEMS};
use about::AboutPage;
use blog::BlogPage;
use case_studies::CaseStudiesPage;
use contact::ContactPage;
use home::HomePage;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="RSS Feed"
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="bg-bg-page text-neutral-200 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Timings::default());

    view! {
        <Title formatter=|title| format!("{title} | {SITE_NAME}") />
        <Router>
            <Navbar />
            <main class="min-h-screen pt-16">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/case-studies") view=CaseStudiesPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|(path, label)| {
                let class = if mobile {
                    "block px-3 py-2 rounded-md font-mono text-neutral-400 hover:text-primary-500 aria-[current=page]:text-primary-500"
                } else {
                    "px-3 py-2 font-mono text-sm text-neutral-400 hover:text-primary-500 transition-colors aria-[current=page]:text-primary-500"
                };
                let text = if mobile {
                    format!("$ {}", label.to_lowercase())
                } else {
                    label.to_string()
                };
                view! {
                    <A href=*path attr:class=class on:click=move |_| set_open(false)>
                        {text}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-bg-page/90 backdrop-blur border-b border-neutral-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="font-mono text-xl font-bold text-primary-500">
                        <span class="text-accent-500">"~/"</span>
                        {SITE_NAME}
                    </A>
                    <div class="hidden md:flex items-center space-x-1">{links(false)}</div>
                    <button
                        class="md:hidden p-2 text-neutral-400 hover:text-primary-500"
                        aria-label="Toggle menu"
                        on:click=move |_| set_open.update(|o| *o = !*o)
                    >
                        {move || if open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || open.get()>
                <div class="md:hidden px-4 pb-4 space-y-1 bg-bg-elevated border-t border-neutral-800">
                    {links(true)}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let social = [
        ("GitHub", CONTACT.social.github.to_string(), "devicon-github-plain"),
        ("LinkedIn", CONTACT.social.linkedin.to_string(), "devicon-linkedin-plain"),
        ("Twitter", CONTACT.social.twitter.to_string(), "devicon-twitter-original"),
        ("Email", format!("mailto:{}", CONTACT.email), "extra-mail"),
    ];

    view! {
        <footer class="bg-bg-elevated border-t border-neutral-700 mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 flex flex-col items-center space-y-8">
                <div class="flex items-center space-x-6">
                    {social
                        .into_iter()
                        .map(|(name, url, icon)| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=name
                                    class="p-3 rounded-lg bg-bg-surface text-neutral-400 hover:bg-primary-500 hover:text-bg-surface transition-all duration-200"
                                >
                                    <i class=icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="font-mono text-sm text-neutral-400 text-center">
                    <div class="flex items-center justify-center space-x-2">
                        <span class="text-accent-500">"$"</span>
                        <span class="text-primary-500">"cat"</span>
                        <span>"copyright.txt"</span>
                    </div>
                    <div class="mt-2 space-y-1 text-xs">
                        <p>"© " {BUILD_TIME.get(..4).unwrap_or_default()} " DevOps & Cloud Engineer"</p>
                        <p>"Built with Rust, Leptos and Tailwind"</p>
                        <p class="text-primary-500">"Status: Available for opportunities"</p>
                        <p class="text-neutral-500">"Last build: " {BUILD_TIME}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = leptos_router::hooks::use_location();
    view! {
        <Title text="Not Found" />
        <div class="max-w-3xl mx-auto px-4 py-24 font-mono">
            <p>
                <span class="text-accent-500">"$ "</span>
                "cd "
                {move || location.pathname.get()}
            </p>
            <p class="text-red-500 mt-2">"bash: cd: no such file or directory"</p>
            <A href="/" attr:class="inline-block mt-6 text-primary-500 hover:underline">
                "cd ~"
            </A>
        </div>
    }
}
