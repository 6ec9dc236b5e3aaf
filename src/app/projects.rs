use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Reveal, TerminalHeader};
use crate::data::projects::{project_filters, Project, ProjectCategory, PROJECTS};
use crate::listing::{CategoryFilter, ListQuery};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::<ProjectCategory>::All);
    let (search, set_search) = signal(String::new());

    let visible = Memo::new(move |_| {
        let query = ListQuery::new(filter.get(), search.get());
        query.apply(PROJECTS).into_iter().cloned().collect::<Vec<_>>()
    });

    view! {
        <Title text="Projects" />
        <TerminalHeader
            command="ls ~/projects"
            description="Infrastructure, pipelines and full-stack applications I have shipped"
        />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="flex flex-col md:flex-row gap-4 md:items-center md:justify-between mb-12">
                <div class="flex flex-wrap gap-2">
                    {project_filters()
                        .into_iter()
                        .map(|(f, label, count)| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == f {
                                            "px-4 py-2 rounded-lg font-mono text-sm bg-primary-500 text-bg-surface"
                                        } else {
                                            "px-4 py-2 rounded-lg font-mono text-sm border border-neutral-700 text-neutral-400 hover:border-primary-500 hover:text-primary-500"
                                        }
                                    }
                                    on:click=move |_| set_filter(f)
                                >
                                    {format!("{label} ({count})")}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    type="search"
                    placeholder="grep projects..."
                    aria-label="Search projects"
                    class="w-full md:w-72 px-4 py-2 rounded-lg bg-bg-elevated border border-neutral-700 font-mono text-sm focus:outline-none focus:border-primary-500"
                    prop:value=search
                    on:input=move |ev| set_search(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <p class="text-center font-mono text-neutral-400 py-16">
                            "No projects match the current filter."
                        </p>
                    }
                }
            >
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || visible.get()
                        key=|p| p.title
                        children=|project| view! { <ProjectCard project /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <Reveal class="h-full">
            <article class="h-full flex flex-col bg-bg-elevated border border-neutral-700 rounded-lg overflow-hidden hover:border-primary-500/50 transition-all duration-300 group">
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    />
                    <span class="absolute top-3 left-3 px-2 py-1 rounded text-xs font-mono bg-bg-page/80 text-primary-500">
                        {project.category.label()}
                    </span>
                </div>
                <div class="flex-1 flex flex-col p-6">
                    <h3 class="font-mono text-lg font-bold text-neutral-200 mb-3">{project.title}</h3>
                    <p class="text-sm text-neutral-400 mb-4 flex-1">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .technologies
                            .iter()
                            .map(|t| {
                                view! {
                                    <span class="px-2 py-1 text-xs font-mono rounded bg-neutral-800 text-neutral-300">
                                        {*t}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center gap-4 font-mono text-sm">
                        <a
                            href=project.repository_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-neutral-300 hover:text-primary-500"
                        >
                            <i class="devicon-github-plain mr-1" />
                            "Code"
                        </a>
                        {project
                            .live_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-accent-500 hover:text-primary-500"
                                    >
                                        "Live Demo →"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </article>
        </Reveal>
    }
}
