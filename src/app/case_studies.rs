use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Reveal, TerminalHeader};
use crate::data::case_studies::{
    default_study, studies_in, study_by_id, CaseStudy, ImpactMetric, StudyTab,
};
use crate::data::posts::PostCategory;
use crate::listing::CategoryFilter;

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    let (category, set_category) = signal(CategoryFilter::<PostCategory>::All);
    let (selected, set_selected) = signal(default_study().map(|s| s.id));
    let (tab, set_tab) = signal(StudyTab::default());

    let visible = Memo::new(move |_| {
        studies_in(category.get())
            .into_iter()
            .map(|s| s.id)
            .collect::<Vec<_>>()
    });

    let select = move |id: u32| {
        set_tab(StudyTab::default());
        set_selected(Some(id));
    };

    let filters = std::iter::once((CategoryFilter::All, "All"))
        .chain(PostCategory::all().into_iter().map(|c| (CategoryFilter::Only(c), c.label())))
        .map(|(f, label)| {
            view! {
                <button
                    class=move || {
                        if category.get() == f {
                            "px-4 py-2 rounded-lg font-mono text-sm bg-primary-500 text-bg-surface"
                        } else {
                            "px-4 py-2 rounded-lg font-mono text-sm border border-neutral-700 text-neutral-400 hover:border-primary-500 hover:text-primary-500"
                        }
                    }
                    on:click=move |_| set_category(f)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <Title text="Case Studies" />
        <TerminalHeader
            command="cat ~/case-studies/*.log"
            description="Problems, the systems built to solve them, and what changed afterwards"
        />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-12">
            <div class="flex flex-wrap gap-2">{filters}</div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || visible.get()
                    key=|id| *id
                    children=move |id| {
                        study_by_id(id)
                            .map(|study| {
                                view! {
                                    <Reveal class="h-full">
                                        <StudyCard
                                            study
                                            active=Signal::derive(move || selected.get() == Some(id))
                                            on_select=select
                                        />
                                    </Reveal>
                                }
                            })
                    }
                />
            </div>
            {move || {
                selected
                    .get()
                    .and_then(study_by_id)
                    .map(|study| view! { <StudyDetail study tab set_tab /> })
            }}
        </div>
    }
}

#[component]
fn StudyCard(
    study: &'static CaseStudy,
    active: Signal<bool>,
    on_select: impl Fn(u32) + Send + Sync + 'static,
) -> impl IntoView {
    let id = study.id;
    view! {
        <article
            class=move || {
                format!(
                    "h-full cursor-pointer bg-bg-elevated border rounded-lg p-6 transition-all duration-300 {}",
                    if active.get() {
                        "border-primary-500 shadow-glow"
                    } else {
                        "border-neutral-700 hover:border-primary-500/50"
                    },
                )
            }
            on:click=move |_| on_select(id)
        >
            <div class="flex items-center justify-between mb-3 text-xs">
                <span class=format!(
                    "px-2 py-1 rounded border {}",
                    study.category.badge_class(),
                )>{study.category.label()}</span>
                {study
                    .featured
                    .then(|| view! { <span class="text-accent-500 font-mono">"★ featured"</span> })}
            </div>
            <h3 class="font-mono text-lg font-bold text-neutral-200">{study.title}</h3>
            <p class="text-sm text-neutral-400 mb-4">{study.subtitle}</p>
            <div class="font-mono text-xs text-neutral-500 mb-4">
                {format!(
                    "{} - {} ({})",
                    study.timeline.start,
                    study.timeline.end,
                    study.timeline.duration,
                )}
            </div>
            <div class="grid grid-cols-2 gap-3">
                {study
                    .metrics
                    .iter()
                    .take(2)
                    .map(|m| {
                        view! {
                            <div class="bg-bg-surface rounded p-3">
                                <div class="font-mono text-lg font-bold text-primary-500">
                                    {m.headline()}
                                </div>
                                <div class="text-xs text-neutral-400">{m.label()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn StudyDetail(
    study: &'static CaseStudy,
    tab: ReadSignal<StudyTab>,
    set_tab: WriteSignal<StudyTab>,
) -> impl IntoView {
    view! {
        <section class="bg-bg-elevated border border-neutral-700 rounded-lg overflow-hidden fade-in">
            <div class="p-6 border-b border-neutral-700">
                <h2 class="font-mono text-2xl font-bold text-primary-500">{study.title}</h2>
                <p class="text-neutral-400">{study.subtitle}</p>
            </div>
            <div class="flex border-b border-neutral-700" role="tablist">
                {StudyTab::all()
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                role="tab"
                                aria-selected=move || (tab.get() == t).to_string()
                                class=move || {
                                    if tab.get() == t {
                                        "px-6 py-3 font-mono text-sm text-primary-500 border-b-2 border-primary-500"
                                    } else {
                                        "px-6 py-3 font-mono text-sm text-neutral-400 hover:text-primary-500"
                                    }
                                }
                                on:click=move |_| set_tab(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="p-6">
                {move || match tab.get() {
                    StudyTab::Overview => {
                        view! {
                            <div class="space-y-6">
                                <div>
                                    <h3 class="font-mono font-bold text-accent-500 mb-2">"Challenge"</h3>
                                    <p class="text-neutral-300">{study.challenge}</p>
                                </div>
                                <div>
                                    <h3 class="font-mono font-bold text-accent-500 mb-2">"Technologies"</h3>
                                    <TagList items=study.technologies />
                                </div>
                                {study
                                    .architecture
                                    .as_ref()
                                    .map(|a| {
                                        view! {
                                            <div>
                                                <h3 class="font-mono font-bold text-accent-500 mb-2">
                                                    "Architecture"
                                                </h3>
                                                <p class="text-neutral-300 mb-2">{a.pattern}</p>
                                                <TagList items=a.components />
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                            .into_any()
                    }
                    StudyTab::Solution => view! { <Bullets items=study.solution /> }.into_any(),
                    StudyTab::Results => {
                        view! {
                            <div class="space-y-8">
                                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {study
                                        .metrics
                                        .iter()
                                        .map(|m| view! { <MetricTile metric=m /> })
                                        .collect_view()}
                                </div>
                                <Bullets items=study.impact />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn MetricTile(metric: &'static ImpactMetric) -> impl IntoView {
    view! {
        <div class="bg-bg-surface border border-neutral-700 rounded-lg p-4">
            <div class="text-xs uppercase tracking-wide text-neutral-400">{metric.label()}</div>
            <div class="font-mono text-2xl font-bold text-primary-500 my-1">{metric.headline()}</div>
            <dl class="text-xs text-neutral-400 space-y-1">
                {metric
                    .details()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="flex justify-between">
                                <dt>{label}</dt>
                                <dd class="text-neutral-200">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}

#[component]
fn Bullets(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="space-y-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex gap-2 text-neutral-300">
                            <span class="text-primary-500">">"</span>
                            {*item}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn TagList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {items
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
    }
}
