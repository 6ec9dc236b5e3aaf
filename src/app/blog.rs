use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Reveal, TerminalHeader};
use crate::blog::{average_read_minutes, render_post, ViewCounter};
use crate::data::posts::{featured_posts, post_by_id, BlogPost, PostCategory, POSTS};
use crate::listing::{format_count, CategoryFilter, ListQuery, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Grid,
    List,
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let (category, set_category) = signal(CategoryFilter::<PostCategory>::All);
    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal(SortKey::default());
    let (layout, set_layout) = signal(Layout::Grid);
    let (selected, set_selected) = signal(None::<u32>);
    let views = RwSignal::new(ViewCounter::new());

    let posts = Memo::new(move |_| {
        ListQuery::new(category.get(), search.get())
            .apply_sorted(POSTS, sort.get())
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>()
    });

    let open = move |id: u32| {
        if let Some(post) = post_by_id(id) {
            let count = views.try_update(|v| v.open(post)).unwrap_or_default();
            log::debug!("blog: opened {} ({count} views)", post.slug);
            set_selected(Some(id));
        }
    };

    let read_minutes = average_read_minutes(POSTS);
    let stats = move || {
        [
            ("Total Articles", POSTS.len().to_string()),
            ("Total Views", format_count(views.with(|v| v.total(POSTS)))),
            ("Engagement Rate", "72%".to_string()),
            ("Avg. Read Time", format!("{read_minutes} min")),
        ]
    };

    let filter_button = move |f: CategoryFilter<PostCategory>, label: &'static str| {
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
    };

    view! {
        <Title text="Blog" />
        <TerminalHeader
            command="tail -f ~/blog/*.md"
            description="Notes from the trenches on DevOps, cloud infrastructure and full-stack work"
        />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-16">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {move || {
                    stats()
                        .into_iter()
                        .map(|(title, value)| {
                            view! {
                                <div class="bg-bg-elevated border border-neutral-700 rounded-lg p-5">
                                    <div class="text-xs uppercase tracking-wide text-neutral-400">
                                        {title}
                                    </div>
                                    <div class="font-mono text-2xl font-bold text-primary-500 mt-1">
                                        {value}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <section>
                <h2 class="font-mono text-2xl font-bold text-primary-500 mb-6">"Featured Articles"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {featured_posts()
                        .map(|post| {
                            view! {
                                <Reveal>
                                    <PostCard post views open featured=true />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="space-y-8">
                <div class="flex flex-col lg:flex-row gap-4 lg:items-center lg:justify-between">
                    <div class="flex flex-wrap gap-2">
                        {filter_button(CategoryFilter::All, "All")}
                        {PostCategory::all()
                            .into_iter()
                            .map(|c| filter_button(CategoryFilter::Only(c), c.label()))
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap items-center gap-2">
                        <input
                            type="search"
                            placeholder="Search articles..."
                            aria-label="Search articles"
                            class="w-full sm:w-64 px-4 py-2 rounded-lg bg-bg-elevated border border-neutral-700 font-mono text-sm focus:outline-none focus:border-primary-500"
                            prop:value=search
                            on:input=move |ev| set_search(event_target_value(&ev))
                        />
                        <select
                            aria-label="Sort articles"
                            class="px-3 py-2 rounded-lg bg-bg-elevated border border-neutral-700 font-mono text-sm"
                            on:change=move |ev| match event_target_value(&ev).parse() {
                                Ok(key) => set_sort(key),
                                Err(e) => log::warn!("{e}"),
                            }
                        >
                            {SortKey::all()
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <option value=key.id() selected=move || sort.get() == key>
                                            {key.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <button
                            class="px-3 py-2 rounded-lg border border-neutral-700 font-mono text-sm hover:border-primary-500"
                            aria-label="Toggle layout"
                            on:click=move |_| {
                                set_layout
                                    .update(|l| {
                                        *l = match l {
                                            Layout::Grid => Layout::List,
                                            Layout::List => Layout::Grid,
                                        };
                                    })
                            }
                        >
                            {move || match layout.get() {
                                Layout::Grid => "☰ list",
                                Layout::List => "▦ grid",
                            }}
                        </button>
                    </div>
                </div>

                <Show
                    when=move || !posts.with(Vec::is_empty)
                    fallback=|| {
                        view! {
                            <div class="text-center py-12">
                                <h3 class="text-xl font-semibold text-neutral-400 mb-2">
                                    "No articles found"
                                </h3>
                                <p class="text-neutral-500">
                                    "Try adjusting your search or filter criteria"
                                </p>
                            </div>
                        }
                    }
                >
                    <div class=move || match layout.get() {
                        Layout::Grid => "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                        Layout::List => "flex flex-col gap-4",
                    }>
                        <For
                            each=move || posts.get()
                            key=|id| *id
                            children=move |id| {
                                post_by_id(id)
                                    .map(|post| view! { <PostCard post views open featured=false /> })
                            }
                        />
                    </div>
                </Show>
            </section>
        </div>

        {move || {
            selected
                .get()
                .and_then(post_by_id)
                .map(|post| {
                    view! { <PostModal post views on_close=move || set_selected(None) /> }
                })
        }}
    }
}

#[component]
fn PostCard(
    post: &'static BlogPost,
    views: RwSignal<ViewCounter>,
    open: impl Fn(u32) + Send + Sync + 'static,
    featured: bool,
) -> impl IntoView {
    let id = post.id;
    let border = if featured { "border-primary-500/30" } else { "border-neutral-700" };
    view! {
        <article
            class=format!(
                "h-full cursor-pointer bg-bg-elevated border {border} rounded-lg p-6 hover:border-primary-500/60 transition-all duration-300",
            )
            on:click=move |_| open(id)
        >
            <div class="flex flex-wrap items-center gap-2 mb-3 text-xs">
                <span class=format!(
                    "px-2 py-1 rounded border {}",
                    post.category.badge_class(),
                )>{post.category.label()}</span>
                <span class=format!(
                    "px-2 py-1 rounded {}",
                    post.difficulty.badge_class(),
                )>{post.difficulty.label()}</span>
            </div>
            <h3 class="font-mono text-lg font-bold text-neutral-200 mb-2">{post.title}</h3>
            <p class="text-sm text-neutral-400 mb-4">{post.excerpt}</p>
            <div class="flex flex-wrap items-center gap-4 font-mono text-xs text-neutral-500">
                <span>{post.date.format("%b %-d, %Y").to_string()}</span>
                <span>{post.read_time}</span>
                <span>{move || views.with(|v| v.display(post))} " views"</span>
                <span>{post.likes} " likes"</span>
                <span>{post.comments} " comments"</span>
            </div>
        </article>
    }
}

#[component]
fn PostModal(
    post: &'static BlogPost,
    views: RwSignal<ViewCounter>,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let body = match render_post(post) {
        Ok(html) => html,
        Err(e) => {
            log::warn!("{e}");
            format!("<p>{e}</p>")
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
            on:click=move |_| on_close()
        >
            <div
                class="max-w-4xl w-full max-h-[90vh] overflow-y-auto bg-bg-elevated border border-neutral-700 rounded-lg"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="sticky top-0 flex items-start justify-between gap-4 p-6 bg-bg-elevated border-b border-neutral-700">
                    <div>
                        <div class="flex flex-wrap items-center gap-2 mb-2 text-xs">
                            <span class=format!(
                                "px-2 py-1 rounded border {}",
                                post.category.badge_class(),
                            )>{post.category.label()}</span>
                            <span class=format!(
                                "px-2 py-1 rounded {}",
                                post.difficulty.badge_class(),
                            )>{post.difficulty.label()}</span>
                            {post
                                .featured
                                .then(|| {
                                    view! {
                                        <span class="px-2 py-1 rounded bg-accent-500/20 text-accent-500">
                                            "Featured"
                                        </span>
                                    }
                                })}
                        </div>
                        <div class="flex flex-wrap gap-4 font-mono text-xs text-neutral-400">
                            <span>{post.date.format("%B %-d, %Y").to_string()}</span>
                            <span>{post.read_time}</span>
                            <span>{move || views.with(|v| v.display(post))} " views"</span>
                        </div>
                    </div>
                    <button
                        class="text-neutral-400 hover:text-primary-500 text-xl"
                        aria-label="Close"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>
                <div class="blog-content p-6" inner_html=body />
                <div class="flex flex-wrap gap-2 px-6 pb-6">
                    {post
                        .tags
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-1 text-xs font-mono rounded bg-neutral-800 text-neutral-300">
                                    "#"
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
