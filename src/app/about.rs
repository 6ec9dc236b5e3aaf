use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Reveal, TerminalHeader};
use crate::data::profile::{ABOUT_TEXT, NAME, PHILOSOPHY, QUICK_STATS, TIMELINE};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <TerminalHeader
            command="cat about.txt"
            description="Background, experience and the principles behind my work"
        />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 grid lg:grid-cols-3 gap-12">
            <div class="lg:col-span-2 space-y-12">
                <Reveal>
                    <h2 class="font-mono text-2xl font-bold text-primary-500 mb-4">{NAME}</h2>
                    <p class="text-lg text-neutral-200 leading-relaxed">{ABOUT_TEXT}</p>
                </Reveal>
                <Reveal delay_ms=100>
                    <h3 class="font-mono text-xl font-bold text-primary-500 mb-6">
                        <span class="text-accent-500">"$ "</span>
                        "history"
                    </h3>
                    <ol class="relative border-l border-neutral-700 space-y-8 ml-2">
                        {TIMELINE
                            .iter()
                            .map(|m| {
                                view! {
                                    <li class="ml-6">
                                        <span class="absolute -left-1.5 w-3 h-3 rounded-full bg-primary-500" />
                                        <div class="font-mono text-sm text-accent-500">{m.years}</div>
                                        <div class="text-lg font-semibold text-neutral-200">{m.title}</div>
                                        <div class="text-sm text-neutral-400 mb-2">{m.place}</div>
                                        <p class="text-neutral-300">{m.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-6">
                    {PHILOSOPHY
                        .iter()
                        .enumerate()
                        .map(|(i, (title, description))| {
                            view! {
                                <Reveal delay_ms={i as u32 * 100}>
                                    <div class="h-full bg-bg-elevated border border-neutral-700 rounded-lg p-6 hover:border-primary-500/50 transition-colors">
                                        <h4 class="font-mono font-bold text-primary-500 mb-2">{*title}</h4>
                                        <p class="text-sm text-neutral-400">{*description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <aside>
                <Reveal class="sticky top-24">
                    <div class="bg-bg-elevated border border-neutral-700 rounded-lg p-6 font-mono">
                        <h3 class="text-primary-500 font-bold mb-4">"quick_stats.json"</h3>
                        <dl class="space-y-3 text-sm">
                            {QUICK_STATS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="flex justify-between gap-4">
                                            <dt class="text-neutral-400">{*label}</dt>
                                            <dd class="text-neutral-200 text-right">{*value}</dd>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    </div>
                </Reveal>
            </aside>
        </div>
    }
}
