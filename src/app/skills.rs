use std::time::Duration;

use leptos::{ev::KeyboardEvent, html, prelude::*};
use leptos_meta::Title;

use super::components::{Reveal, TerminalHeader, Typewriter, WindowDots};
use super::timers::TimerDriver;
use crate::config::Timings;
use crate::data::skills::{Skill, SkillCatalog};
use crate::terminal::{LineKind, SkillTerminal, QUICK_COMMANDS, WELCOME};

#[component]
pub fn SkillsPage() -> impl IntoView {
    let catalog = SkillCatalog::default();
    let groups = catalog
        .grouped()
        .into_iter()
        .map(|(category, skills)| (category, skills.into_iter().cloned().collect::<Vec<_>>()))
        .collect::<Vec<_>>();

    view! {
        <Title text="Skills" />
        <TerminalHeader
            command="ls -la ~/skills"
            description="The tools and platforms I use to build, ship and run software"
        />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-16">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {groups
                    .into_iter()
                    .enumerate()
                    .map(|(i, (category, skills))| {
                        view! {
                            <Reveal delay_ms={i as u32 * 100}>
                                <div class="h-full bg-bg-elevated border border-neutral-700 rounded-lg p-6 hover:border-primary-500/50 transition-colors">
                                    <h3 class=format!(
                                        "font-mono font-bold text-lg mb-4 {}",
                                        category.color(),
                                    )>{category.title()}</h3>
                                    <ul class="space-y-4">
                                        {skills
                                            .into_iter()
                                            .map(|skill| view! { <SkillBar skill /> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <Reveal>
                <SkillsExplorer catalog />
            </Reveal>
        </div>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    view! {
        <li>
            <div class="flex items-center justify-between mb-1">
                <div class="flex items-center space-x-2">
                    <img src=skill.icon alt=skill.name class="w-5 h-5" />
                    <span class="font-mono text-sm text-neutral-200">{skill.name}</span>
                </div>
                <span class="font-mono text-xs text-neutral-400">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 bg-neutral-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-primary-500 to-accent-500 rounded-full"
                    style=format!("width: {}%", skill.level)
                />
            </div>
        </li>
    }
}

fn line_class(line: &str) -> &'static str {
    match LineKind::of(line) {
        LineKind::Prompt => "text-primary-500",
        LineKind::Error => "text-red-500",
        LineKind::Output => "text-neutral-300",
    }
}

#[component]
fn SkillsExplorer(catalog: SkillCatalog) -> impl IntoView {
    let timings = expect_context::<Timings>();
    let terminal = TimerDriver::new(SkillTerminal::new(catalog, timings.command_latency));
    let (completions, set_completions) = signal(Vec::<String>::new());
    let input_ref = NodeRef::<html::Input>::new();
    let output_ref = NodeRef::<html::Div>::new();

    // keep the newest output in view
    Effect::new(move |_| {
        terminal.with(|t| t.transcript().len());
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let keydown_handler = move |ev: KeyboardEvent| {
        if ev.meta_key() || ev.alt_key() || ev.ctrl_key() {
            return;
        }
        match ev.key().as_ref() {
            "Enter" => {
                ev.prevent_default();
                set_completions(Vec::new());
                terminal.run(SkillTerminal::submit_input);
            }
            "ArrowUp" => {
                ev.prevent_default();
                terminal.update(|t| {
                    t.history_prev();
                });
            }
            "ArrowDown" => {
                ev.prevent_default();
                terminal.update(|t| {
                    t.history_next();
                });
            }
            "Tab" => {
                ev.prevent_default();
                let mut opts = Vec::new();
                terminal.update(|t| opts = t.tab());
                if opts.len() == 1 {
                    opts.clear();
                }
                set_completions(opts);
            }
            _ => {}
        }
    };

    let load_quick = move |cmd: &'static str| {
        set_completions(Vec::new());
        terminal.update(|t| t.load_command(cmd));
        if let Some(el) = input_ref.get_untracked() {
            let _ = el.focus();
        }
    };

    view! {
        <div class="bg-bg-elevated border border-neutral-700 rounded-lg overflow-hidden shadow-glow">
            <div class="flex items-center justify-between px-4 py-3 bg-bg-surface border-b border-neutral-700">
                <WindowDots />
                <span class="font-mono text-xs text-neutral-400">"skills-explorer: bash"</span>
            </div>
            <div
                node_ref=output_ref
                class="h-80 overflow-y-auto p-4 font-mono text-sm"
                on:click=move |_| {
                    if let Some(el) = input_ref.get_untracked() {
                        let _ = el.focus();
                    }
                }
            >
                <Show when=move || terminal.with(|t| t.transcript().is_empty())>
                    <div class="text-primary-500">
                        <Typewriter text=WELCOME delay=Duration::from_millis(30) />
                    </div>
                    <div class="text-neutral-500 mt-2">"ready for input..."</div>
                </Show>
                <For
                    each=move || {
                        terminal
                            .with(|t| t.transcript().iter().cloned().enumerate().collect::<Vec<_>>())
                    }
                    key=|(i, line)| (*i, line.clone())
                    children=|(_, line)| {
                        view! {
                            <pre class=format!(
                                "whitespace-pre-wrap {}",
                                line_class(&line),
                            )>{line.clone()}</pre>
                        }
                    }
                />
                <Show when=move || terminal.with(SkillTerminal::is_processing)>
                    <div class="flex items-center space-x-1 text-accent-500">
                        <span class="animate-pulse">"."</span>
                        <span class="animate-pulse [animation-delay:150ms]">"."</span>
                        <span class="animate-pulse [animation-delay:300ms]">"."</span>
                    </div>
                </Show>
                <div class="flex items-center mt-1">
                    <span class="text-accent-500 mr-2">"$"</span>
                    <input
                        node_ref=input_ref
                        type="text"
                        autocapitalize="none"
                        spellcheck="false"
                        aria-label="Terminal input"
                        placeholder="Type a command (try 'help')"
                        class="flex-1 bg-transparent outline-none text-neutral-200 caret-primary-500"
                        prop:value=move || terminal.with(|t| t.input().to_string())
                        prop:disabled=move || terminal.with(SkillTerminal::is_processing)
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_completions(Vec::new());
                            terminal.update(|t| t.set_input(value));
                        }
                        on:keydown=keydown_handler
                    />
                </div>
                <Show when=move || !completions.get().is_empty()>
                    <div class="flex flex-wrap gap-x-4 text-neutral-400 mt-1">
                        {move || {
                            completions
                                .get()
                                .into_iter()
                                .map(|opt| view! { <span>{opt}</span> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-2 p-4 border-t border-neutral-700 bg-bg-surface">
                {QUICK_COMMANDS
                    .iter()
                    .map(|(cmd, description)| {
                        let cmd = *cmd;
                        view! {
                            <button
                                class="text-left px-3 py-2 rounded-md border border-neutral-700 hover:border-primary-500 transition-colors"
                                on:click=move |_| load_quick(cmd)
                            >
                                <div class="font-mono text-sm text-primary-500">{cmd}</div>
                                <div class="text-xs text-neutral-400">{*description}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
