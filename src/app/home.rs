use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::components::{Reveal, Typewriter};
use crate::data::profile::{CONTACT, HERO_CONTENT};
use crate::data::skills::SKILLS;

const STATS: [(&str, &str); 4] = [
    ("1+", "Years Experience"),
    ("3", "Cloud Platforms"),
    ("10+", "Projects Completed"),
    ("19+", "Technologies"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="relative overflow-hidden">
            <div class="absolute inset-0 grid-background pointer-events-none" />
            <section class="relative min-h-[80vh] flex items-center justify-center px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto text-center space-y-8 fade-in">
                    <div class="font-mono text-2xl md:text-3xl lg:text-4xl font-bold tracking-wide">
                        <span class="text-accent-500 mr-3">"$"</span>
                        <span class="text-primary-500">"whoami"</span>
                    </div>
                    <div class="font-mono text-4xl md:text-6xl lg:text-8xl font-bold tracking-tight text-primary-500">
                        <Typewriter
                            text="DevOps & Cloud Engineer"
                            delay=Duration::from_millis(80)
                        />
                        <span class="terminal-cursor ml-2" />
                    </div>
                    <p class="text-xl md:text-2xl text-neutral-200 max-w-4xl mx-auto leading-relaxed">
                        {HERO_CONTENT}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-8">
                        <A
                            href="/projects"
                            attr:class="inline-flex items-center px-8 py-4 border-2 border-primary-500 text-primary-500 hover:bg-primary-500 hover:text-bg-surface transition-all duration-200 font-semibold rounded-lg shadow-glow"
                        >
                            "View Projects"
                        </A>
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center px-8 py-4 border-2 border-neutral-600 bg-neutral-800 text-neutral-200 hover:border-primary-500 hover:text-primary-500 transition-all duration-200 font-semibold rounded-lg"
                        >
                            "Contact Me"
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-24 relative bg-bg-surface/50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, (value, label))| {
                            view! {
                                <Reveal delay_ms={i as u32 * 100} class="text-center">
                                    <div class="bg-bg-elevated border border-neutral-700 p-6 rounded-lg hover:border-primary-500/50 transition-all duration-300">
                                        <div class="font-mono text-3xl md:text-4xl font-bold text-primary-500 mb-2">
                                            {*value}
                                        </div>
                                        <div class="text-sm text-neutral-400 font-medium">{*label}</div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-24 relative">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <Reveal class="text-center mb-16">
                        <h2 class="font-mono text-3xl md:text-4xl font-bold text-primary-500 mb-4">
                            "Featured Technologies"
                        </h2>
                        <p class="text-neutral-400 max-w-2xl mx-auto">
                            "A curated selection of the technologies I work with daily to build and deploy scalable systems"
                        </p>
                    </Reveal>
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6">
                        {SKILLS
                            .iter()
                            .take(6)
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <Reveal delay_ms={i as u32 * 100}>
                                        <div class="bg-bg-elevated border border-neutral-700 p-4 rounded-lg text-center hover:border-primary-500/50 transition-all duration-300 group">
                                            <img
                                                src=skill.icon
                                                alt=skill.name
                                                class="w-8 h-8 mx-auto mb-3 opacity-70 group-hover:opacity-100 transition-opacity"
                                            />
                                            <div class="font-mono text-sm text-neutral-200 font-medium">
                                                {skill.name}
                                            </div>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="text-center mt-12">
                        <A href="/skills" attr:class="text-primary-500 hover:text-primary-400 font-mono font-semibold">
                            "View all skills →"
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-24 relative">
                <Reveal class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <div class="bg-bg-elevated border border-primary-500/20 p-12 rounded-2xl shadow-glow">
                        <h2 class="font-mono text-3xl md:text-4xl font-bold text-primary-500 mb-6">
                            "Ready to Deploy Your Vision?"
                        </h2>
                        <p class="text-xl text-neutral-200 mb-8 leading-relaxed">
                            "Let's build something amazing together. From infrastructure automation to full-stack development, I'm here to turn your ideas into production reality."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <A
                                href="/contact"
                                attr:class="inline-flex items-center justify-center px-8 py-4 bg-primary-500 text-bg-surface font-semibold rounded-lg hover:bg-primary-700 transition-all duration-200"
                            >
                                "Start a Project"
                            </A>
                            <a
                                href=CONTACT.social.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center justify-center px-8 py-4 border-2 border-neutral-600 text-neutral-200 hover:border-primary-500 hover:text-primary-500 font-semibold rounded-lg transition-all duration-200"
                            >
                                <i class="devicon-github-plain mr-2" />
                                "View Code"
                            </a>
                        </div>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
