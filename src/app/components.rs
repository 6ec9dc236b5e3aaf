use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::timers::TimerDriver;
use crate::config::Timings;
use crate::typewriter::{Cursor, TextReveal};

#[component]
pub fn Typewriter(
    #[prop(into)] text: Signal<String>,
    #[prop(optional)] delay: Option<Duration>,
    #[prop(optional)] caret: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let delay = delay.unwrap_or_else(|| expect_context::<Timings>().reveal_delay);
    let reveal = TextReveal::new(String::new(), delay);
    let driver = TimerDriver::new(if caret { reveal.with_caret() } else { reveal });

    // effects only run in the browser, so the server renders the empty prefix
    Effect::new(move |_| {
        let text = text.get();
        driver.run(|r| r.retarget(&text, delay));
    });

    view! {
        <span class=class>
            {move || driver.with(|r| r.prefix().to_string())}
            {move || match driver.with(TextReveal::cursor) {
                Cursor::Blinking => {
                    Some(view! { <span class="typewriter-cursor animate-blink" /> }.into_any())
                }
                Cursor::Caret => Some(view! { <span class="typewriter-cursor" /> }.into_any()),
                Cursor::Hidden => None,
            }}
        </span>
    }
}

/// Page banner: a typed-out shell command and an optional description.
#[component]
pub fn TerminalHeader(
    #[prop(into)] command: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-bg-elevated border-b border-neutral-700 relative overflow-hidden">
            <div class="absolute inset-0 opacity-10">
                <div class="h-full bg-gradient-to-b from-transparent via-primary-500/20 to-transparent scanline" />
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 relative space-y-4 fade-in">
                <div class="font-mono text-2xl lg:text-3xl">
                    <span class="text-accent-500 mr-3">"$"</span>
                    <Typewriter text=command delay=Duration::from_millis(30) />
                    <span class="terminal-cursor ml-1" />
                </div>
                {description
                    .map(|d| view! { <p class="text-neutral-400 text-sm max-w-2xl fade-in">{d}</p> })}
                <WindowDots />
            </div>
        </div>
    }
}

#[component]
pub fn WindowDots() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full bg-red-500" />
            <div class="w-3 h-3 rounded-full bg-yellow-500" />
            <div class="w-3 h-3 rounded-full bg-primary-500" />
        </div>
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_seen(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || format!("reveal {class} {}", if seen.get() { "reveal-in" } else { "" })
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
