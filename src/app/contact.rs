use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Reveal, TerminalHeader};
use super::timers::TimerDriver;
use crate::config::Timings;
use crate::contact::{ContactState, Field, SubmitPhase};
use crate::data::profile::CONTACT;

#[component]
pub fn ContactPage() -> impl IntoView {
    let timings = expect_context::<Timings>();
    let state = TimerDriver::new(ContactState::new(&timings));
    let phase = move || state.with(ContactState::phase);

    view! {
        <Title text="Contact" />
        <TerminalHeader
            command="./send_message.sh"
            description="Have a project, a role or a question? Drop me a line."
        />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 grid lg:grid-cols-3 gap-12">
            <Reveal class="lg:col-span-2">
                <form
                    novalidate=true
                    class="bg-bg-elevated border border-neutral-700 rounded-lg p-8 space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        state.run(|s| s.submit().schedule());
                    }
                >
                    <div class="grid md:grid-cols-2 gap-6">
                        <FormField state field=Field::Name label="Name" placeholder="Your name" />
                        <FormField
                            state
                            field=Field::Email
                            label="Email"
                            placeholder="you@example.com"
                        />
                    </div>
                    <FormField state field=Field::Subject label="Subject" placeholder="What's this about?" />
                    <FormField
                        state
                        field=Field::Message
                        label="Message"
                        placeholder="Tell me about your project..."
                        multiline=true
                    />
                    <button
                        type="submit"
                        prop:disabled=move || phase() != SubmitPhase::Idle
                        class="w-full md:w-auto px-8 py-3 bg-primary-500 text-bg-surface font-semibold font-mono rounded-lg hover:bg-primary-700 transition-all duration-200 disabled:opacity-60"
                    >
                        {move || match phase() {
                            SubmitPhase::Idle => "$ send --message",
                            SubmitPhase::Submitting => "Sending...",
                            SubmitPhase::Submitted => "Message sent",
                        }}
                    </button>
                    <Show when=move || phase() == SubmitPhase::Submitted>
                        <div
                            role="status"
                            class="p-4 rounded-lg border border-primary-500/40 bg-primary-500/10 font-mono text-sm text-primary-500"
                        >
                            "✓ Message sent successfully! I'll get back to you soon."
                        </div>
                    </Show>
                </form>
            </Reveal>
            <aside class="space-y-6">
                <Reveal delay_ms=100>
                    <div class="bg-bg-elevated border border-neutral-700 rounded-lg p-6 space-y-4">
                        <h3 class="font-mono font-bold text-primary-500">"contact_info"</h3>
                        <ContactMethod label="Email" value=CONTACT.email href=format!("mailto:{}", CONTACT.email) />
                        <ContactMethod
                            label="Phone"
                            value=CONTACT.phone
                            href=format!("tel:{}", CONTACT.phone.replace(' ', ""))
                        />
                        <ContactMethod label="Location" value=CONTACT.address />
                    </div>
                </Reveal>
                <Reveal delay_ms=200>
                    <div class="bg-bg-elevated border border-neutral-700 rounded-lg p-6">
                        <h3 class="font-mono font-bold text-primary-500 mb-4">"social_links"</h3>
                        <div class="flex gap-3">
                            {[
                                ("GitHub", CONTACT.social.github, "devicon-github-plain"),
                                ("LinkedIn", CONTACT.social.linkedin, "devicon-linkedin-plain"),
                                ("Twitter", CONTACT.social.twitter, "devicon-twitter-original"),
                            ]
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
                    </div>
                </Reveal>
            </aside>
        </div>
    }
}

#[component]
fn FormField(
    state: TimerDriver<ContactState>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || state.with(|s| s.form().get(field).to_string());
    let error = move || state.with(|s| s.error(field));
    let disabled = move || state.with(|s| s.phase() != SubmitPhase::Idle);
    let class = move || {
        format!(
            "w-full px-4 py-3 rounded-lg bg-bg-surface border font-mono text-sm focus:outline-none transition-colors {}",
            if error().is_some() {
                "border-red-500 focus:border-red-500"
            } else {
                "border-neutral-700 focus:border-primary-500"
            },
        )
    };
    let on_input = move |ev: leptos::ev::Event| {
        let v = event_target_value(&ev);
        state.update(|s| s.set_field(field, v));
    };

    view! {
        <div>
            <label for=field.id() class="block font-mono text-sm text-neutral-300 mb-2">
                {label}
            </label>
            {if multiline {
                view! {
                    <textarea
                        id=field.id()
                        name=field.id()
                        rows=6
                        placeholder=placeholder
                        class=class
                        prop:value=value
                        prop:disabled=disabled
                        on:input=on_input
                    />
                }
                    .into_any()
            } else {
                view! {
                    <input
                        id=field.id()
                        name=field.id()
                        type={if field == Field::Email { "email" } else { "text" }}
                        placeholder=placeholder
                        class=class
                        prop:value=value
                        prop:disabled=disabled
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
            {move || {
                error()
                    .map(|e| {
                        view! {
                            <p class="mt-1 text-sm text-red-500" role="alert">
                                {e.to_string()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ContactMethod(
    label: &'static str,
    value: &'static str,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <div class="text-xs uppercase tracking-wide text-neutral-400">{label}</div>
            {match href {
                Some(href) => {
                    view! {
                        <a href=href class="font-mono text-neutral-200 hover:text-primary-500">
                            {value}
                        </a>
                    }
                        .into_any()
                }
                None => view! { <span class="font-mono text-neutral-200">{value}</span> }.into_any(),
            }}
        </div>
    }
}
