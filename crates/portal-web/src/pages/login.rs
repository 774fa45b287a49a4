use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{self, Credentials};
use crate::components::{CopyButton, ErrorBox, MarkdownView, Spinner};
use crate::config::CONFIG;
use crate::logging;
use crate::state::SubmitState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Ignore submits while a request is in flight
        if !status.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            let result = api::submit_login(&credentials).await;
            match &result {
                Ok(_) => logging::info("login", "document received"),
                Err(e) => logging::error("login", &e.to_string()),
            }
            status.try_update(|s| s.finish(result));
        });
    };

    let busy = move || status.with(SubmitState::is_busy);
    let spinner = Signal::derive(move || status.with(SubmitState::spinner_visible));
    let error = Signal::derive(move || status.with(|s| s.error_text().map(str::to_string)));
    let has_result = move || status.with(|s| s.rendered().is_some());
    let html = Signal::derive(move || {
        status.with(|s| s.rendered().map(|r| r.html.clone()).unwrap_or_default())
    });
    let text = Signal::derive(move || {
        status.with(|s| s.rendered().map(|r| r.text.clone()).unwrap_or_default())
    });

    view! {
        <Title text=format!("Sign in - {}", CONFIG.name) />
        <main class="page">
            <header class="page-header">
                <h1>{CONFIG.name}</h1>
                <div class="tagline">{CONFIG.tagline}</div>
            </header>

            <form id="login-form" class="login-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input id="email" name="email" type="email" autocomplete="username" required=true bind:value=email />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    required=true
                    bind:value=password
                />

                <button id="submit-btn" type="submit" class="btn" disabled=busy>
                    "Sign in"
                </button>
            </form>

            <Spinner visible=spinner />
            <ErrorBox message=error />

            <section id="result" class="result-box" class:hidden=move || !has_result()>
                <div class="result-actions">
                    <CopyButton text=text label="Copy" />
                </div>
                <MarkdownView html=html />
            </section>

            <nav class="page-nav">
                <a href="/">"\u{2190} back"</a>
            </nav>
        </main>
    }
}
