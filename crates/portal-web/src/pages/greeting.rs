use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api;
use crate::components::Spinner;
use crate::config::CONFIG;
use crate::logging;
use crate::state::GreetingState;

/// Fetches the greeting once the page is live in the browser and shows it.
#[component]
pub fn GreetingPage() -> impl IntoView {
    let greeting = RwSignal::new(GreetingState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::fetch_greeting().await;
            if let Err(e) = &result {
                logging::error("greeting", &e.to_string());
            }
            greeting.try_set(GreetingState::from_result(result));
        });
    });

    view! {
        <Title text=CONFIG.name />
        <main class="page">
            <header class="page-header">
                <h1>{CONFIG.name}</h1>
            </header>

            <Spinner visible=Signal::derive(move || greeting.with(GreetingState::is_loading)) />
            <p id="response" class="response">{move || greeting.with(|g| g.text().to_string())}</p>

            <nav class="page-nav">
                <a href="/login">"sign in \u{2192}"</a>
            </nav>
        </main>
    }
}
