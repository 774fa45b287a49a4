use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div id="spinner" class="spinner" class:hidden=move || !visible.get() role="status" aria-live="polite">
            <span class="sr-only">"Loading\u{2026}"</span>
        </div>
    }
}
