use leptos::prelude::*;

/// Error banner, hidden while `message` is `None`. The text is shown as-is.
#[component]
pub fn ErrorBox(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div id="error" class="error-box" class:hidden=move || message.with(Option::is_none) role="alert">
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
