use leptos::prelude::*;

/// Container for HTML produced by [`crate::markdown::render_markdown`].
///
/// Only pass sanitized output here; the string is written with `inner_html`.
#[component]
pub fn MarkdownView(#[prop(into)] html: Signal<String>) -> impl IntoView {
    view! { <div id="markdown-content" class="markdown-body" inner_html=move || html.get()></div> }
}
