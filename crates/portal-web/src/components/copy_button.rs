use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::config::CONFIG;
use crate::logging;
use crate::state::{self, CopyFeedback, FeedbackCell};

impl FeedbackCell for RwSignal<CopyFeedback> {
    fn modify<R>(&self, f: impl FnOnce(&mut CopyFeedback) -> R) -> Option<R> {
        // The page may have navigated away during the delay
        self.try_update(f)
    }
}

/// A button that copies text to the clipboard and briefly shows a "Copied!" tooltip.
/// Copy failures are logged to the console only.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: Signal<String>,
    /// Button label
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());

    let on_click = move |_: leptos::ev::MouseEvent| {
        let text = text.get_untracked();
        spawn_local(async move {
            let copied = browser::copy_to_clipboard(&text).await;
            let delay = || browser::sleep_ms(CONFIG.copy_feedback_ms);
            if let Err(e) = state::run_copy_feedback(&feedback, copied, delay).await {
                logging::error("copy", &format!("Failed to copy text: {}", e));
            }
        });
    };

    view! {
        <span class="copy">
            <button id="copy-btn" type="button" on:click=on_click class="btn btn-ghost">
                {label}
            </button>
            <span id="copy-tooltip" class="tooltip" class:hidden=move || !feedback.with(CopyFeedback::is_visible)>
                "Copied!"
            </span>
        </span>
    }
}
