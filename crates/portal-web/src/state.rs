//! UI state for the two pages, kept free of DOM types so the transitions can
//! be tested natively. Components hold these in signals and derive visibility
//! and disabled flags from the predicates.

use std::cell::RefCell;

use crate::api::{ApiError, GreetingResponse, RenderResponse};
use crate::markdown;

/// Text shown when the greeting request fails for any reason
pub const GREETING_FAILED: &str = "Error fetching data";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GreetingState {
    #[default]
    Loading,
    Loaded(String),
    Failed,
}

impl GreetingState {
    pub fn from_result(result: Result<GreetingResponse, ApiError>) -> Self {
        match result {
            Ok(resp) => GreetingState::Loaded(resp.message),
            Err(_) => GreetingState::Failed,
        }
    }

    /// Text for the `#response` element
    pub fn text(&self) -> &str {
        match self {
            GreetingState::Loading => "",
            GreetingState::Loaded(message) => message,
            GreetingState::Failed => GREETING_FAILED,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GreetingState::Loading)
    }
}

/// A rendered markdown document: HTML for the container, text for the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub text: String,
}

impl Rendered {
    pub fn from_markdown(source: &str) -> Self {
        Self {
            html: markdown::render_markdown(source),
            text: markdown::plain_text(source),
        }
    }
}

/// Lifecycle of one login form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Rendered(Rendered),
    Failed(String),
}

impl SubmitState {
    /// Move to `Pending`, clearing any previous result or error.
    ///
    /// Returns `false` and leaves the state alone if a request is already in
    /// flight; the caller must not send another.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = SubmitState::Pending;
        true
    }

    /// Apply the outcome of the request started by [`SubmitState::begin`].
    pub fn finish(&mut self, result: Result<RenderResponse, ApiError>) {
        *self = match result {
            Ok(resp) => SubmitState::Rendered(Rendered::from_markdown(&resp.markdown)),
            Err(e) => SubmitState::Failed(e.to_string()),
        };
    }

    /// Submit button is disabled while true
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }

    pub fn spinner_visible(&self) -> bool {
        self.is_busy()
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn rendered(&self) -> Option<&Rendered> {
        match self {
            SubmitState::Rendered(rendered) => Some(rendered),
            _ => None,
        }
    }
}

/// The transient "Copied!" tooltip.
///
/// Every `show` hands out a ticket; `dismiss` only hides the tooltip for the
/// latest ticket, so an older copy's timer cannot cut a newer one short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    visible: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    pub fn dismiss(&mut self, ticket: u64) {
        if ticket == self.generation {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Somewhere a [`CopyFeedback`] lives: a signal in the page, a plain cell in tests.
pub trait FeedbackCell {
    /// Apply `f`, or return `None` if the owner has gone away.
    fn modify<R>(&self, f: impl FnOnce(&mut CopyFeedback) -> R) -> Option<R>;
}

impl FeedbackCell for RefCell<CopyFeedback> {
    fn modify<R>(&self, f: impl FnOnce(&mut CopyFeedback) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// One copy's feedback cycle: show the tooltip, wait out `delay`, hide it.
///
/// A failed copy is handed back untouched for logging and never shows the tooltip.
pub async fn run_copy_feedback<C, D, Fut>(cell: &C, copied: Result<(), String>, delay: D) -> Result<(), String>
where
    C: FeedbackCell,
    D: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    copied?;

    let Some(ticket) = cell.modify(CopyFeedback::show) else {
        return Ok(());
    };
    delay().await;
    cell.modify(|f| f.dismiss(ticket));

    Ok(())
}
