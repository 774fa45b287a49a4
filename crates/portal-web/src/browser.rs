//! Thin wrappers over the browser APIs the page awaits on.

#[cfg(feature = "hydrate")]
mod hydrate {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    /// Write `text` to the system clipboard.
    pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| describe(&e))
    }

    // Clipboard rejections are DOMExceptions, which inherit from Error
    fn describe(value: &JsValue) -> String {
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }

    pub async fn sleep_ms(ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

#[cfg(feature = "hydrate")]
pub use hydrate::*;

// Event handlers never fire outside the browser; these keep the server build
// compiling.
#[cfg(not(feature = "hydrate"))]
pub async fn copy_to_clipboard(_text: &str) -> Result<(), String> {
    Err("clipboard is only available in the browser".to_string())
}

#[cfg(not(feature = "hydrate"))]
pub async fn sleep_ms(_ms: u32) {}
