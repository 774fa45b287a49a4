mod error;
mod http;
mod types;

pub use error::ApiError;
pub use http::{decode_response, get_json, post_json};
pub use types::{Credentials, ErrorBody, GreetingResponse, RenderResponse};

use crate::config::CONFIG;

/// GET the greeting from the configured endpoint.
pub async fn fetch_greeting() -> Result<GreetingResponse, ApiError> {
    get_json(&CONFIG.api.hello_url()).await
}

/// POST credentials and receive the markdown document to render.
pub async fn submit_login(credentials: &Credentials) -> Result<RenderResponse, ApiError> {
    post_json(&CONFIG.api.login_url(), credentials).await
}
