//! HTTP client for the remote endpoint.
//! Requests only go out from the hydrated client (gloo-net); status and body
//! interpretation is shared so it can be tested natively.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ErrorBody;

/// Turn a status code and raw body into the expected payload or an error.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let error = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);
        return Err(ApiError::status(status, error));
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response(response).await
}

#[cfg(feature = "hydrate")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response(response).await
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_response(status, &text)
}

// Server render and native builds never issue requests; the page only calls
// these after hydration.
#[cfg(not(feature = "hydrate"))]
pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
    Err(browser_only())
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(_url: &str, _body: &B) -> Result<T, ApiError> {
    Err(browser_only())
}

#[cfg(not(feature = "hydrate"))]
fn browser_only() -> ApiError {
    ApiError::Network("requests are only issued from the browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GreetingResponse, RenderResponse};

    #[test]
    fn ok_message_decodes() {
        let resp: GreetingResponse = decode_response(200, r#"{"message":"Hello from Lambda!"}"#).unwrap();
        assert_eq!(resp.message, "Hello from Lambda!");
    }

    #[test]
    fn ok_markdown_decodes() {
        let resp: RenderResponse = decode_response(200, r##"{"markdown":"# Report\n\nAll good."}"##).unwrap();
        assert_eq!(resp.markdown, "# Report\n\nAll good.");
    }

    #[test]
    fn error_status_uses_error_field_verbatim() {
        let err = decode_response::<RenderResponse>(401, r#"{"error":"Invalid email or password"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: "Invalid email or password".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn error_status_without_body() {
        let err = decode_response::<RenderResponse>(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode_response::<GreetingResponse>(200, "<html>gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response: "));
    }

    #[test]
    fn missing_field_is_decode_error() {
        let err = decode_response::<RenderResponse>(200, r#"{"message":"wrong variant"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn native_builds_refuse_to_send() {
        let err = get_json::<GreetingResponse>("https://api.example.com/hello").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
