//! Drives the login form's state through full request cycles using the same
//! decoding path the browser client uses.

use portal_web::api::{Credentials, RenderResponse, decode_response};
use portal_web::state::{GreetingState, SubmitState};

fn respond(status: u16, body: &str) -> Result<RenderResponse, portal_web::api::ApiError> {
    decode_response(status, body)
}

#[test]
fn successful_login_renders_document() {
    let mut state = SubmitState::default();
    assert!(state.begin());
    assert!(state.is_busy(), "button should be disabled while pending");

    let body = serde_json::json!({ "markdown": "## Account\n\n* plan: **pro**\n* seats: 3" }).to_string();
    state.finish(respond(200, &body));

    assert!(!state.is_busy(), "button should be re-enabled");
    assert!(!state.spinner_visible(), "spinner should be hidden");
    let rendered = state.rendered().expect("document rendered");
    assert!(rendered.html.contains("<h2>Account</h2>"));
    assert!(rendered.html.contains("<strong>pro</strong>"));
    assert_eq!(rendered.text, "Account\nplan: pro\nseats: 3");
}

#[test]
fn rejected_login_shows_endpoint_error() {
    let mut state = SubmitState::default();
    assert!(state.begin());

    state.finish(respond(403, r#"{"error":"Account locked"}"#));

    assert!(!state.is_busy());
    assert!(!state.spinner_visible());
    assert_eq!(state.error_text(), Some("Account locked"));
    assert!(state.rendered().is_none());
}

#[test]
fn gateway_html_error_page_still_reenables() {
    let mut state = SubmitState::default();
    assert!(state.begin());

    state.finish(respond(504, "<html><body>Gateway Timeout</body></html>"));

    assert!(!state.is_busy());
    assert_eq!(state.error_text(), Some("HTTP error! status: 504"));
}

#[test]
fn duplicate_submit_is_ignored_until_finished() {
    let mut state = SubmitState::default();
    assert!(state.begin());
    assert!(!state.begin());

    state.finish(respond(200, r#"{"markdown":"done"}"#));
    assert!(state.begin(), "a new submission is accepted once the first completes");
}

#[test]
fn request_body_matches_wire_format() {
    let body = serde_json::to_string(&Credentials::new("ada@example.com", "s3cret")).unwrap();
    assert_eq!(body, r#"{"email":"ada@example.com","password":"s3cret"}"#);
}

#[test]
fn greeting_round() {
    let ok = GreetingState::from_result(decode_response(200, r#"{"message":"Hello from Lambda!"}"#));
    assert_eq!(ok.text(), "Hello from Lambda!");

    let failed = GreetingState::from_result(decode_response(500, r#"{"error":"boom"}"#));
    assert_eq!(failed.text(), "Error fetching data");
}
