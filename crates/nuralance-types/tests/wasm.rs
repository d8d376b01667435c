//! WASM-target tests for nuralance-types.
//!
//! Mirrors a subset of the native unit tests but runs under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use nuralance_types::api::*;
use nuralance_types::error::*;
use nuralance_types::message::*;

#[wasm_bindgen_test]
fn message_roles() {
    assert_eq!(Message::user("hi").role, Role::User);
    assert_eq!(Message::assistant("hello").role, Role::Assistant);
}

#[wasm_bindgen_test]
fn analysis_welcome_embeds_description() {
    let text = analysis_welcome("3 columns: date, amount, category");
    assert!(text.contains("3 columns: date, amount, category"));
}

#[wasm_bindgen_test]
fn chat_request_wire_format() {
    let req = ChatRequest {
        session_id: "session_1".to_string(),
        message: "hi".to_string(),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""session_id":"session_1""#));
    assert!(json.contains(r#""message":"hi""#));
}

#[wasm_bindgen_test]
fn server_error_detail_verbatim() {
    let err = ClientError::Server {
        status: 404,
        detail: "Session not initialized. Please upload a CSV file first.".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Session not initialized. Please upload a CSV file first."
    );
}
