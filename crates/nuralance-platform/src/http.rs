//! HTTP adapter for the Nuralance backend.
//!
//! Speaks the two-endpoint contract: multipart CSV upload and JSON chat.
//! Uses browser `fetch()` via gloo-net. Non-2xx responses carry a JSON
//! `{detail}` body; when that body is missing or malformed a generic
//! fallback phrase is used instead.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, FormData};

use nuralance_core::ports::BackendPort;
use nuralance_types::api::{ApiError, ChatRequest, ChatResult, UploadResult};
use nuralance_types::config::ClientConfig;
use nuralance_types::{ClientError, Result};

const UPLOAD_PATH: &str = "/upload-csv";
const CHAT_PATH: &str = "/chatbot/message";

pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Build the multipart body with `csv_file` and `session_id` fields.
    /// The browser fills in the Content-Type boundary itself.
    fn multipart_body(session_id: &str, file_name: &str, bytes: &[u8]) -> Result<FormData> {
        let form = FormData::new().map_err(js_err)?;

        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));
        let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_err)?;

        form.append_with_blob_and_filename("csv_file", &blob, file_name)
            .map_err(js_err)?;
        form.append_with_str("session_id", session_id)
            .map_err(js_err)?;
        Ok(form)
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn upload_csv(
        &self,
        session_id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<UploadResult> {
        let form = Self::multipart_body(session_id, file_name, bytes)?;

        let response = Request::post(&self.config.endpoint(UPLOAD_PATH))
            .body(form)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;

        if !response.ok() {
            return Err(server_error(response, "Upload failed").await);
        }

        response
            .json::<UploadResult>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }

    async fn send_message(&self, session_id: &str, message: &str) -> Result<ChatResult> {
        let payload = ChatRequest {
            session_id: session_id.to_string(),
            message: message.to_string(),
        };

        let response = Request::post(&self.config.endpoint(CHAT_PATH))
            .header("Content-Type", "application/json")
            .json(&payload)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;

        if !response.ok() {
            return Err(server_error(response, "Failed to get response").await);
        }

        response
            .json::<ChatResult>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}

/// Extract the server's `{detail}` from a non-2xx response, falling back
/// to the given generic phrase.
async fn server_error(response: Response, fallback: &str) -> ClientError {
    let status = response.status();
    let detail = match response.json::<ApiError>().await {
        Ok(err) => err.detail,
        Err(_) => fallback.to_string(),
    };
    log::warn!("Backend error (HTTP {}): {}", status, detail);
    ClientError::Server { status, detail }
}

fn net_err(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

fn js_err(e: JsValue) -> ClientError {
    ClientError::JsInterop(format!("{:?}", e))
}
