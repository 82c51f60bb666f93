//! Contact form delivery.
//!
//! Posts the form as multipart data and turns the endpoint's answer into a
//! [`SubmitError`] the form can display. The endpoint is expected to answer
//! JSON (Formspree style): any 2xx is success, and a rejection may carry
//! `{"errors": [{"message": "..."}]}`.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use crate::config::REJECTED_FALLBACK_MESSAGE;
use crate::error::SubmitError;
use crate::types::ContactPayload;

/// Status and body of an answered request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    /// Raw body; `None` when it could not be read.
    pub body: Option<String>,
}

impl TransportReply {
    pub fn accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry a contact payload to the endpoint.
///
/// Returns `Err(SubmitError::Transport)` only when no answer arrived; HTTP
/// error statuses are still a [`TransportReply`].
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<TransportReply, SubmitError>;
}

/// Browser `fetch` transport posting to the form's action URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    action: String,
}

impl HttpTransport {
    pub fn new(action: impl Into<String>) -> Self {
        Self { action: action.into() }
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<TransportReply, SubmitError> {
        let form_data = FormData::new()
            .map_err(|e| SubmitError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        for (key, value) in payload.entries() {
            form_data
                .append_with_str(key, value)
                .map_err(|e| SubmitError::Transport(format!("Failed to append {}: {:?}", key, e)))?;
        }

        let request = Request::post(&self.action)
            .header("Accept", "application/json")
            .body(form_data)
            .map_err(|e| SubmitError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if response.ok() {
            return Ok(TransportReply { status, body: None });
        }

        let body = response.text().await.ok();
        Ok(TransportReply { status, body })
    }
}

/// Send a payload and classify the answer.
pub async fn deliver<T: ContactTransport>(
    transport: &T,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    let reply = transport.send(payload).await?;

    if reply.accepted() {
        log::info!("📨 Contact form accepted ({})", reply.status);
        return Ok(());
    }

    let message = rejection_message(reply.body.as_deref());
    log::warn!("Contact form rejected ({}): {}", reply.status, message);
    Err(SubmitError::Rejected {
        status: reply.status,
        message,
    })
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    message: Option<String>,
}

/// Text shown for a rejected request.
///
/// Structured messages are joined with `", "`. An absent, malformed or
/// message-less body reads as an empty object and yields the generic text.
pub fn rejection_message(body: Option<&str>) -> String {
    let parsed: ErrorBody = body
        .and_then(|b| serde_json::from_str(b).ok())
        .unwrap_or_default();

    let messages: Vec<String> = parsed
        .errors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.message)
        .collect();

    if messages.is_empty() {
        REJECTED_FALLBACK_MESSAGE.to_string()
    } else {
        messages.join(", ")
    }
}
