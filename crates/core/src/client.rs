//! The outbound submit call.
//!
//! One POST to one fixed endpoint. Every way the call can end — success,
//! non-success status, nothing came back, never dispatched — is folded into
//! a [`Completion`] and handed back to the controller; this function never
//! returns an error of its own. No retries, no application timeout, no
//! cancellation: any timeout behavior comes from the transport defaults.

use tracing::{debug, warn};

use crate::request::SubmitBody;
use crate::response::ServiceResponse;

/// Where submissions go. Fixed; overridable only through
/// [`Client::with_endpoint`] for tests.
pub const ENDPOINT: &str = "https://bajaj-finserv-backend-bzyg.onrender.com/bfhl";

/// Terminal outcome of one submission attempt, delivered to the controller's
/// completion handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Success status with a response body.
    Success(ServiceResponse),
    /// Non-success status; carries the status text.
    HttpError(String),
    /// The request was sent and no response was received.
    Transport,
    /// The request never made it out.
    Setup(String),
}

/// Thin wrapper over a shared `reqwest` client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    /// Point the client somewhere else. Test seam; production code uses
    /// [`ENDPOINT`].
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    /// POST the body and fold the result into a [`Completion`].
    pub async fn submit(&self, body: &SubmitBody) -> Completion {
        debug!(
            endpoint = %self.endpoint,
            items = body.data.len(),
            filters = body.filter.len(),
            "posting submission"
        );

        let response = match self.http.post(&self.endpoint).json(body).send().await {
            Ok(response) => response,
            Err(err) if err.is_builder() => {
                warn!(%err, "could not build the request");
                return Completion::Setup(err.to_string());
            }
            Err(err) => {
                warn!(%err, "no response from endpoint");
                return Completion::Transport;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = status.canonical_reason().unwrap_or(status.as_str()).to_string();
            debug!(%status, "endpoint rejected submission");
            return Completion::HttpError(text);
        }

        match response.json::<ServiceResponse>().await {
            Ok(parsed) => Completion::Success(parsed),
            Err(err) => {
                // A body that isn't the expected JSON projects the same as a
                // response with no known fields.
                warn!(%err, "response body is not JSON; treating fields as absent");
                Completion::Success(ServiceResponse::default())
            }
        }
    }
}
