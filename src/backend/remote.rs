//! Hosted inference endpoint backend.

use log::debug;
use reqwest::StatusCode;

use super::Backend;
use super::types::{BackendError, InferencePayload, SynthesisRequest};

/// Whether an API token must be supplied before calling the endpoint.
///
/// Anonymous access works but is rate-limited; some deployments insist on a
/// token up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    #[default]
    Optional,
    Required,
}

/// Backend that POSTs to a hosted inference endpoint.
pub struct InferenceApiBackend {
    model_id: String,
    endpoint: String,
    token: Option<String>,
    policy: TokenPolicy,
    client: reqwest::blocking::Client,
}

impl InferenceApiBackend {
    /// Create a backend for the given model on the given hub host.
    pub fn new(model_id: &str, host: &str, token: Option<String>, policy: TokenPolicy) -> Self {
        Self {
            model_id: model_id.to_string(),
            endpoint: format!("https://api-inference.{host}/models/{model_id}"),
            token,
            policy,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// The full endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Map a non-success response to the error taxonomy.
    fn classify_failure(&self, status: StatusCode, body: String) -> BackendError {
        match status {
            StatusCode::UNAUTHORIZED => BackendError::InvalidToken,
            StatusCode::NOT_FOUND => BackendError::ModelNotFound(self.model_id.clone()),
            _ => BackendError::RequestFailed {
                status: status.as_u16(),
                body,
            },
        }
    }
}

impl Backend for InferenceApiBackend {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        if self.policy == TokenPolicy::Required && self.token.is_none() {
            return Err(BackendError::MissingToken);
        }

        let payload = InferencePayload::from(request);
        debug!("POST {} speaker={}", self.endpoint, payload.parameters.speaker);

        let mut builder = self.client.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(self.classify_failure(status, body));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
