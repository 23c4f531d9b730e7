use crate::domain::brandpay::{BrandPayMethods, BrandPayToken};
use crate::domain::payment::Payment;
use crate::error::TossError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

// Success schemas on these endpoints reserve code/message fields; a non-null
// code makes the call a logical failure regardless of HTTP status.
pub(crate) trait ProviderPayload {
    fn error_code(&self) -> Option<&str>;
    fn error_message(&self) -> Option<&str>;
}

impl ProviderPayload for Payment {
    fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ProviderPayload for BrandPayToken {
    fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ProviderPayload for BrandPayMethods {
    fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

pub(crate) async fn decode<T>(
    outcome: Result<reqwest::Response, reqwest::Error>,
    operation: &'static str,
) -> Result<T, TossError>
where
    T: DeserializeOwned + ProviderPayload,
{
    let response = outcome.map_err(|source| {
        tracing::warn!("{} transport failure: {}", operation, source);
        TossError::Transport { operation, source }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| {
        tracing::warn!("{} body read failure: {}", operation, source);
        TossError::Transport { operation, source }
    })?;

    tracing::debug!("{} response - HTTP {}: {}", operation, status, body);

    if !status.is_success() {
        return Err(error_response(operation, status.as_u16(), &body));
    }

    if body.trim().is_empty() {
        tracing::warn!("{} returned an empty body", operation);
        return Err(TossError::MalformedResponse {
            operation,
            status: status.as_u16(),
            detail: "empty response body".to_string(),
        });
    }

    let payload: T = serde_json::from_str(&body).map_err(|err| {
        tracing::warn!("{} returned an undecodable body: {}", operation, err);
        TossError::MalformedResponse {
            operation,
            status: status.as_u16(),
            detail: err.to_string(),
        }
    })?;

    if let Some(code) = payload.error_code() {
        let message = payload
            .error_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} failed: {}", operation, code));
        tracing::warn!("{} rejected - code: {}, message: {}", operation, code, message);
        return Err(TossError::Provider {
            code: code.to_string(),
            message,
        });
    }

    Ok(payload)
}

fn error_response(operation: &'static str, status: u16, body: &str) -> TossError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(code) = parsed.code {
            let message = parsed
                .message
                .unwrap_or_else(|| format!("{} failed (HTTP {})", operation, status));
            tracing::warn!("{} rejected - code: {}, message: {}", operation, code, message);
            return TossError::Provider { code, message };
        }
    }
    tracing::warn!("{} failed (HTTP {}): {}", operation, status, body);
    TossError::MalformedResponse {
        operation,
        status,
        detail: body.chars().take(200).collect(),
    }
}
