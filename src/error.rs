use thiserror::Error;

pub const ALREADY_CANCELED_PAYMENT: &str = "ALREADY_CANCELED_PAYMENT";

#[derive(Debug, Error)]
pub enum TossError {
    #[error("{code}: {message}")]
    Validation { code: &'static str, message: String },

    #[error("{code}: {message}")]
    Provider { code: String, message: String },

    #[error("{operation} returned an unusable response (HTTP {status}): {detail}")]
    MalformedResponse {
        operation: &'static str,
        status: u16,
        detail: String,
    },

    #[error("{operation} ended in status {status}, expected DONE")]
    State {
        operation: &'static str,
        status: String,
    },

    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl TossError {
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!("request validation failed - code: {}, message: {}", code, message);
        Self::Validation { code, message }
    }

    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Provider { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn has_provider_code(&self, code: &str) -> bool {
        self.provider_code() == Some(code)
    }

    pub fn is_already_canceled(&self) -> bool {
        self.has_provider_code(ALREADY_CANCELED_PAYMENT)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
