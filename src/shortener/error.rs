use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("link service endpoint is not a usable base URL: {endpoint}")]
    InvalidEndpoint { endpoint: String },
    #[error("link service unreachable: {details}")]
    Transport { details: String },
    #[error("link service answered with HTTP {status}")]
    Status { status: u32 },
    #[error("link service sent an unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode the link service request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ServiceError {
    pub fn transport(source: impl std::fmt::Display) -> Self {
        Self::Transport {
            details: source.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { .. } => "SERVICE_INVALID_ENDPOINT",
            Self::Transport { .. } => "SERVICE_UNREACHABLE",
            Self::Status { .. } => "SERVICE_HTTP_STATUS",
            Self::Decode(_) => "SERVICE_BAD_RESPONSE",
            Self::Encode(_) => "SERVICE_BAD_REQUEST",
        }
    }
}
