use serde::{Deserialize, Serialize};

use crate::infra::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub service: ServiceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// Link service coordinates: where short links live, where the API lives,
/// and the shared secret sent with every call.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub endpoint_url: String,
    pub secret_key: String,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("service.base_url", &self.base_url),
            ("service.endpoint_url", &self.endpoint_url),
            ("service.secret_key", &self.secret_key),
        ];

        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(AppError::ConfigInvalid { field }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base_url", &self.base_url)
            .field("endpoint_url", &self.endpoint_url)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 5_000,
            request_timeout_ms: 15_000,
        }
    }
}
