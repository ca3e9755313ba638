use serde::Deserialize;

use crate::infra::config::{AppConfig, HttpConfig, LogConfig, ServiceConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub service: Option<FileServiceConfig>,
    pub http: Option<FileHttpConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(service) = self.service {
            service.merge_into(&mut config.service);
        }

        if let Some(http) = self.http {
            http.merge_into(&mut config.http);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Deserialize, Default)]
pub struct FileServiceConfig {
    pub base_url: Option<String>,
    pub endpoint_url: Option<String>,
    pub secret_key: Option<String>,
}

impl FileServiceConfig {
    fn merge_into(self, config: &mut ServiceConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(endpoint_url) = self.endpoint_url {
            config.endpoint_url = endpoint_url;
        }

        if let Some(secret_key) = self.secret_key {
            config.secret_key = secret_key;
        }
    }
}

impl std::fmt::Debug for FileServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileServiceConfig")
            .field("base_url", &self.base_url)
            .field("endpoint_url", &self.endpoint_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileHttpConfig {
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}

impl FileHttpConfig {
    fn merge_into(self, config: &mut HttpConfig) {
        if let Some(timeout_ms) = self.connect_timeout_ms {
            config.connect_timeout_ms = timeout_ms;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
    }
}
