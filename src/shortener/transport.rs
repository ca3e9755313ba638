//! Blocking HTTP over libcurl (via the `curl` crate).

use std::time::Duration;

use curl::easy::{Easy, List};

use crate::{infra::config::HttpConfig, shortener::ServiceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport {
    fn get(&mut self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, ServiceError>;
    fn post_json(
        &mut self,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
    ) -> Result<HttpResponse, ServiceError>;
}

/// One `Easy` handle per request; calls run on the current thread.
/// Redirects are not followed, a 3xx comes back as a plain response.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl CurlTransport {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    fn prepare(&self, url: &str, headers: &[(&str, &str)]) -> Result<Easy, curl::Error> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        let mut list = List::new();
        for line in header_lines(headers) {
            list.append(&line)?;
        }
        easy.http_headers(list)?;

        Ok(easy)
    }

    fn send_get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, curl::Error> {
        let mut easy = self.prepare(url, headers)?;
        easy.get(true)?;
        Self::perform(easy)
    }

    fn send_post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
    ) -> Result<HttpResponse, curl::Error> {
        let mut easy = self.prepare(url, headers)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        Self::perform(easy)
    }

    fn perform(mut easy: Easy) -> Result<HttpResponse, curl::Error> {
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for CurlTransport {
    fn get(&mut self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, ServiceError> {
        self.send_get(url, headers).map_err(ServiceError::transport)
    }

    fn post_json(
        &mut self,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
    ) -> Result<HttpResponse, ServiceError> {
        self.send_post(url, headers, body)
            .map_err(ServiceError::transport)
    }
}

fn header_lines(headers: &[(&str, &str)]) -> Vec<String> {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name.trim(), value.trim()))
        .collect()
}
