//! Link service integration layer: remote API client and HTTP transport.

mod client;
mod error;
mod transport;
mod wire;

pub use client::{AliasAvailability, CreateOutcome, LinkService, ShortenerClient};
pub use error::ServiceError;
pub use transport::CurlTransport;

/// Returns the shortener module name for smoke checks.
pub fn module_name() -> &'static str {
    "shortener"
}
