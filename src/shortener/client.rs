use url::Url;

use crate::{
    domain::link::LinkSubmission,
    infra::config::ServiceConfig,
    shortener::{
        transport::{HttpResponse, HttpTransport},
        wire::{CreateSlugRequest, CreateSlugResponse, SlugCheckResponse},
        ServiceError,
    },
};

const SECRET_HEADER: &str = "secret-key";
const SLUG_CHECK_PATH: &str = "slug-check";
const CREATE_SLUG_PATH: &str = "create-slug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasAvailability {
    Available,
    InUse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Rejected,
}

pub trait LinkService {
    fn check_alias(&mut self, alias: &str) -> Result<AliasAvailability, ServiceError>;
    fn create_link(&mut self, submission: &LinkSubmission) -> Result<CreateOutcome, ServiceError>;
}

pub struct ShortenerClient<T> {
    transport: T,
    endpoint: Url,
    secret_key: String,
}

impl<T> std::fmt::Debug for ShortenerClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortenerClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl<T: HttpTransport> ShortenerClient<T> {
    pub fn new(transport: T, config: &ServiceConfig) -> Result<Self, ServiceError> {
        let endpoint = Url::parse(&config.endpoint_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ServiceError::InvalidEndpoint {
                endpoint: config.endpoint_url.clone(),
            })?;

        Ok(Self {
            transport,
            endpoint,
            secret_key: config.secret_key.clone(),
        })
    }

    fn url_for(&self, path: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }
        url
    }

    fn slug_check_url(&self, alias: &str) -> Url {
        let mut url = self.url_for(SLUG_CHECK_PATH);
        url.query_pairs_mut().append_pair("slug", alias);
        url
    }
}

impl<T: HttpTransport> LinkService for ShortenerClient<T> {
    fn check_alias(&mut self, alias: &str) -> Result<AliasAvailability, ServiceError> {
        let url = self.slug_check_url(alias);
        tracing::debug!(path = url.path(), "checking alias availability");

        let response = self
            .transport
            .get(url.as_str(), &[(SECRET_HEADER, self.secret_key.as_str())])?;
        let body: SlugCheckResponse = decode(&response)?;

        Ok(if body.used {
            AliasAvailability::InUse
        } else {
            AliasAvailability::Available
        })
    }

    fn create_link(&mut self, submission: &LinkSubmission) -> Result<CreateOutcome, ServiceError> {
        let url = self.url_for(CREATE_SLUG_PATH);
        let payload = serde_json::to_vec(&CreateSlugRequest {
            slug: &submission.alias,
            url: &submission.url,
        })
        .map_err(ServiceError::Encode)?;
        tracing::debug!(path = url.path(), alias = %submission.alias, "creating short link");

        let response = self.transport.post_json(
            url.as_str(),
            &[
                (SECRET_HEADER, self.secret_key.as_str()),
                ("Content-Type", "application/json"),
            ],
            &payload,
        )?;
        let body: CreateSlugResponse = decode(&response)?;

        Ok(if body.success {
            CreateOutcome::Created
        } else {
            CreateOutcome::Rejected
        })
    }
}

fn decode<'a, D: serde::Deserialize<'a>>(response: &'a HttpResponse) -> Result<D, ServiceError> {
    if !response.is_success() {
        return Err(ServiceError::Status {
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(ServiceError::Decode)
}
