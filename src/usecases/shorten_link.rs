use std::io;

use thiserror::Error;

use crate::{
    domain::{
        link::{short_url, LinkSubmission, ShortenResult},
        url_syntax::validate_url_syntax,
        workflow_state::{IllegalTransition, WorkflowState},
    },
    infra::{
        config::ServiceConfig,
        contracts::{ClipboardSink, ExternalOpener},
        secrets::scrub_secret,
    },
    shortener::{CreateOutcome, LinkService},
    usecases::{
        alias_check::{alias_verdict, EMPTY_ALIAS_MESSAGE},
        contracts::{HostUi, TextRequest, Validation},
    },
};

const TITLE: &str = "Teeny";
pub const OPEN_LINK_ACTION: &str = "Open Link";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid link";
pub const SUCCESS_MESSAGE: &str = "Teenified link successfully and copied to clipboard!";
pub const REJECTED_MESSAGE: &str = "The link service refused to create this teeny link.";

const URL_REQUEST: TextRequest<'static> = TextRequest {
    title: TITLE,
    prompt: "Enter a link to make it teeny",
    placeholder: "https://example.com",
};

const ALIAS_REQUEST: TextRequest<'static> = TextRequest {
    title: TITLE,
    prompt: "Enter the alias (slug) for the teenified link",
    placeholder: "example",
};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("terminal interaction failed: {0}")]
    Ui(#[from] io::Error),
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Cancelled,
    Done(ShortenResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowOptions {
    pub offer_open_link: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            offer_open_link: true,
        }
    }
}

/// Collaborators the workflow drives. Borrowed for one invocation.
pub struct WorkflowPorts<'a> {
    pub ui: &'a mut dyn HostUi,
    pub service: &'a mut dyn LinkService,
    pub clipboard: &'a mut dyn ClipboardSink,
    pub opener: &'a dyn ExternalOpener,
}

pub struct LinkShortenWorkflow<'a> {
    config: &'a ServiceConfig,
    options: WorkflowOptions,
    ports: WorkflowPorts<'a>,
    state: WorkflowState,
}

impl<'a> LinkShortenWorkflow<'a> {
    pub fn new(config: &'a ServiceConfig, options: WorkflowOptions, ports: WorkflowPorts<'a>) -> Self {
        Self {
            config,
            options,
            ports,
            state: WorkflowState::Idle,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Runs the prompt -> prompt -> create pipeline to a terminal state.
    pub fn run(&mut self) -> Result<WorkflowOutcome, WorkflowError> {
        self.advance(WorkflowState::AwaitingUrl)?;
        let Some(url) = self.prompt_for_url()? else {
            self.advance(WorkflowState::Cancelled)?;
            return Ok(WorkflowOutcome::Cancelled);
        };

        self.advance(WorkflowState::AwaitingAlias)?;
        let Some(alias) = self.prompt_for_alias(&url)? else {
            self.advance(WorkflowState::Cancelled)?;
            return Ok(WorkflowOutcome::Cancelled);
        };

        self.advance(WorkflowState::Creating)?;
        let result = self.create_link(&url, &alias);
        // Reporting failures happen after the service answered.
        self.advance(WorkflowState::Done)?;

        Ok(WorkflowOutcome::Done(result?))
    }

    pub fn prompt_for_url(&mut self) -> io::Result<Option<String>> {
        self.ports
            .ui
            .request_text(&URL_REQUEST, &mut url_verdict)
    }

    pub fn prompt_for_alias(&mut self, url: &str) -> io::Result<Option<String>> {
        tracing::debug!(url_len = url.len(), "prompting for alias");

        // Each check blocks until the service answers, so verdicts arrive in order.
        let service = &mut *self.ports.service;
        let secret_key = self.config.secret_key.as_str();

        let mut validator = |value: &str| -> Validation {
            if value.is_empty() {
                return Some(EMPTY_ALIAS_MESSAGE.to_owned());
            }

            alias_verdict(service.check_alias(value), secret_key)
        };

        self.ports.ui.request_text(&ALIAS_REQUEST, &mut validator)
    }

    pub fn create_link(&mut self, url: &str, alias: &str) -> io::Result<ShortenResult> {
        let submission = LinkSubmission::new(url, alias);
        let short_url = short_url(&self.config.base_url, alias);

        match self.ports.service.create_link(&submission) {
            Ok(CreateOutcome::Created) => {
                tracing::info!(alias, "short link created");
                self.announce_created(&short_url)?;
                Ok(ShortenResult::created(short_url))
            }
            Ok(CreateOutcome::Rejected) => {
                tracing::warn!(alias, "link service reported success=false");
                self.ports.ui.notify(REJECTED_MESSAGE, &[])?;
                Ok(ShortenResult::failed(short_url))
            }
            Err(error) => {
                tracing::warn!(alias, code = error.code(), "create-slug call failed");
                let details = scrub_secret(&error.to_string(), &self.config.secret_key);
                self.ports
                    .ui
                    .notify(&format!("Could not create the teeny link: {details}"), &[])?;
                Ok(ShortenResult::failed(short_url))
            }
        }
    }

    fn announce_created(&mut self, short_url: &str) -> io::Result<()> {
        let message = match self.ports.clipboard.write_text(short_url) {
            Ok(()) => SUCCESS_MESSAGE.to_owned(),
            Err(error) => {
                tracing::warn!(error = %error, "clipboard write failed");
                format!("Teenified link successfully! Clipboard unavailable, copy it from here: {short_url}")
            }
        };

        let actions: &[&str] = if self.options.offer_open_link {
            &[OPEN_LINK_ACTION]
        } else {
            &[]
        };

        let chosen = self.ports.ui.notify(&message, actions)?;
        if chosen.as_deref() == Some(OPEN_LINK_ACTION) {
            if let Err(error) = self.ports.opener.open(short_url) {
                tracing::warn!(error = %error, "opening short link failed");
                self.ports
                    .ui
                    .notify(&format!("Could not open {short_url} in the browser."), &[])?;
            }
        }

        Ok(())
    }

    fn advance(&mut self, next: WorkflowState) -> Result<(), IllegalTransition> {
        let previous = self.state;
        self.state = previous.transition_to(next)?;
        tracing::debug!(
            from = previous.as_label(),
            to = next.as_label(),
            "workflow transition"
        );
        Ok(())
    }
}

fn url_verdict(value: &str) -> Validation {
    if value.is_empty() || !validate_url_syntax(value) {
        return Some(INVALID_URL_MESSAGE.to_owned());
    }
    None
}
