use std::{
    cell::RefCell,
    collections::{HashSet, VecDeque},
    env, io,
    sync::{Mutex, MutexGuard},
};

use anyhow::{bail, Result};

use crate::{
    domain::link::LinkSubmission,
    infra::contracts::{ClipboardSink, ExternalOpener},
    shortener::{AliasAvailability, CreateOutcome, LinkService, ServiceError},
    usecases::contracts::{HostUi, TextRequest, Validation},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const TEENY_ENV_VARS: [&str; 3] = ["TEENY_BASE_URL", "TEENY_ENDPOINT_URL", "TEENY_SECRET_KEY"];

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// Runs `f` with the TEENY_* overrides unset, restoring them afterwards.
pub fn without_teeny_env<T>(f: impl FnOnce() -> T) -> T {
    let _guard = env_lock();
    let saved: Vec<_> = TEENY_ENV_VARS
        .iter()
        .map(|key| (*key, env::var_os(key)))
        .collect();

    for key in TEENY_ENV_VARS {
        env::remove_var(key);
    }

    let result = f();

    for (key, value) in saved {
        if let Some(value) = value {
            env::set_var(key, value);
        }
    }

    result
}

/// Plays back typed lines; `None` dismisses the current prompt.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    inputs: VecDeque<Option<String>>,
    choices: VecDeque<Option<String>>,
    pub requests: Vec<String>,
    pub inline_errors: Vec<String>,
    pub notifications: Vec<(String, Vec<String>)>,
    fail_notify: bool,
}

impl ScriptedUi {
    pub fn new(inputs: Vec<Option<&str>>) -> Self {
        Self {
            inputs: inputs
                .into_iter()
                .map(|item| item.map(|value| value.to_owned()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing_notifications(mut self) -> Self {
        self.fail_notify = true;
        self
    }

    pub fn choosing(mut self, choice: Option<&str>) -> Self {
        self.choices.push_back(choice.map(ToOwned::to_owned));
        self
    }
}

impl HostUi for ScriptedUi {
    fn request_text(
        &mut self,
        request: &TextRequest<'_>,
        validator: &mut dyn FnMut(&str) -> Validation,
    ) -> io::Result<Option<String>> {
        self.requests.push(request.prompt.to_owned());

        loop {
            let Some(value) = self.inputs.pop_front().flatten() else {
                return Ok(None);
            };

            match validator(&value) {
                Some(message) => self.inline_errors.push(message),
                None => return Ok(Some(value)),
            }
        }
    }

    fn notify(&mut self, message: &str, actions: &[&str]) -> io::Result<Option<String>> {
        if self.fail_notify {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"));
        }

        self.notifications.push((
            message.to_owned(),
            actions.iter().map(|action| (*action).to_owned()).collect(),
        ));
        Ok(self.choices.pop_front().flatten())
    }
}

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            bail!("clipboard unavailable");
        }
        self.writes.push(text.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ScriptedService {
    used: HashSet<String>,
    failing_checks: bool,
    create_replies: VecDeque<Result<CreateOutcome, ServiceError>>,
    pub checked: Vec<String>,
    pub created: Vec<LinkSubmission>,
}

impl ScriptedService {
    pub fn with_used(mut self, aliases: &[&str]) -> Self {
        self.used
            .extend(aliases.iter().map(|alias| (*alias).to_owned()));
        self
    }

    pub fn failing_checks(mut self) -> Self {
        self.failing_checks = true;
        self
    }

    pub fn creating(mut self, reply: Result<CreateOutcome, ServiceError>) -> Self {
        self.create_replies.push_back(reply);
        self
    }
}

impl LinkService for ScriptedService {
    fn check_alias(&mut self, alias: &str) -> Result<AliasAvailability, ServiceError> {
        self.checked.push(alias.to_owned());

        if self.failing_checks {
            return Err(ServiceError::transport("connection refused"));
        }

        Ok(if self.used.contains(alias) {
            AliasAvailability::InUse
        } else {
            AliasAvailability::Available
        })
    }

    fn create_link(&mut self, submission: &LinkSubmission) -> Result<CreateOutcome, ServiceError> {
        self.created.push(submission.clone());
        self.create_replies
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected create-slug call for {}", submission.alias))
    }
}
