use std::{path::Path, process::ExitCode};

use anyhow::Result;

use crate::{
    cli::{Cli, Command, LinkArgs},
    domain::{self, link::ShortenResult},
    infra::{
        self, clipboard::SystemClipboard, config::default_config_path, error::AppError,
        opener::SystemOpener,
    },
    shortener::{self, AliasAvailability},
    ui::{self, TerminalUi},
    usecases::{
        self,
        bootstrap::{self, compose_service},
        check_alias::check_alias,
        context::AppContext,
        shorten_link::{LinkShortenWorkflow, WorkflowOptions, WorkflowOutcome, WorkflowPorts},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Linked(ShortenResult),
    Cancelled,
    Alias(AliasAvailability),
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(
            self,
            Self::Linked(ShortenResult { success: false, .. })
                | Self::Alias(AliasAvailability::InUse)
        )
    }

    pub fn exit_code(self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub fn run(cli: Cli) -> Result<RunOutcome> {
    let context = match bootstrap::bootstrap(cli.config.as_deref()) {
        Ok(context) => context,
        Err(error) => {
            report_bootstrap_failure(&error, cli.config.as_deref());
            return Err(error.into());
        }
    };

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        shortener = shortener::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Link(args) => run_link(&context, &args),
        Command::Check { alias } => run_check(&context, &alias),
    }
}

fn run_link(context: &AppContext, args: &LinkArgs) -> Result<RunOutcome> {
    let mut service = compose_service(context)?;
    let mut terminal = TerminalUi::stdio();
    let mut clipboard = SystemClipboard::default();
    let opener = SystemOpener;

    let mut workflow = LinkShortenWorkflow::new(
        &context.config.service,
        WorkflowOptions {
            offer_open_link: !args.no_open,
        },
        WorkflowPorts {
            ui: &mut terminal,
            service: &mut service,
            clipboard: &mut clipboard,
            opener: &opener,
        },
    );

    match workflow.run()? {
        WorkflowOutcome::Cancelled => {
            tracing::info!("link workflow cancelled by user");
            Ok(RunOutcome::Cancelled)
        }
        WorkflowOutcome::Done(result) => {
            tracing::info!(
                success = result.success,
                short_url = %result.short_url,
                "link workflow finished"
            );
            Ok(RunOutcome::Linked(result))
        }
    }
}

fn run_check(context: &AppContext, alias: &str) -> Result<RunOutcome> {
    let mut service = compose_service(context)?;
    let availability = check_alias(&mut service, alias)?;

    println!("{}", availability_line(alias.trim(), availability));
    Ok(RunOutcome::Alias(availability))
}

fn availability_line(alias: &str, availability: AliasAvailability) -> String {
    match availability {
        AliasAvailability::Available => format!("{alias}: available"),
        AliasAvailability::InUse => format!("{alias}: in use"),
    }
}

fn report_bootstrap_failure(error: &AppError, config_path: Option<&Path>) {
    if let AppError::ConfigInvalid { field } = error {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(default_config_path);
        for line in config_guidance_lines(field, path.as_deref()) {
            eprintln!("{line}");
        }
    }
}

fn config_guidance_lines(field: &str, config_path: Option<&Path>) -> Vec<String> {
    let env_name = format!(
        "TEENY_{}",
        field.trim_start_matches("service.").to_ascii_uppercase()
    );
    let mut lines = vec![format!("teeny is not configured: {field} is empty.")];

    match config_path {
        Some(path) => lines.push(format!(
            "Set it in [service] of {} or export {env_name}.",
            path.display()
        )),
        None => lines.push(format!("Export {env_name} or pass --config <path>.")),
    }

    lines
}
