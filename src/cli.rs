use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "teeny", about = "Turn a link into a teeny short link")]
pub struct Cli {
    /// Path to config file (default: <config dir>/teeny/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Prompt for a link and an alias, then create the short link
    Link(LinkArgs),
    /// Check whether an alias is still free
    Check {
        /// Alias (slug) to look up
        alias: String,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct LinkArgs {
    /// Do not offer to open the short link after creating it
    #[arg(long)]
    pub no_open: bool,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Link(LinkArgs::default()))
    }
}
