//! CLI for the ghspa redirect/resolve transform.

mod commands;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ghspa_core::config::{self, ShimConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_redirect, run_resolve, run_roundtrip, run_simulate};

/// Top-level CLI for ghspa.
#[derive(Debug, Parser)]
#[command(name = "ghspa")]
#[command(about = "ghspa: single-page app routing for static hosts", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/ghspa/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Hosting mode flags shared by the transform commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct HostingArgs {
    /// Site is served from the domain root (no repository prefix).
    #[arg(long)]
    pub user_pages: bool,
}

impl HostingArgs {
    fn apply(self, mut cfg: ShimConfig) -> ShimConfig {
        if self.user_pages {
            cfg.project_pages = false;
        }
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL the fallback document would navigate to.
    Redirect {
        /// Requested URL that the host answered with the fallback document.
        url: String,
        #[command(flatten)]
        hosting: HostingArgs,
    },

    /// Print the URL the real document would show after restoring its payload.
    Resolve {
        /// URL of the real document, carrying `p` / `q` in its query.
        url: String,
        #[command(flatten)]
        hosting: HostingArgs,
    },

    /// Run one page load and print the history call it makes.
    Simulate {
        /// Location of the loaded document.
        url: String,
        /// Document title; exactly "404" marks the fallback document.
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        hosting: HostingArgs,
    },

    /// Run a fallback load followed by the real load and compare the result.
    Roundtrip {
        /// Requested URL.
        url: String,
        #[command(flatten)]
        hosting: HostingArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<ShimConfig> {
    match path {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell, &mut Cli::command());
        }

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Redirect { url, hosting } => run_redirect(&url, &hosting.apply(cfg))?,
            CliCommand::Resolve { url, hosting } => run_resolve(&url, &hosting.apply(cfg))?,
            CliCommand::Simulate {
                url,
                title,
                hosting,
            } => run_simulate(&url, title.as_deref(), &hosting.apply(cfg))?,
            CliCommand::Roundtrip { url, hosting } => run_roundtrip(&url, &hosting.apply(cfg))?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
