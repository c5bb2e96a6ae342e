//! Command-line front end: argument parsing, logging setup and dispatch.

pub mod commands;
pub mod display;

use crate::{ProxmoxClient, ProxmoxResult};
use clap::{ArgAction, Parser};
use commands::Commands;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "proxmox-cli",
    version,
    about = "A command-line client for the Proxmox VE API",
    long_about = "proxmox-cli logs in to a Proxmox VE server once, stores the session in \
                  ~/.proxmox/session and uses it for node, VM, storage and cluster commands."
)]
pub struct CliArgs {
    /// Trust SSL certificates (skip certificate validation).
    /// `login` and `validate` also accept it after the subcommand.
    #[arg(short = 't', long = "trust")]
    pub trust: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Location of the session file
    #[arg(long, env = "PROXMOX_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "info",
            _ => "debug",
        }
    }

    /// Whether certificate validation is skipped, from either position of `-t`.
    pub fn accept_invalid_certs(&self) -> bool {
        self.trust || self.command.trusts_invalid_certs()
    }

    fn client(&self) -> ProxmoxResult<ProxmoxClient> {
        let mut builder =
            ProxmoxClient::builder().accept_invalid_certs(self.accept_invalid_certs());
        if let Some(path) = &self.session_file {
            builder = builder.session_path(path);
        }
        builder.build()
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Executes the parsed command line and maps the outcome to an exit code.
pub async fn run(args: CliArgs) -> ExitCode {
    let client = match args.client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize client");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.command.execute(&client).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
