use clap::Parser;
use proxmox_cli::cli::{self, CliArgs};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    cli::init_tracing(args.log_level());
    cli::run(args).await
}
