mod cli;
mod commands;
mod error;
mod git;
mod profile;
mod resolver;
mod storage;

use clap::Parser;
use colored::Colorize;

use crate::{cli::Cli, error::AppError, git::SystemGit, storage::ConfigPaths};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(err.exit_code());
    }
}

/// Configures `env_logger`, letting `RUST_LOG` take precedence over `--log-level`
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let action = cli.action()?;
    let paths = ConfigPaths::resolve(cli.config_dir.as_deref())?;
    commands::execute(&action, &paths, &mut SystemGit)
}
