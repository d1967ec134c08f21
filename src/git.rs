use std::process::{Command, ExitStatus, Output};

use colored::Colorize;
use log::debug;

use crate::error::AppError;

/// Git operations performed on the user's behalf
pub trait Git {
    /// Sets the global user.email
    fn set_global_email(&mut self, email: &str) -> Result<(), AppError>;

    /// Clones `url` into the current directory
    fn clone_repo(&mut self, url: &str) -> Result<(), AppError>;
}

/// Runs the real `git` binary
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    fn command(args: &[&str]) -> (Command, String) {
        let display = format!("git {}", args.join(" "));
        println!("{} {}", "running command =>".blue(), display);
        debug!("spawning {args:?}");

        let mut command = Command::new("git");
        command.args(args);
        (command, display)
    }
}

fn spawn_failed(command: &str, err: std::io::Error) -> AppError {
    AppError::ExternalCommand {
        command: command.to_string(),
        detail: err.to_string(),
    }
}

impl Git for SystemGit {
    fn set_global_email(&mut self, email: &str) -> Result<(), AppError> {
        let (mut command, display) = Self::command(&["config", "--global", "user.email", email]);
        let git_command_output: Output =
            command.output().map_err(|err| spawn_failed(&display, err))?;

        if !git_command_output.status.success() {
            return Err(AppError::ExternalCommand {
                command: display,
                detail: String::from_utf8_lossy(&git_command_output.stderr)
                    .trim()
                    .to_string(),
            });
        }

        Ok(())
    }

    fn clone_repo(&mut self, url: &str) -> Result<(), AppError> {
        let (mut command, display) = Self::command(&["clone", url]);
        let status: ExitStatus = command.status().map_err(|err| spawn_failed(&display, err))?;

        if !status.success() {
            return Err(AppError::ExternalCommand {
                command: display,
                detail: status.to_string(),
            });
        }

        Ok(())
    }
}
