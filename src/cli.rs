use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;

/// Accounts that can be switched to without cloning
pub const SWITCH_ACCOUNTS: [&str; 2] = ["personal", "work"];
/// Single argument that prints the active account
pub const INFO_COMMAND: &str = "info";

const USAGE: &str = "usage: accountswitcher <account> <owner/name> | personal | work | info";

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(name = "accountswitcher", version, about, long_about = None)]
pub struct Cli {
    /// Account to switch to, or `info`
    pub account: Option<String>,

    /// Repository to clone, as owner/name
    pub repo: Option<String>,

    /// Directory holding accountswitcherconfig.json and accountswitcherconfig.txt
    #[arg(long, value_name = "DIR", env = "ACCOUNTSWITCHER_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Command selected by the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch identity, then clone the repository with the account's prefix
    SwitchAndClone { account: String, repo: String },
    /// Switch identity only
    Switch { account: String },
    /// Print the active account
    Info,
}

impl Cli {
    /// Maps the positional arguments to an action
    pub fn action(&self) -> Result<Action, AppError> {
        match (self.account.as_deref(), self.repo.as_deref()) {
            (Some(account), Some(repo)) => Ok(Action::SwitchAndClone {
                account: account.to_string(),
                repo: repo.to_string(),
            }),
            (Some(INFO_COMMAND), None) => Ok(Action::Info),
            (Some(account), None) if SWITCH_ACCOUNTS.contains(&account) => Ok(Action::Switch {
                account: account.to_string(),
            }),
            (Some(other), None) => Err(AppError::Usage(format!(
                "unknown command '{other}'\n{USAGE}"
            ))),
            (None, _) => Err(AppError::Usage(USAGE.to_string())),
        }
    }
}
