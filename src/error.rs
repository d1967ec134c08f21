use std::path::PathBuf;

use thiserror::Error;

/// Exit code for runtime failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an unrecognized argument shape, same as clap uses
pub const EXIT_USAGE: i32 = 2;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Required file (profile store or session file) is missing
    #[error("not found: {what} does not exist at '{}'", path.display())]
    NotFound { what: &'static str, path: PathBuf },
    /// Profile store content is not a mapping of account profiles
    #[error("format error: cannot parse '{}': {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Account name missing from the profile store
    #[error("unknown account: '{0}'")]
    UnknownAccount(String),
    /// Repository identifier is not of the form owner/name
    #[error("malformed repository identifier: '{0}' (expected owner/name)")]
    MalformedIdentifier(String),
    /// Git exited unsuccessfully or could not be started
    #[error("external command failed: `{command}`: {detail}")]
    ExternalCommand { command: String, detail: String },
    /// Arguments do not match any known command
    #[error("{0}")]
    Usage(String),
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Home directory could not be determined
    #[error("failed to find the home directory")]
    HomeDir,
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
