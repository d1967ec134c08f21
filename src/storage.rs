use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{error::AppError, profile::ProfileStore};

/// Directory under the home directory holding both files
const DEFAULT_CONFIG_DIR: &str = ".ssh";
/// Account profiles file
const PROFILES_FILE: &str = "accountswitcherconfig.json";
/// Currently active account file
const SESSION_FILE: &str = "accountswitcherconfig.txt";

/// Locations of the profile store and the session file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub profiles: PathBuf,
    pub session: PathBuf,
}

impl ConfigPaths {
    /// Both files live side by side in `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            profiles: dir.join(PROFILES_FILE),
            session: dir.join(SESSION_FILE),
        }
    }

    /// Uses `dir` when given, otherwise `~/.ssh`
    ///
    /// # Arguments
    /// * `dir` - Override from `--config-dir` or `ACCOUNTSWITCHER_DIR`
    pub fn resolve(dir: Option<&Path>) -> Result<Self, AppError> {
        let paths = match dir {
            Some(dir) => Self::in_dir(dir),
            None => {
                let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDir)?;
                Self::in_dir(&home_dir.join(DEFAULT_CONFIG_DIR))
            }
        };
        debug!(
            "profiles at {}, session at {}",
            paths.profiles.display(),
            paths.session.display()
        );
        Ok(paths)
    }
}

/// Reads a file, mapping a missing file to `AppError::NotFound`
fn read_required(path: &Path, what: &'static str) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::NotFound {
            what,
            path: path.to_path_buf(),
        },
        _ => AppError::Io(err),
    })
}

/// Loads account profiles from the JSON file
pub fn load_profiles(paths: &ConfigPaths) -> Result<ProfileStore, AppError> {
    let file_contents: String = read_required(&paths.profiles, "profile store")?;
    let store: ProfileStore =
        serde_json::from_str(&file_contents).map_err(|source| AppError::Format {
            path: paths.profiles.clone(),
            source,
        })?;
    debug!("loaded {} account profile(s)", store.len());
    Ok(store)
}

/// Persisted marker of the currently active account
#[derive(Debug, Clone)]
pub struct SessionState {
    path: PathBuf,
}

impl SessionState {
    /// Session state backed by the session file in `paths`
    pub fn new(paths: &ConfigPaths) -> Self {
        Self {
            path: paths.session.clone(),
        }
    }

    /// Replaces the stored account name with `account`, trimmed
    pub fn set_active(&self, account: &str) -> Result<(), AppError> {
        let account = account.trim();
        fs::write(&self.path, account)?;
        debug!("active account set to '{account}'");
        Ok(())
    }

    /// Returns the stored account name, trimmed
    pub fn get_active(&self) -> Result<String, AppError> {
        let contents = read_required(&self.path, "session file")?;
        Ok(contents.trim().to_string())
    }
}
