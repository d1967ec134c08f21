use colored::Colorize;
use log::info;

use crate::{
    cli::Action,
    error::AppError,
    git::Git,
    profile::ProfileStore,
    resolver::resolve,
    storage::{load_profiles, ConfigPaths, SessionState},
};

/// Runs `action` against the files in `paths`
pub fn execute(action: &Action, paths: &ConfigPaths, git: &mut dyn Git) -> Result<(), AppError> {
    let session = SessionState::new(paths);

    match action {
        Action::Info => {
            println!("{}", session.get_active()?);
            Ok(())
        }
        Action::Switch { account } => {
            let store = load_profiles(paths)?;
            switch_account(&store, &session, git, account)
        }
        Action::SwitchAndClone { account, repo } => {
            let store = load_profiles(paths)?;
            switch_and_clone(&store, &session, git, account, repo)
        }
    }
}

/// Records `account` as active and points the global git identity at it
///
/// Nothing is written when the account is unknown.
pub fn switch_account(
    store: &ProfileStore,
    session: &SessionState,
    git: &mut dyn Git,
    account: &str,
) -> Result<(), AppError> {
    let profile = store.get(account)?;
    session.set_active(account)?;
    git.set_global_email(&profile.email)?;
    info!("switched to '{account}' <{}>", profile.email);
    println!("{} {}", "switched to account:".green(), account);
    Ok(())
}

/// Switches to `account`, then clones `repo` using its URL prefix
///
/// The URL is resolved before switching, so a malformed identifier leaves the
/// session and git config untouched. The session stays switched if the clone
/// fails.
pub fn switch_and_clone(
    store: &ProfileStore,
    session: &SessionState,
    git: &mut dyn Git,
    account: &str,
    repo: &str,
) -> Result<(), AppError> {
    let url = resolve(store, account, repo)?;
    switch_account(store, session, git, account)?;
    println!("{}", url);
    git.clone_repo(&url)
}
