use crate::{error::AppError, profile::ProfileStore};

/// Separator between owner and repository name
const SEPARATOR: char = '/';

/// `owner/name` shorthand for a remote repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryIdentifier<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

impl<'a> RepositoryIdentifier<'a> {
    /// Splits `identifier` on its single `/`, both halves non-empty
    pub fn parse(identifier: &'a str) -> Result<Self, AppError> {
        let malformed = || AppError::MalformedIdentifier(identifier.to_string());

        let (owner, name) = identifier.split_once(SEPARATOR).ok_or_else(malformed)?;
        if owner.is_empty() || name.is_empty() || name.contains(SEPARATOR) {
            return Err(malformed());
        }
        Ok(Self { owner, name })
    }
}

/// Builds the clone URL for `identifier` under `account`'s prefix
///
/// # Arguments
/// * `store` - Loaded account profiles
/// * `account` - Account name to take the prefix from
/// * `identifier` - Repository in `owner/name` form
pub fn resolve(store: &ProfileStore, account: &str, identifier: &str) -> Result<String, AppError> {
    let profile = store.get(account)?;
    let repo = RepositoryIdentifier::parse(identifier)?;
    Ok(format!("{}:{}/{}.git", profile.prefix, repo.owner, repo.name))
}
