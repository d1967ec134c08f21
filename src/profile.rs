use std::collections::HashMap;

use serde::Deserialize;

use crate::error::AppError;

/// Account profile stored in the profile store
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    /// Git email address (user.email)
    pub email: String,
    /// Clone URL prefix, usually an SSH host alias such as `git@github-work`
    pub prefix: String,
}

/// Account name to profile mapping, read-only once loaded
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProfileStore {
    accounts: HashMap<String, AccountProfile>,
}

impl ProfileStore {
    /// Looks up a profile by account name
    ///
    /// # Arguments
    /// * `account` - Account name as given on the command line
    pub fn get(&self, account: &str) -> Result<&AccountProfile, AppError> {
        self.accounts
            .get(account)
            .ok_or_else(|| AppError::UnknownAccount(account.to_string()))
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }
}

impl FromIterator<(String, AccountProfile)> for ProfileStore {
    fn from_iter<I: IntoIterator<Item = (String, AccountProfile)>>(iter: I) -> Self {
        Self {
            accounts: iter.into_iter().collect(),
        }
    }
}
