//! User accounts and the credential directory.
//!
//! The [`Directory`] is the only place a password lives; an [`Account`] is a
//! handle that reads and writes its password through the directory. Passwords
//! are stored and compared as plaintext, which is only acceptable because the
//! store is an in-memory teaching exercise.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::StoreError;

/// Mapping from username to password, authoritative for login checks.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: HashMap<String, String>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user's password.
    pub fn insert(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.users.insert(username.into(), password.into());
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn password(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    /// True iff `username` is present and mapped to exactly `password`.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.password(username) == Some(password)
    }

    fn set_password(&mut self, username: &str, password: String) -> Result<(), StoreError> {
        let slot = self
            .users
            .get_mut(username)
            .ok_or_else(|| StoreError::UnknownUser { username: username.to_string() })?;
        *slot = password;
        Ok(())
    }
}

impl<U, P> FromIterator<(U, P)> for Directory
where
    U: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (U, P)>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for (username, password) in iter {
            directory.insert(username, password);
        }
        directory
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
}

impl Account {
    pub fn authenticate(username: &str, password: &str, directory: &Directory) -> bool {
        directory.authenticate(username, password)
    }

    /// Check credentials and hand back the matching account.
    pub fn login(
        username: &str,
        password: &str,
        directory: &Directory,
    ) -> Result<Self, StoreError> {
        if !Self::authenticate(username, password, directory) {
            warn!(username, "login failed");
            return Err(StoreError::InvalidCredentials);
        }

        info!(username, "login succeeded");
        Ok(Self { username: username.to_string() })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current password as recorded in `directory`.
    pub fn password<'d>(&self, directory: &'d Directory) -> Option<&'d str> {
        directory.password(&self.username)
    }

    pub fn update_password(
        &self,
        directory: &mut Directory,
        new_password: impl Into<String>,
    ) -> Result<(), StoreError> {
        directory.set_password(&self.username, new_password.into())?;
        info!(username = %self.username, "password updated");
        Ok(())
    }
}
