use tracing::{debug, info};

use super::network::SocialNetwork;
use crate::error::{Result, SocialError};
use crate::model::{Profile, User, UserId};

impl SocialNetwork {
    /// Registers a new user under a unique username.
    ///
    /// The username is matched case-sensitively against the directory and
    /// is immutable once taken. There is no deletion or rename.
    ///
    /// # Errors
    /// * `SocialError::DuplicateUsername` - the username is already taken
    pub fn register(&mut self, username: impl Into<String>, profile: Profile) -> Result<UserId> {
        let username = username.into();
        if self.username_index.contains_key(&username) {
            return Err(SocialError::DuplicateUsername(username));
        }

        let id = self.users.len() as UserId;
        info!(user = %username, id, "registered user");
        self.username_index.insert(username.clone(), id);
        self.users.push(User::new(username, profile));
        self.metrics.registrations += 1;
        Ok(id)
    }

    /// Checks a username/credential pair and returns the user's id.
    ///
    /// The credential compare is a plaintext placeholder; hashing and
    /// credential storage belong to the session layer.
    ///
    /// # Errors
    /// * `SocialError::InvalidCredentials` - unknown username or wrong
    ///   credential (not distinguished)
    pub fn authenticate(&mut self, username: &str, credential: &str) -> Result<UserId> {
        let id = self
            .resolve(username)
            .ok_or(SocialError::InvalidCredentials)?;
        if self.user(id)?.profile.credential != credential {
            return Err(SocialError::InvalidCredentials);
        }

        self.metrics.logins += 1;
        debug!(user = %username, "authenticated");
        Ok(id)
    }

    /// Resolves a username to a user id.
    ///
    /// # Errors
    /// * `SocialError::UserNotFound` - no such username
    pub fn lookup(&self, username: &str) -> Result<UserId> {
        self.resolve(username)
            .ok_or_else(|| SocialError::UserNotFound(username.to_string()))
    }

    /// The username of a registered user.
    pub fn username(&self, user: UserId) -> Result<&str> {
        Ok(self.user(user)?.username.as_str())
    }

    /// A user's profile fields.
    pub fn profile(&self, user: UserId) -> Result<&Profile> {
        Ok(&self.user(user)?.profile)
    }

    /// All usernames, in registration order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|user| user.username.as_str())
    }
}
