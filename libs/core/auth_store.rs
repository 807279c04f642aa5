use smarttodo_storage::StorageBox;
use thiserror::Error;

use crate::{
    document::{read_document, read_document_or_default, try_read_document, write_document},
    entities::{motivation::UserMotivation, user::StoredUser},
    utils,
};

pub const USER_KEY: &str = "@daily_motivation_user";
pub const USERS_KEY: &str = "@daily_motivation_users";
pub const USER_MOTIVATIONS_KEY: &str = "@daily_motivation_user_motivations";

pub type Result<T> = core::result::Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Something went wrong. Please try again.")]
    Storage(eyre::Error),
}

impl From<eyre::Error> for AuthError {
    fn from(value: eyre::Error) -> Self {
        Self::Storage(value)
    }
}

/// Local account simulation backed by the document storage.
///
/// Nothing here is secure: passwords are stored and compared in plaintext,
/// and every user's motivations live in one shared document filtered on read.
/// All writes are awaited.
pub struct AuthStore {
    storage: StorageBox,
    current_user: Option<StoredUser>,
}

impl AuthStore {
    /// Restore the logged in user, a missing or corrupt record means logged out
    pub async fn load(storage: StorageBox) -> Self {
        let current_user = read_document(&storage, USER_KEY).await;
        Self {
            storage,
            current_user,
        }
    }

    pub fn current_user(&self) -> Option<&StoredUser> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Every account ever created on this device
    pub async fn registry(&self) -> Vec<StoredUser> {
        read_document_or_default(&self.storage, USERS_KEY).await
    }

    /// Register a new account and log it in.
    ///
    /// The name and email are trimmed and the email lower-cased. Fails with
    /// [`AuthError::DuplicateEmail`] when the email is already registered,
    /// ignoring case, in which case nothing is written.
    pub async fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<StoredUser> {
        let mut users = self.registry().await;
        if users.iter().any(|u| u.has_email(email)) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = StoredUser {
            name: name.trim().to_owned(),
            email: email.trim().to_lowercase(),
            password: password.to_owned(),
        };
        tracing::debug!(email = %user.email, "sign up");

        users.push(user.clone());
        write_document(&self.storage, USERS_KEY, &users).await?;
        self.set_current_user(user.clone()).await?;
        Ok(user)
    }

    /// Log in with an email (ignoring case) and an exact password
    pub async fn login(&mut self, email: &str, password: &str) -> Result<StoredUser> {
        let user = self
            .registry()
            .await
            .into_iter()
            .find(|u| u.has_email(email) && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        tracing::debug!(email = %user.email, "login");

        self.set_current_user(user.clone()).await?;
        Ok(user)
    }

    /// Forget the current user, the registry is left untouched
    pub async fn logout(&mut self) -> Result<()> {
        self.storage.remove(USER_KEY.to_owned()).await?;
        self.current_user = None;
        Ok(())
    }

    /// Append a motivation note for `email`, the text is trimmed.
    ///
    /// The document is shared by every user, when it can't be read or
    /// decoded the call fails and nothing is written.
    pub async fn add_motivation(&self, text: &str, email: &str) -> Result<UserMotivation> {
        let mut all: Vec<UserMotivation> = try_read_document(&self.storage, USER_MOTIVATIONS_KEY)
            .await?
            .unwrap_or_default();

        let motivation = UserMotivation {
            id: utils::new_id("motivation"),
            text: text.trim().to_owned(),
            created_at: utils::unix_now_ms(),
            user_email: email.trim().to_lowercase(),
        };

        all.push(motivation.clone());
        write_document(&self.storage, USER_MOTIVATIONS_KEY, &all).await?;
        Ok(motivation)
    }

    /// Motivations of `email` (ignoring case), oldest first
    pub async fn motivations_for(&self, email: &str) -> Vec<UserMotivation> {
        let all: Vec<UserMotivation> =
            read_document_or_default(&self.storage, USER_MOTIVATIONS_KEY).await;
        all.into_iter().filter(|m| m.belongs_to(email)).collect()
    }

    async fn set_current_user(&mut self, user: StoredUser) -> eyre::Result<()> {
        write_document(&self.storage, USER_KEY, &user).await?;
        self.current_user = Some(user);
        Ok(())
    }
}
