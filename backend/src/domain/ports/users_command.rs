//! Driving port for changing users.

use async_trait::async_trait;

use crate::domain::{Error, Lookup, User, UserDetails, UserId};

/// Write-side user use-cases.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user under a freshly allocated id.
    async fn create_user(&self, details: UserDetails) -> Result<User, Error>;

    /// Overwrite the details of an existing user.
    async fn update_user(&self, id: UserId, details: UserDetails) -> Result<Lookup<User>, Error>;

    /// Remove an existing user.
    async fn delete_user(&self, id: UserId) -> Result<Lookup<()>, Error>;
}
