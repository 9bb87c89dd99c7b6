//! Driving port for reading users.
//!
//! HTTP handlers depend on this trait rather than on a store so they can be
//! exercised against any implementation.

use async_trait::async_trait;

use crate::domain::{Error, Lookup, User, UserId};

/// Read-side user use-cases.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users in store order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user by id.
    async fn get_user(&self, id: UserId) -> Result<Lookup<User>, Error>;
}
