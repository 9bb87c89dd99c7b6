//! Driven port: durable storage of user records.
use async_trait::async_trait;

use crate::domain::{User, UserDetails, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user store adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Persistence capability for [`User`] records keyed by [`UserId`].
///
/// Single-record operations are expected to be atomic; nothing stronger is
/// assumed. Concurrent saves to one id resolve as last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in ascending id order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// The user with `id`, or `None` when nothing is stored under it.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert or update a user and return the stored record.
    ///
    /// With `id == None` the store allocates a fresh id. With `Some(id)` the
    /// record under that id is overwritten, or created if it is missing.
    async fn save(
        &self,
        id: Option<UserId>,
        details: &UserDetails,
    ) -> Result<User, UserPersistenceError>;

    /// Remove `user`. Deleting a record that is already gone is not an error.
    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError>;
}
