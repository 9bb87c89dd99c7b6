//! User use-cases over the [`UserRepository`] port.
//!
//! Each operation touches one record and makes no more than two store calls;
//! there is no transaction around the read-then-write of update and delete.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use super::{Error, Lookup, User, UserDetails, UserId};

/// Implements both driving ports on top of a user store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_service::domain::UserService;
/// use user_service::outbound::memory::InMemoryUserRepository;
///
/// let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
/// # let _ = service;
/// ```
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl UsersQuery for UserService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<Lookup<User>, Error> {
        self.find(id).await.map(Lookup::from)
    }
}

#[async_trait]
impl UsersCommand for UserService {
    async fn create_user(&self, details: UserDetails) -> Result<User, Error> {
        let user = self
            .repository
            .save(None, &details)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, details: UserDetails) -> Result<Lookup<User>, Error> {
        let Some(mut user) = self.find(id).await? else {
            debug!(user_id = %id, "update skipped: no such user");
            return Ok(Lookup::NotFound);
        };
        user.apply(details);
        let saved = self
            .repository
            .save(Some(user.id()), user.details())
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %saved.id(), "user updated");
        Ok(Lookup::Found(saved))
    }

    async fn delete_user(&self, id: UserId) -> Result<Lookup<()>, Error> {
        let Some(user) = self.find(id).await? else {
            debug!(user_id = %id, "delete skipped: no such user");
            return Ok(Lookup::NotFound);
        };
        self.repository
            .delete(&user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %id, "user deleted");
        Ok(Lookup::Found(()))
    }
}
