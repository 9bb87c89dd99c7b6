//! Process-local user store.
//!
//! Used when no database URL is configured and by HTTP tests. Records live in
//! a `BTreeMap` so iteration order is ascending id, matching the SQL adapter.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserId};

/// `next_id` is `None` once the sequence has handed out `i64::MAX`.
#[derive(Debug)]
struct Table {
    rows: BTreeMap<UserId, UserDetails>,
    next_id: Option<i64>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

impl Table {
    fn allocate(&mut self) -> Result<UserId, UserPersistenceError> {
        let raw = self
            .next_id
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        self.next_id = raw.checked_add(1);
        Ok(UserId::new(raw))
    }

    /// Keep the sequence ahead of explicitly chosen ids.
    fn observe(&mut self, id: UserId) {
        if self.next_id.is_some_and(|next| id.get() >= next) {
            self.next_id = id.get().checked_add(1);
        }
    }
}

/// In-memory [`UserRepository`] with sequence-style id allocation.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Table>, UserPersistenceError> {
        self.table
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user table poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .map(|(id, details)| User::new(*id, details.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .get(&id)
            .map(|details| User::new(id, details.clone())))
    }

    async fn save(
        &self,
        id: Option<UserId>,
        details: &UserDetails,
    ) -> Result<User, UserPersistenceError> {
        let mut table = self.lock()?;
        let id = match id {
            Some(id) => {
                table.observe(id);
                id
            }
            None => table.allocate()?,
        };
        table.rows.insert(id, details.clone());
        Ok(User::new(id, details.clone()))
    }

    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.lock()?.rows.remove(&user.id());
        Ok(())
    }
}
