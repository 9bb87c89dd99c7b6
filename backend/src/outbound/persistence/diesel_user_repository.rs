//! PostgreSQL-backed [`UserRepository`].
//!
//! Each method checks out one pooled connection and issues a single
//! statement, so every operation is atomic at row level without an explicit
//! transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserDetailsChangeset, UserRow, UserRowWithId};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of the user store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, |message| UserPersistenceError::connection(message))
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        |message| UserPersistenceError::query(message),
        |message| UserPersistenceError::connection(message),
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn save(
        &self,
        id: Option<UserId>,
        details: &UserDetails,
    ) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: UserRow = match id {
            None => {
                diesel::insert_into(users::table)
                    .values(&NewUserRow::from(details))
                    .returning(UserRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
            // The sequence is not advanced for explicit ids; callers only pass
            // ids that the sequence already issued.
            Some(id) => {
                diesel::insert_into(users::table)
                    .values(&UserRowWithId::new(id, details))
                    .on_conflict(users::id)
                    .do_update()
                    .set(&UserDetailsChangeset::from(details))
                    .returning(UserRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
        }
        .map_err(diesel_error)?;

        Ok(row.into())
    }

    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(users::table.find(user.id().get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let err = pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_failure() {
        let err = diesel_error(diesel::result::Error::NotFound);
        assert_eq!(err, UserPersistenceError::query("record not found"));
    }

    #[rstest]
    fn rows_convert_into_users_with_nulls_preserved() {
        let row = UserRow {
            id: 5,
            first_name: Some("Dino".to_owned()),
            last_name: None,
            email: Some("dino@example.com".to_owned()),
        };

        let user = User::from(row);

        assert_eq!(user.id(), UserId::new(5));
        assert_eq!(user.details().first_name.as_deref(), Some("Dino"));
        assert_eq!(user.details().last_name, None);
    }

    #[rstest]
    fn insert_row_borrows_detail_fields() {
        let details = UserDetails::new("Dino", "Petrucci", "dino@example.com");
        let row = UserRowWithId::new(UserId::new(3), &details);
        assert_eq!(row.id, 3);
        assert_eq!(row.email, Some("dino@example.com"));
    }
}
