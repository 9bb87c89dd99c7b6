//! Diesel row structs. Internal to the persistence layer.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::{User, UserDetails, UserId};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::new(row.id),
            UserDetails {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
        )
    }
}

/// Insert without an id; the sequence fills it in.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Insert with an explicit id, used by upserts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct UserRowWithId<'a> {
    pub id: i64,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Changeset replacing all three detail columns.
///
/// `treat_none_as_null` so clearing a field writes `NULL` instead of skipping
/// the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserDetailsChangeset<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a UserDetails> for NewUserRow<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            first_name: details.first_name.as_deref(),
            last_name: details.last_name.as_deref(),
            email: details.email.as_deref(),
        }
    }
}

impl<'a> From<&'a UserDetails> for UserDetailsChangeset<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            first_name: details.first_name.as_deref(),
            last_name: details.last_name.as_deref(),
            email: details.email.as_deref(),
        }
    }
}

impl<'a> UserRowWithId<'a> {
    pub(crate) fn new(id: UserId, details: &'a UserDetails) -> Self {
        Self {
            id: id.get(),
            first_name: details.first_name.as_deref(),
            last_name: details.last_name.as_deref(),
            email: details.email.as_deref(),
        }
    }
}
