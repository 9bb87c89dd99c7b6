//! User record and its editable details.
//!
//! ## Invariants
//! - A [`User`]'s id is assigned by the store and never changes; the only way
//!   to alter a stored user is [`User::apply`], which replaces the details.
//! - Details are free text. Nothing here checks email shape or uniqueness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned primary key.
///
/// Serialises as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The three mutable fields of a user.
///
/// Absent JSON properties deserialise to `None` and are stored as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserDetails {
    /// Details with every field populated.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::UserDetails;
    ///
    /// let details = UserDetails::new("Dino", "Petrucci", "dino@example.com");
    /// assert_eq!(details.email.as_deref(), Some("dino@example.com"));
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }
}

/// A stored user.
///
/// JSON shape: `{"id":1,"firstName":"..","lastName":"..","email":".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    details: UserDetails,
}

impl User {
    /// Pair a store-issued id with its details.
    ///
    /// Only persistence adapters should call this; everything else receives
    /// users from the store.
    #[must_use]
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Replace first name, last name and email, keeping the id.
    pub fn apply(&mut self, details: UserDetails) {
        self.details = details;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn dino() -> User {
        User::new(
            UserId::new(7),
            UserDetails::new("Dino", "Petrucci", "dino@example.com"),
        )
    }

    #[rstest]
    fn serialises_flat_camel_case_json(dino: User) {
        let value = serde_json::to_value(&dino).expect("serialise user");
        assert_eq!(
            value,
            json!({
                "id": 7,
                "firstName": "Dino",
                "lastName": "Petrucci",
                "email": "dino@example.com"
            })
        );
    }

    #[rstest]
    fn apply_keeps_the_id(mut dino: User) {
        dino.apply(UserDetails::new("Donatello", "Petrucci", "don@example.com"));
        assert_eq!(dino.id(), UserId::new(7));
        assert_eq!(dino.details().first_name.as_deref(), Some("Donatello"));
        assert_eq!(dino.details().email.as_deref(), Some("don@example.com"));
    }

    #[rstest]
    fn missing_detail_fields_become_none() {
        let details: UserDetails =
            serde_json::from_value(json!({ "firstName": "Dino" })).expect("partial details");
        assert_eq!(details.first_name.as_deref(), Some("Dino"));
        assert_eq!(details.last_name, None);
        assert_eq!(details.email, None);
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case("-3", Some(-3))]
    #[case("abc", None)]
    fn user_id_parses_path_segments(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(raw.parse::<UserId>().ok().map(UserId::get), expected);
    }
}
