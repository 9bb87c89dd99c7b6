//! Explicit found / not-found outcome for keyed operations.

/// Result of an operation addressed at a single record.
///
/// Services hand this back instead of an `Option` so callers have to spell out
/// what an absent record means for them.
///
/// # Examples
/// ```
/// use user_service::domain::Lookup;
///
/// let hit: Lookup<u8> = Some(7).into();
/// assert_eq!(hit.map(|n| n * 2), Lookup::Found(14));
/// assert!(Lookup::<u8>::from(None).is_not_found());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Lookup<T> {
    /// The record exists; carries the operation's output.
    Found(T),
    /// No record has the requested key.
    NotFound,
}

impl<T> Lookup<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}
