//! Ports at the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`) are what inbound adapters
//! call; the driven port (`UserRepository`) is what outbound adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
