//! PostgreSQL persistence via Diesel.
//!
//! - `DieselUserRepository` implements the `UserRepository` port.
//! - Row structs (`models`) and table definitions (`schema`) stay private;
//!   only domain types cross the module boundary.
//! - Connections come from a `bb8` pool of `diesel-async` connections.
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::connect(PoolConfig::new("postgres://localhost/users")).await?;
//! let repository = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
