//! Outbound adapters implementing the `UserRepository` port.
//!
//! - **persistence**: PostgreSQL through Diesel.
//! - **memory**: process-local map for database-less runs and tests.

pub mod memory;
pub mod persistence;
