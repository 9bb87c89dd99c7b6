//! Domain types, ports and services.
//!
//! Purpose: hold everything that does not know about HTTP or SQL. Inbound
//! adapters call the driving ports, outbound adapters implement the driven
//! port, and `UserService` sits in between.
//!
//! Public surface:
//! - `User`, `UserId`, `UserDetails`: the user record.
//! - `Lookup`: found / not-found outcome of keyed operations.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod lookup;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::lookup::Lookup;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDetails, UserId};
pub use self::user_service::UserService;
