//! Inbound adapters translating external requests into domain port calls.
//!
//! HTTP is the only transport.

pub mod http;
