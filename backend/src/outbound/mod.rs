//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **users_api**: reqwest-backed `UserDirectory` over a `/users` REST
//!   collection.
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no business logic.

pub mod users_api;
