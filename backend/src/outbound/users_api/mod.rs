//! Users directory outbound adapter.
//!
//! A thin reqwest implementation of the `UserDirectory` port against a
//! json-server style `/users` collection.

mod dto;
mod http_source;

pub use http_source::{UsersApiBuildError, UsersApiHttpSource};
