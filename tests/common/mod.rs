//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod http_client;

pub use assertions::*;
pub use fixtures::*;
pub use http_client::*;
