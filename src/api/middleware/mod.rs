//! Cross-cutting HTTP concerns.

pub mod error_handler;

pub use error_handler::ApiError;
