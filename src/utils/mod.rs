//! Shared utilities used throughout the API.
//!
//! - [`errors`]: Application error type and response mapping
//! - [`jwt`]: Access token creation and verification
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Custom serde deserialization helpers

pub mod errors;
pub mod jwt;
pub mod password;
pub mod serde;
