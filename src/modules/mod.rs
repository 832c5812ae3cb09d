//! Feature modules, one directory per resource.
//!
//! Each module follows the same layout: `model.rs` (DTOs and database
//! structs), `service.rs` (persistence), `controller.rs` (handlers) and
//! `router.rs` (route registration).

pub mod auth;
pub mod courses;
pub mod users;
