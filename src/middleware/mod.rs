//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: bearer token verification exposing the caller's claims
//! - [`role`]: role checks layered on top of authentication
//!
//! # Request Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token and extracts the claims,
//!    rejecting with 401 on any failure
//! 3. For gated routes, [`role::RequireManager`] checks the role claim,
//!    rejecting with 403 when the caller's role is not allowed
//! 4. Handler executes
//!
//! The two stages always run in that order: role extractors call the auth
//! extractor internally, so an unauthenticated request never sees a 403.

pub mod auth;
pub mod role;
