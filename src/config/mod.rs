//! Configuration modules for the Coursedeck API.
//!
//! Each submodule covers one aspect of configuration. Everything is loaded
//! from environment variables once at startup and threaded through the
//! application state, never re-read per request.
//!
//! # Modules
//!
//! - [`cors`]: allowed origins for cross-origin requests
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token signing secret and expiry
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: Postgres connection string (required)
//! - `JWT_SECRET`: HS256 signing secret (required)
//! - `JWT_ACCESS_EXPIRY`: access token lifetime in seconds (default `3600`)
//! - `CORS_ALLOWED_ORIGINS`: comma-separated origins (default
//!   `http://localhost:3000`)
//! - `PORT`: listen port (default `3333`)

pub mod cors;
pub mod database;
pub mod jwt;
