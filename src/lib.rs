//! API client and automated test suite for the PetFriends pet-store service.
//!
//! The client wraps the service's REST endpoints behind a single shared HTTP
//! session and hands back `(status, parsed body)` pairs; the test suites under
//! `tests/` drive it against a mock server (default) or the live service
//! (`live-tests` feature).

pub mod api;
pub mod cmd;
pub mod config;
pub mod errors;
pub mod log;
