#![deny(unsafe_code)]

//! Craneboard HTTP API server.
//!
//! Exposes the job-board endpoints as JSON over HTTP: public job and
//! technology listings, and the identity-scoped company, job management,
//! and skill registration routes. Identity arrives as a trusted header
//! from the deployment's auth layer; see [`identity`].

/// API error type and HTTP mapping.
pub mod error;
/// Caller identity extraction.
pub mod identity;
/// Route handlers.
pub mod routes;
/// Router assembly and the server loop.
pub mod server;

pub use error::ApiError;
pub use identity::CurrentUser;
pub use server::{ApiState, ShutdownSignal, router, serve};
