#![deny(unsafe_code)]

//! Craneboard core — domain model and shared API surface.
//!
//! Holds everything both sides of the wire agree on: the domain records,
//! the request/response types, the pagination window calculator, and the
//! currency utilities. The API server (`craneboard-api`) and the typed
//! client ([`client::ApiClient`]) build on this crate.

/// Shared request/response types for the HTTP API.
pub mod api;
/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// Typed HTTP client for the API.
pub mod client;
/// Currency formatting and input masking for salary fields.
pub mod currency;
/// Domain records and enums.
pub mod model;
/// Pagination window calculation.
pub mod pagination;
/// URL slug generation.
pub mod slug;

pub use client::ApiClient;
pub use model::{Company, CompanySize, Job, JobLevel, Technology, UserSkill};
pub use pagination::{PageItem, PageWindow, window};
