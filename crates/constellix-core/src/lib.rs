//! # constellix-core
//!
//! Core types and utilities for working with the Constellix DNS v4 API.
//!
//! This crate provides foundational types, error handling, request signing and
//! HTTP client utilities for building Constellix API integrations.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code mapping
//! - [`config`] - Configuration structures for Constellix clients
//! - [`auth`] - HMAC bearer-token request signing
//! - [`client`] - HTTP client utilities, retry logic, and response envelopes
//! - [`query`] - Query parameter builder for list endpoints
//! - [`pagination`] - Page wrapper for paginated list responses

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod query;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pagination::{LengthAwareFactory, Paginator, PaginatorFactory};
