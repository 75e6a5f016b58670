//! # Bookshelf Gateway
//!
//! Talks to the catalog backend and keeps the client's snapshot fresh.
//!
//! ## Features
//!
//! - **CatalogGateway**: the seam between the front ends and the backend
//! - **ApiClient**: the `reqwest` implementation of that seam
//! - **CatalogSync**: runs a mutation, refetches what it invalidates, and
//!   turns failures into log lines and a report instead of errors

pub mod client;
pub mod error;
pub mod gateway;
pub mod sync;

pub use client::ApiClient;
pub use error::ClientError;
pub use gateway::CatalogGateway;
pub use sync::{CatalogSync, FetchFailure, MutationOutcome, SyncReport};
