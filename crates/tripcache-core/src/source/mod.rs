//! Dataset Source boundary.
//!
//! This module names the reference datasets, carries the required/optional
//! retrieval policy table, and provides `HttpSource` for fetching the
//! planner's static `/data/*.json` files.

pub mod client;
pub mod dataset;
pub mod error;

pub use client::{DatasetSource, HttpSource};
pub use dataset::{Dataset, FetchPolicy};
pub use error::SourceError;
