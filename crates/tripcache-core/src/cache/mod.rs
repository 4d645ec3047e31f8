//! Reference data cache.
//!
//! This module provides `DataPackCache`, which assembles the merged
//! `DataPack` snapshot from the individual dataset retrievals exactly once
//! and shares it for the lifetime of the process. Optional datasets degrade
//! to fixed fallbacks; a missing required dataset fails the build without
//! poisoning the cache.

pub mod manager;

pub use manager::{DataPackCache, LoadError, LoadState, LoadStatus};
