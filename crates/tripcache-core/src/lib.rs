//! tripcache-core - client-side data layer for the trip planner.
//!
//! Two components with real invariants live here:
//!
//! - the **reference data cache** ([`cache`]): fetches the planner's static
//!   datasets concurrently, degrades optional ones to fixed fallbacks, and
//!   memoizes the merged snapshot for the life of the process;
//! - the **cart pricing engine** ([`cart`]): owns the trip's line items and
//!   derives totals and the per-section breakdown on demand.
//!
//! Everything else is boundary plumbing: [`source`] fetches one dataset at
//! a time, [`models`] describes the records, and [`config`] points the
//! client at a dataset host.
//!
//! The two components only meet through the snapshot's pricing metadata,
//! which seeds the cart's currency, tax rate and service fee:
//!
//! ```no_run
//! use std::sync::Arc;
//! use tripcache_core::{Cart, DataPackCache, HttpSource};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let source = Arc::new(HttpSource::new("https://planner.example")?);
//! let cache = DataPackCache::new(source);
//!
//! let pack = cache.load().await?;
//! let mut cart = Cart::new();
//! cart.apply_meta(&pack.meta);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cart;
pub mod config;
pub mod models;
pub mod source;

pub use cache::{DataPackCache, LoadError, LoadState, LoadStatus};
pub use cart::{Cart, CartItem, MetaValue, Section, SectionTotals, Totals};
pub use config::Config;
pub use models::{Adventure, DataPack, PricingMeta, PricingUnit};
pub use source::{Dataset, DatasetSource, FetchPolicy, HttpSource, SourceError};
