//! Single-flight assembly of the reference data snapshot.
//!
//! `DataPackCache` turns nine independent dataset retrievals into one
//! immutable `DataPack`. The first `load()` builds the snapshot; every
//! later call returns the same `Arc` without touching the source again.
//! Callers that arrive while a build is in flight await that build and
//! share its outcome, so no dataset is ever fetched twice for one build.

use std::sync::{Arc, Mutex, Weak};

use chrono::Utc;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{DataPack, PricingMeta};
use crate::source::{Dataset, DatasetSource, SourceError};

/// Failure to assemble the snapshot. Values are `Clone` because the same
/// outcome is handed to every caller awaiting the in-flight build.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// A required dataset could not be retrieved, or its payload could not
    /// be read as a record list.
    #[error("dataset `{dataset}` is unavailable")]
    DataUnavailable {
        dataset: Dataset,
        #[source]
        source: Arc<SourceError>,
    },
}

impl LoadError {
    fn unavailable(dataset: Dataset, source: SourceError) -> Self {
        LoadError::DataUnavailable {
            dataset,
            source: Arc::new(source),
        }
    }

    /// Which dataset made the build fail.
    pub fn dataset(&self) -> Dataset {
        match self {
            LoadError::DataUnavailable { dataset, .. } => *dataset,
        }
    }
}

/// Observable phase of the cache, for UI binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Status value for passive observation (loading indicators, error toasts).
/// Informational only; `load()` is the real contract.
#[derive(Debug, Clone)]
pub struct LoadStatus {
    pub state: LoadState,
    pub error: Option<LoadError>,
}

type BuildFuture = Shared<BoxFuture<'static, Result<Arc<DataPack>, LoadError>>>;

enum BuildState {
    Idle,
    InFlight(BuildFuture),
    Ready(Arc<DataPack>),
    Failed(LoadError),
}

/// Single-flight cache around a `DatasetSource`.
///
/// Hold one instance per process (or one per test); clones share the same
/// underlying build state.
#[derive(Clone)]
pub struct DataPackCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    source: Arc<dyn DatasetSource>,
    state: Mutex<BuildState>,
}

impl DataPackCache {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                source,
                state: Mutex::new(BuildState::Idle),
            }),
        }
    }

    /// Return the snapshot, building it on first use.
    ///
    /// At most one build is in flight at a time; concurrent callers await
    /// the same build and see the same result or failure. A failed build
    /// leaves the cache empty, so the next call starts fresh.
    pub async fn load(&self) -> Result<Arc<DataPack>, LoadError> {
        let build = {
            let mut state = self.inner.state.lock().expect("cache state lock poisoned");
            match &*state {
                BuildState::Ready(pack) => return Ok(Arc::clone(pack)),
                BuildState::InFlight(build) => build.clone(),
                BuildState::Idle | BuildState::Failed(_) => {
                    let build = Self::start_build(&self.inner);
                    *state = BuildState::InFlight(build.clone());
                    build
                }
            }
        };
        build.await
    }

    /// Peek at the snapshot without triggering a build.
    pub fn get(&self) -> Option<Arc<DataPack>> {
        match &*self.inner.state.lock().expect("cache state lock poisoned") {
            BuildState::Ready(pack) => Some(Arc::clone(pack)),
            _ => None,
        }
    }

    /// Current phase plus the last build error.
    pub fn status(&self) -> LoadStatus {
        match &*self.inner.state.lock().expect("cache state lock poisoned") {
            BuildState::Idle => LoadStatus {
                state: LoadState::Idle,
                error: None,
            },
            BuildState::InFlight(_) => LoadStatus {
                state: LoadState::Loading,
                error: None,
            },
            BuildState::Ready(_) => LoadStatus {
                state: LoadState::Ready,
                error: None,
            },
            BuildState::Failed(err) => LoadStatus {
                state: LoadState::Failed,
                error: Some(err.clone()),
            },
        }
    }

    fn start_build(inner: &Arc<CacheInner>) -> BuildFuture {
        let source = Arc::clone(&inner.source);
        // Weak so an abandoned in-flight build doesn't keep the cache alive.
        let weak: Weak<CacheInner> = Arc::downgrade(inner);
        async move {
            let result = build_pack(source.as_ref()).await.map(Arc::new);
            if let Some(inner) = weak.upgrade() {
                let mut state = inner.state.lock().expect("cache state lock poisoned");
                *state = match &result {
                    Ok(pack) => BuildState::Ready(Arc::clone(pack)),
                    Err(err) => BuildState::Failed(err.clone()),
                };
            }
            result
        }
        .boxed()
        .shared()
    }
}

async fn build_pack(source: &dyn DatasetSource) -> Result<DataPack, LoadError> {
    debug!("assembling data pack");

    // The retrievals are independent of each other; issue them together.
    let (locations, adventures, links, ferries, cabs, scooters, bicycles, islands, meta) = tokio::join!(
        source.fetch(Dataset::Locations),
        source.fetch(Dataset::Adventures),
        source.fetch(Dataset::LocationAdventures),
        source.fetch(Dataset::Ferries),
        source.fetch(Dataset::Cabs),
        source.fetch(Dataset::Scooters),
        source.fetch(Dataset::Bicycles),
        source.fetch(Dataset::Islands),
        source.fetch(Dataset::Meta),
    );

    let pack = DataPack {
        locations: required(Dataset::Locations, locations)?,
        adventures: required(Dataset::Adventures, adventures)?,
        location_adventures: optional(Dataset::LocationAdventures, links),
        ferries: required(Dataset::Ferries, ferries)?,
        cabs: required(Dataset::Cabs, cabs)?,
        scooters: required(Dataset::Scooters, scooters)?,
        bicycles: optional(Dataset::Bicycles, bicycles),
        islands: optional(Dataset::Islands, islands),
        meta: pricing_meta(meta),
        loaded_at: Utc::now(),
    };

    debug!(
        locations = pack.locations.len(),
        adventures = pack.adventures.len(),
        ferries = pack.ferries.len(),
        cabs = pack.cabs.len(),
        "data pack assembled"
    );
    Ok(pack)
}

/// Decode a required dataset. Retrieval failure, or a payload that cannot
/// be read as a record list, aborts the whole build.
fn required<T: DeserializeOwned>(
    dataset: Dataset,
    fetched: Result<Value, SourceError>,
) -> Result<Vec<T>, LoadError> {
    debug_assert!(dataset.is_required(), "{dataset} is not a required dataset");
    let value = fetched.map_err(|err| {
        warn!(dataset = %dataset, error = %err, "required dataset retrieval failed");
        LoadError::unavailable(dataset, err)
    })?;
    serde_json::from_value(value).map_err(|err| {
        warn!(dataset = %dataset, error = %err, "required dataset is not a record list");
        LoadError::unavailable(dataset, SourceError::Decode(err))
    })
}

/// Decode an optional dataset, degrading to an empty collection on any
/// retrieval failure or wrong-shaped payload.
fn optional<T: DeserializeOwned>(dataset: Dataset, fetched: Result<Value, SourceError>) -> Vec<T> {
    debug_assert!(!dataset.is_required(), "{dataset} must degrade, not fail");
    let value = match fetched {
        Ok(value) => value,
        Err(err) => {
            debug!(dataset = %dataset, error = %err, "optional dataset unavailable, using empty fallback");
            return Vec::new();
        }
    };
    match serde_json::from_value(value) {
        Ok(records) => records,
        Err(err) => {
            debug!(dataset = %dataset, error = %err, "optional dataset malformed, using empty fallback");
            Vec::new()
        }
    }
}

/// Pricing metadata reads each field with its own default, so a partial or
/// missing source still seeds usable values.
fn pricing_meta(fetched: Result<Value, SourceError>) -> PricingMeta {
    match fetched {
        Ok(value) => PricingMeta::from_value(&value),
        Err(err) => {
            debug!(error = %err, "pricing metadata unavailable, using defaults");
            PricingMeta::default()
        }
    }
}
