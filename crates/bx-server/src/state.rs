//! Shared server state
//!
//! The store is immutable after load, so handlers share it behind plain
//! `Arc`s; no locking anywhere.

use std::sync::Arc;

use bx_catalog::{CatalogStore, FacetIndex};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    /// Built once from the store at startup; re-derivable at any time.
    pub facets: Arc<FacetIndex>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        let facets = FacetIndex::build(store.models());
        Self {
            store: Arc::new(store),
            facets: Arc::new(facets),
        }
    }
}
