//! In-memory model catalog engine
//!
//! Holds the loaded dataset (models, inference profiles, beta flags) and
//! answers every query the presentation layer needs: facet option lists,
//! filtered/sorted model lists, and per-model profile views. Everything in
//! this crate is pure and synchronous; loading the data is the
//! `bx-loader` crate's job.

pub mod facets;
pub mod filter;
pub mod profiles;
pub mod store;
pub mod types;

pub use facets::FacetIndex;
pub use filter::{evaluate, FilterState, SortColumn, SortDirection};
pub use profiles::group_for_model;
pub use store::CatalogStore;
pub use types::{GroupedProfileView, MemberModelRef, ModelRecord, ProfileRecord};
