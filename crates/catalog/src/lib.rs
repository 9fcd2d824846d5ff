//! Product catalog view-model for the fish shop.
//!
//! This crate contains the catalog rules implemented purely as deterministic
//! logic (no rendering, no storage, no wall clock): the catalog store and its
//! add/update/remove transitions, form parsing, sorting and searching, and
//! expiration classification.

pub mod expiration;
pub mod form;
pub mod product;
pub mod query;
pub mod seed;
pub mod store;

pub use expiration::{ExpirationPolicy, ExpirationStatus, classify, days_until};
pub use form::ProductForm;
pub use product::{Product, ProductDraft, format_display_date};
pub use query::{CatalogQuery, ProductRow, SortDirection, SortKey, SortState};
pub use seed::sample_catalog;
pub use store::Catalog;
