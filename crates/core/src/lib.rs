//! `pescaderia-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and
//! reporting crates (no UI, no storage, no clock).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::Price;
pub use value_object::ValueObject;
