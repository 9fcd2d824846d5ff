//! Catalog store: immutable snapshots with pure add/update/remove transitions.

use chrono::NaiveDate;
use serde::Serialize;

use pescaderia_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Product, ProductDraft};

/// Snapshot of the product collection.
///
/// Transitions never mutate `self`; each returns the next snapshot. Missing
/// identifiers on `update`/`remove` leave the catalog unchanged; callers that
/// need to know use `try_update`/`try_remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Identifier the next `add` will assign: highest id + 1, or 1 when empty.
    pub fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(Entity::id)
            .max()
            .map_or(ProductId::FIRST, ProductId::next)
    }

    /// Append a product built from `draft`.
    ///
    /// The draft's ingress date is used when present, otherwise `today`.
    #[must_use]
    pub fn add(&self, draft: ProductDraft, today: NaiveDate) -> Catalog {
        let id = self.next_id();
        let ingress_date = draft.ingress_date.unwrap_or(today);
        tracing::debug!(product_id = %id, name = %draft.name, "catalog: product added");

        let mut products = self.products.clone();
        products.push(Product::restore(id, draft, ingress_date));
        Catalog { products }
    }

    /// Replace the mutable fields of product `id`; no-op when absent.
    #[must_use]
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> Catalog {
        self.try_update(id, draft).unwrap_or_else(|_| {
            tracing::warn!(product_id = %id, "catalog: update ignored, product not found");
            self.clone()
        })
    }

    /// Like [`Catalog::update`] but reports a missing product.
    pub fn try_update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Catalog> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)?;

        let mut products = self.products.clone();
        products[index].apply_draft(draft);
        tracing::debug!(product_id = %id, "catalog: product updated");
        Ok(Catalog { products })
    }

    /// Drop product `id`; no-op when absent.
    #[must_use]
    pub fn remove(&self, id: ProductId) -> Catalog {
        self.try_remove(id).unwrap_or_else(|_| {
            tracing::warn!(product_id = %id, "catalog: remove ignored, product not found");
            self.clone()
        })
    }

    /// Like [`Catalog::remove`] but reports a missing product.
    pub fn try_remove(&self, id: ProductId) -> DomainResult<Catalog> {
        if !self.contains(id) {
            return Err(DomainError::not_found());
        }
        let products = self.products.iter().filter(|p| p.id() != id).cloned().collect();
        tracing::debug!(product_id = %id, "catalog: product removed");
        Ok(Catalog { products })
    }
}
