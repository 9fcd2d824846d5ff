//! Query engine: sorted, filtered views over a catalog snapshot.
//!
//! Views are recomputed from scratch on every call; nothing is cached.

use core::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use pescaderia_core::Entity;

use crate::expiration::{ExpirationPolicy, ExpirationStatus};
use crate::product::Product;
use crate::store::Catalog;

/// Product field a view can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Name,
    Quantity,
    Price,
    ExpirationDate,
    IngressDate,
    Description,
}

impl core::str::FromStr for SortKey {
    type Err = pescaderia_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "quantity" => Ok(SortKey::Quantity),
            "price" => Ok(SortKey::Price),
            "expiration_date" | "expiration" => Ok(SortKey::ExpirationDate),
            "ingress_date" | "ingress" => Ok(SortKey::IngressDate),
            "description" => Ok(SortKey::Description),
            other => Err(pescaderia_core::DomainError::validation(format!(
                "unknown sort key: {other}"
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current column ordering of the product table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: same column flips direction, another column starts ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if key == self.key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Ordering of two products under this state.
    ///
    /// Missing values sort last ascending and first descending. Dates compare
    /// chronologically.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ascending = match self.key {
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::Quantity => a.quantity().cmp(&b.quantity()),
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::ExpirationDate => a.expiration_date().cmp(&b.expiration_date()),
            SortKey::IngressDate => a.ingress_date().cmp(&b.ingress_date()),
            SortKey::Description => missing_last(a.description(), b.description()),
        };
        self.direction.apply(ascending)
    }
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Table row: a product with its expiration status for the given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    pub status: ExpirationStatus,
}

/// Sort + search input for the product table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub sort: SortState,
    #[serde(default)]
    pub search: String,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = SortState::new(key, direction);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sort, then keep products whose name contains the search text
    /// (case-insensitive). An empty search keeps everything.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut sorted: Vec<&Product> = products.iter().collect();
        sorted.sort_by(|a, b| self.sort.compare(a, b));

        let needle = self.search.to_lowercase();
        sorted.retain(|p| p.name_matches(&needle));
        sorted
    }

    /// View rows for `catalog`, classified against the wall-clock reading `now`.
    pub fn rows(&self, catalog: &Catalog, now: NaiveDateTime, policy: &ExpirationPolicy) -> Vec<ProductRow> {
        self.apply(catalog.products())
            .into_iter()
            .map(|p| ProductRow {
                status: policy.classify_at(p.expiration_date(), now),
                product: p.clone(),
            })
            .collect()
    }
}
