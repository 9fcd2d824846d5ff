use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pescaderia_core::{DomainError, DomainResult, Entity, Price, ProductId};

/// Product payload without a store-assigned identifier.
///
/// Used both for creating and for editing a product. `ingress_date` is only
/// honoured on creation; when absent the store stamps the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: u32,
    pub price: Price,
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub ingress_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, quantity: u32, price: Price, expiration_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            expiration_date,
            ingress_date: None,
            description: None,
        }
    }

    pub fn with_ingress_date(mut self, ingress_date: NaiveDate) -> Self {
        self.ingress_date = Some(ingress_date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the data-model constraints a draft must satisfy.
    ///
    /// Quantity and price are non-negative by construction.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

/// A product held in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: u32,
    price: Price,
    expiration_date: NaiveDate,
    ingress_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Product {
    /// Rebuild a product with a known identifier (seed data, fixtures).
    ///
    /// A draft's own `ingress_date` is ignored in favour of `ingress_date`.
    pub fn restore(id: ProductId, draft: ProductDraft, ingress_date: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            expiration_date: draft.expiration_date,
            ingress_date,
            description: normalize_description(draft.description),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn ingress_date(&self) -> NaiveDate {
        self.ingress_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Case-insensitive substring match against the name.
    pub fn name_matches(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty() || self.name.to_lowercase().contains(needle_lowercase)
    }

    /// Replace every mutable field; identifier and ingress date are kept.
    pub(crate) fn apply_draft(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.expiration_date = draft.expiration_date;
        self.description = normalize_description(draft.description);
    }

    /// Draft view of this product (used to pre-fill an edit form).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
            expiration_date: self.expiration_date,
            ingress_date: Some(self.ingress_date),
            description: self.description.clone(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

/// Short table format for dates: `dd/mm/yy`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}
