//! Add/edit form payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pescaderia_core::{DomainError, DomainResult, Price};

use crate::product::{Product, ProductDraft};

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
    /// ISO date (`YYYY-MM-DD`), as produced by a date input.
    pub expiration_date: String,
    pub description: String,
}

impl ProductForm {
    /// Edit form pre-filled from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            quantity: product.quantity().to_string(),
            price: product.price().to_decimal_string(),
            expiration_date: product.expiration_date().format("%Y-%m-%d").to_string(),
            description: product.description().unwrap_or_default().to_string(),
        }
    }

    /// Validate and convert into a draft. The draft never carries an ingress date.
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        let name = self.name.trim().to_string();

        let quantity_raw = self.quantity.trim();
        if quantity_raw.is_empty() {
            return Err(DomainError::validation("quantity is required"));
        }
        let quantity: u32 = quantity_raw.parse().map_err(|_| {
            DomainError::validation(format!("quantity must be a non-negative integer: {quantity_raw}"))
        })?;

        let price: Price = self.price.parse()?;

        let date_raw = self.expiration_date.trim();
        if date_raw.is_empty() {
            return Err(DomainError::validation("expiration date is required"));
        }
        let expiration_date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|e| DomainError::validation(format!("invalid expiration date {date_raw}: {e}")))?;

        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());

        let draft = ProductDraft {
            name,
            quantity,
            price,
            expiration_date,
            ingress_date: None,
            description,
        };
        draft.validate()?;
        Ok(draft)
    }
}
