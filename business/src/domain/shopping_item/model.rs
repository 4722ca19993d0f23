use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::category::resolve_category;

use super::errors::ShoppingItemError;

pub const DEFAULT_QUANTITY: u32 = 1;

/// An entry of the active list, as accepted by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub checked: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        quantity: u32,
        category: String,
        checked: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            category,
            checked,
            created_at,
        }
    }
}

/// A validated candidate item. It has no id until the backend accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItemDraft {
    pub name: String,
    pub quantity: u32,
    pub category: String,
}

impl ShoppingItemDraft {
    pub fn new(
        name: &str,
        quantity: u32,
        category: Option<&str>,
    ) -> Result<Self, ShoppingItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }
        if quantity == 0 {
            return Err(ShoppingItemError::InvalidQuantity);
        }

        Ok(Self {
            name: name.to_string(),
            quantity,
            category: resolve_category(category),
        })
    }
}

/// Partial update of an item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingItemChanges {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub checked: Option<bool>,
}

impl ShoppingItemChanges {
    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }
}
