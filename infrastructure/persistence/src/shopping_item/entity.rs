use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, FromRow)]
pub struct ShoppingItemEntity {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub category: String,
    pub checked: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItemEntity {
    pub fn into_domain(self) -> ShoppingItem {
        ShoppingItem::from_repository(
            self.id,
            self.name,
            // CHECK (quantity > 0) on the column
            self.quantity.max(1) as u32,
            self.category,
            self.checked,
            self.created_at,
        )
    }
}
