use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{ShoppingItem, ShoppingItemChanges, ShoppingItemDraft};

/// Gateway over the `shopping_items` collection.
#[async_trait]
pub trait ShoppingItemRepository: Send + Sync {
    /// Unchecked items first, most recently created first within each group.
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError>;
    /// Persists a draft and returns the accepted record with its backend id.
    async fn insert(&self, draft: &ShoppingItemDraft) -> Result<ShoppingItem, RepositoryError>;
    async fn update(&self, id: Uuid, changes: &ShoppingItemChanges)
    -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Deletes every listed id in one request and returns how many rows went away.
    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, RepositoryError>;
}
