use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

/// Re-reads the active list and overwrites the local snapshot.
#[async_trait]
pub trait RefreshShoppingItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ShoppingListError>;
}

/// Re-reads recent history, this week's history and top items.
#[async_trait]
pub trait RefreshHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ShoppingListError>;
}

/// Re-reads everything.
#[async_trait]
pub trait RefreshAllUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ShoppingListError>;
}
