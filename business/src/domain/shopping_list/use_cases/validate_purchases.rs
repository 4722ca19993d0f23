use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

/// Moves every checked item into the purchase history.
#[async_trait]
pub trait ValidatePurchasesUseCase: Send + Sync {
    /// Returns the number of items validated; `0` when nothing was checked.
    async fn execute(&self) -> Result<usize, ShoppingListError>;
}
