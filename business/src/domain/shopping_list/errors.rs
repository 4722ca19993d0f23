use crate::domain::errors::RepositoryError;

/// Failures of list-wide operations (validation and resynchronization).
#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    /// Nothing was recorded and nothing was removed.
    #[error("shopping_list.history_write_failed")]
    HistoryWriteFailed(#[source] RepositoryError),
    /// Purchases were recorded but the items are still on the active list.
    #[error("shopping_list.items_not_cleared")]
    ItemsNotCleared(#[source] RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
