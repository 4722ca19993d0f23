use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingItemError {
    #[error("shopping_item.name_empty")]
    NameEmpty,
    #[error("shopping_item.invalid_quantity")]
    InvalidQuantity,
    #[error("shopping_item.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ShoppingItemError {
    /// Validation errors are raised locally and never reach the gateway.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShoppingItemError::NameEmpty | ShoppingItemError::InvalidQuantity
        )
    }

    /// Maps a gateway error, turning a missing row into [`ShoppingItemError::NotFound`].
    pub fn from_repository(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ShoppingItemError::NotFound,
            other => ShoppingItemError::Repository(other),
        }
    }
}
