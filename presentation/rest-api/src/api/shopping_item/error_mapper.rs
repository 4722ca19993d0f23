use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ShoppingItemError::NameEmpty | ShoppingItemError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &self),
            ),
            ShoppingItemError::NotFound => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("NotFound", &self))
            }
            ShoppingItemError::Repository(err) => repository_error_response(err),
        }
    }
}
