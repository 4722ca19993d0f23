use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ShoppingListError::HistoryWriteFailed(source)
            | ShoppingListError::ItemsNotCleared(source) => {
                let status = match source {
                    RepositoryError::Unreachable => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, ErrorResponse::new("ValidationIncomplete", &self))
            }
            ShoppingListError::Repository(err) => repository_error_response(err),
        }
    }
}
