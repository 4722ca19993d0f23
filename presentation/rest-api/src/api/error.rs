use business::domain::errors::RepositoryError;
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl ToString) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Status for a gateway failure that reached the HTTP boundary.
pub fn repository_error_response(err: &RepositoryError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("NotFound", err)),
        RepositoryError::Unreachable => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("BackendUnavailable", err),
        ),
        RepositoryError::Persistence | RepositoryError::DatabaseError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("InternalError", err),
        ),
    }
}
