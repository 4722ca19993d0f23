use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::shopping_list::use_cases::refresh::RefreshAllUseCase;
use business::domain::shopping_list::use_cases::validate_purchases::ValidatePurchasesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct ValidatePurchasesResponse {
    /// Number of checked items moved to history
    pub validated: u32,
}

pub struct ShoppingListApi {
    validate_use_case: Arc<dyn ValidatePurchasesUseCase>,
    refresh_use_case: Arc<dyn RefreshAllUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        validate_use_case: Arc<dyn ValidatePurchasesUseCase>,
        refresh_use_case: Arc<dyn RefreshAllUseCase>,
    ) -> Self {
        Self {
            validate_use_case,
            refresh_use_case,
        }
    }
}

#[OpenApi]
impl ShoppingListApi {
    /// Validate purchases
    ///
    /// Records every checked item in the purchase history, then removes
    /// them from the list. Returns 0 when nothing is checked.
    #[oai(
        path = "/shopping-items/validate",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn validate(&self) -> ValidateResponse {
        match self.validate_use_case.execute().await {
            Ok(count) => ValidateResponse::Ok(Json(ValidatePurchasesResponse {
                validated: u32::try_from(count).unwrap_or(u32::MAX),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ValidateResponse::Unavailable(json),
                    _ => ValidateResponse::InternalError(json),
                }
            }
        }
    }

    /// Resync from the database
    ///
    /// Refetches the list and the history-derived data.
    #[oai(path = "/refresh", method = "post", tag = "ApiTags::ShoppingList")]
    async fn refresh(&self) -> RefreshResponse {
        match self.refresh_use_case.execute().await {
            Ok(()) => RefreshResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => RefreshResponse::Unavailable(json),
                    _ => RefreshResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ValidateResponse {
    #[oai(status = 200)]
    Ok(Json<ValidatePurchasesResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RefreshResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}
