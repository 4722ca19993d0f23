use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shopping_item::model::DEFAULT_QUANTITY;
use business::domain::shopping_item::use_cases::add::{
    AddShoppingItemParams, AddShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::get_list::GetShoppingListUseCase;
use business::domain::shopping_item::use_cases::toggle_checked::{
    ToggleCheckedParams, ToggleCheckedUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_item::dto::{
    AddShoppingItemRequest, ShoppingItemResponse, ShoppingListResponse, ToggleCheckedRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingItemApi {
    get_list_use_case: Arc<dyn GetShoppingListUseCase>,
    add_use_case: Arc<dyn AddShoppingItemUseCase>,
    toggle_checked_use_case: Arc<dyn ToggleCheckedUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
}

impl ShoppingItemApi {
    pub fn new(
        get_list_use_case: Arc<dyn GetShoppingListUseCase>,
        add_use_case: Arc<dyn AddShoppingItemUseCase>,
        toggle_checked_use_case: Arc<dyn ToggleCheckedUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
    ) -> Self {
        Self {
            get_list_use_case,
            add_use_case,
            toggle_checked_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw)
        .map_err(|_| ErrorResponse::new("ValidationError", "shopping_item.invalid_id"))
}

/// Active shopping list
///
/// Reads come from the local snapshot; writes go to the database first
/// and are applied locally once accepted.
#[OpenApi]
impl ShoppingItemApi {
    /// Get the shopping list
    ///
    /// Unchecked items first, then checked ones.
    #[oai(
        path = "/shopping-items",
        method = "get",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn get_list(&self) -> Json<ShoppingListResponse> {
        Json(self.get_list_use_case.execute().into())
    }

    /// Add an item
    #[oai(
        path = "/shopping-items",
        method = "post",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn add(&self, body: Json<AddShoppingItemRequest>) -> AddShoppingItemResponse {
        let params = AddShoppingItemParams {
            name: body.0.name,
            quantity: body.0.quantity.unwrap_or(DEFAULT_QUANTITY),
            category: body.0.category,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => AddShoppingItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddShoppingItemResponse::BadRequest(json),
                    503 => AddShoppingItemResponse::Unavailable(json),
                    _ => AddShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Check or uncheck an item
    ///
    /// The local list is updated before the database confirms.
    #[oai(
        path = "/shopping-items/:id/checked",
        method = "put",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn toggle_checked(
        &self,
        id: Path<String>,
        body: Json<ToggleCheckedRequest>,
    ) -> MutationResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return MutationResponse::BadRequest(json),
        };
        let params = ToggleCheckedParams {
            id,
            checked: body.0.checked,
        };

        match self.toggle_checked_use_case.execute(params).await {
            Ok(()) => MutationResponse::NoContent,
            Err(err) => MutationResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete an item
    #[oai(
        path = "/shopping-items/:id",
        method = "delete",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn delete(&self, id: Path<String>) -> MutationResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return MutationResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteShoppingItemParams { id })
            .await
        {
            Ok(()) => MutationResponse::NoContent,
            Err(err) => MutationResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddShoppingItemResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MutationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}

impl MutationResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => MutationResponse::BadRequest(json),
            404 => MutationResponse::NotFound(json),
            503 => MutationResponse::Unavailable(json),
            _ => MutationResponse::InternalError(json),
        }
    }
}
