use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::shopping_item::use_cases::quick_add::{QuickAddParams, QuickAddUseCase};
use business::domain::suggestion::use_cases::get_suggestions::{
    GetSuggestionsParams, GetSuggestionsUseCase,
};
use business::domain::suggestion::use_cases::get_top_items::GetTopItemsUseCase;

use crate::api::error::IntoErrorResponse;
use crate::api::shopping_item::routes::AddShoppingItemResponse;
use crate::api::suggestion::dto::{QuickAddRequest, SuggestionResponse, TopItemResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    get_suggestions_use_case: Arc<dyn GetSuggestionsUseCase>,
    get_top_items_use_case: Arc<dyn GetTopItemsUseCase>,
    quick_add_use_case: Arc<dyn QuickAddUseCase>,
}

impl SuggestionApi {
    pub fn new(
        get_suggestions_use_case: Arc<dyn GetSuggestionsUseCase>,
        get_top_items_use_case: Arc<dyn GetTopItemsUseCase>,
        quick_add_use_case: Arc<dyn QuickAddUseCase>,
    ) -> Self {
        Self {
            get_suggestions_use_case,
            get_top_items_use_case,
            quick_add_use_case,
        }
    }
}

/// Suggestions drawn from purchase history
#[OpenApi]
impl SuggestionApi {
    /// Item suggestions
    ///
    /// Without `q`, the deduplicated recent purchases. With `q`, the
    /// autocomplete matches for it (blank `q` matches nothing).
    #[oai(path = "/suggestions", method = "get", tag = "ApiTags::Suggestions")]
    async fn suggestions(&self, q: Query<Option<String>>) -> Json<Vec<SuggestionResponse>> {
        let suggestions = self
            .get_suggestions_use_case
            .execute(GetSuggestionsParams { query: q.0 });
        Json(suggestions.into_iter().map(Into::into).collect())
    }

    /// Most purchased items
    #[oai(path = "/top-items", method = "get", tag = "ApiTags::Suggestions")]
    async fn top_items(&self) -> Json<Vec<TopItemResponse>> {
        Json(
            self.get_top_items_use_case
                .execute()
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }

    /// Re-add a top item
    ///
    /// Adds the item with quantity 1 in the default category.
    #[oai(
        path = "/top-items/quick-add",
        method = "post",
        tag = "ApiTags::Suggestions"
    )]
    async fn quick_add(&self, body: Json<QuickAddRequest>) -> AddShoppingItemResponse {
        let params = QuickAddParams {
            item_name: body.0.item_name,
        };

        match self.quick_add_use_case.execute(params).await {
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
}
