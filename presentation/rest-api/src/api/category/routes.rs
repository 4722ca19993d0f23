use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::category::{CategoryInfo, all_categories};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub name: String,
    pub emoji: String,
    /// Display color name
    pub color: String,
}

impl From<&CategoryInfo> for CategoryResponse {
    fn from(info: &CategoryInfo) -> Self {
        Self {
            name: info.name.to_string(),
            emoji: info.emoji.to_string(),
            color: info.color.to_string(),
        }
    }
}

pub struct CategoryApi;

impl CategoryApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl CategoryApi {
    /// List item categories
    ///
    /// The fixed registry, in display order. "Other" is the fallback.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn list(&self) -> Json<Vec<CategoryResponse>> {
        Json(all_categories().iter().map(CategoryResponse::from).collect())
    }
}
