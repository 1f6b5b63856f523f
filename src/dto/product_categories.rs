use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}
