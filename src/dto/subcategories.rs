use serde::Deserialize;
use utoipa::ToSchema;

use crate::dto::EntityRef;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubcategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<EntityRef>,
}
