use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::dto::EntityRef;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "999.00")]
    pub unit_price: Decimal,
    pub stock_quantity: i32,
    pub sku: String,
    #[serde(default)]
    pub active: bool,
    pub subcategory: Option<EntityRef>,
}
