use serde::Deserialize;
use utoipa::ToSchema;

pub mod addresses;
pub mod clients;
pub mod product_categories;
pub mod products;
pub mod subcategories;

/// Reference to another entity by identity. Any other fields sent along
/// with the id are ignored; the referenced entity is always reloaded.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EntityRef {
    pub id: Option<i32>,
}

/// Identity requested by an optional reference, if any.
pub fn requested_id(reference: Option<&EntityRef>) -> Option<i32> {
    reference.and_then(|r| r.id)
}
