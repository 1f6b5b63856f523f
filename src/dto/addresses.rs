use serde::Deserialize;
use utoipa::ToSchema;

/// Street-level fields of an address. Used for standalone create/update and
/// for attaching a new address to a client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}
