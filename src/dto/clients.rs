use serde::Deserialize;
use utoipa::ToSchema;

use crate::dto::addresses::AddressRequest;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub addresses: Vec<AddressRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}
