#![allow(dead_code)]

use mystore_api::{
    db::{connect, run_migrations},
    dto::{
        EntityRef,
        addresses::AddressRequest,
        clients::CreateClientRequest,
        product_categories::ProductCategoryRequest,
        products::ProductRequest,
        subcategories::SubcategoryRequest,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::ConnectOptions;

// Fresh in-memory database per test. A single pooled connection keeps every
// query on the same SQLite memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = connect(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub fn address(street: &str) -> AddressRequest {
    AddressRequest {
        street: street.to_string(),
        city: "Anytown".to_string(),
        state: "CA".to_string(),
        zip_code: "12345".to_string(),
    }
}

pub fn client(name: &str, email: &str, phone: &str) -> CreateClientRequest {
    CreateClientRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        addresses: Vec::new(),
    }
}

pub fn category(name: &str) -> ProductCategoryRequest {
    ProductCategoryRequest {
        name: name.to_string(),
        description: Some(format!("{name} description")),
    }
}

pub fn subcategory(name: &str, category_id: Option<i32>) -> SubcategoryRequest {
    SubcategoryRequest {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        category: category_id.map(|id| EntityRef { id: Some(id) }),
    }
}

pub fn product(name: &str, price: &str, subcategory_id: Option<i32>) -> ProductRequest {
    ProductRequest {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        unit_price: price.parse::<Decimal>().expect("decimal literal"),
        stock_quantity: 100,
        sku: format!("SKU-{name}"),
        active: true,
        subcategory: subcategory_id.map(|id| EntityRef { id: Some(id) }),
    }
}
