use mystore_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        EntityRef,
        addresses::AddressRequest,
        clients::CreateClientRequest,
        product_categories::ProductCategoryRequest,
        products::ProductRequest,
        subcategories::SubcategoryRequest,
    },
    repository::{clients, product_categories},
    services::{client_service, product_category_service, product_service, subcategory_service},
    state::AppState,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    seed_catalog(&state).await?;
    seed_clients(&state).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_catalog(state: &AppState) -> anyhow::Result<()> {
    if !product_categories::find_all(&state.orm).await?.is_empty() {
        println!("Catalog already present, skipping");
        return Ok(());
    }

    let electronics = product_category_service::create_product_category(
        state,
        ProductCategoryRequest {
            name: "Electronics".into(),
            description: Some("Electronic devices".into()),
        },
    )
    .await?;

    let smartphones = subcategory_service::create_subcategory(
        state,
        SubcategoryRequest {
            name: "Smartphones".into(),
            description: Some("Mobile phones".into()),
            category: Some(EntityRef {
                id: Some(electronics.id),
            }),
        },
    )
    .await?;

    let products = vec![
        ("iPhone 15", "Latest iPhone", Decimal::new(99900, 2), 100, "IPH15-128"),
        ("Samsung Galaxy S23", "New Samsung phone", Decimal::new(89900, 2), 150, "SGS23-256"),
    ];

    for (name, desc, price, stock, sku) in products {
        product_service::create_product(
            state,
            ProductRequest {
                name: name.into(),
                description: Some(desc.into()),
                unit_price: price,
                stock_quantity: stock,
                sku: sku.into(),
                active: true,
                subcategory: Some(EntityRef {
                    id: Some(smartphones.id),
                }),
            },
        )
        .await?;
    }

    println!("Seeded catalog");
    Ok(())
}

async fn seed_clients(state: &AppState) -> anyhow::Result<()> {
    if !clients::find_all(&state.orm).await?.is_empty() {
        println!("Clients already present, skipping");
        return Ok(());
    }

    let client = client_service::create_client(
        state,
        CreateClientRequest {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "123-456-7890".into(),
            addresses: vec![AddressRequest {
                street: "123 Main St".into(),
                city: "Anytown".into(),
                state: "CA".into(),
                zip_code: "12345".into(),
            }],
        },
    )
    .await?;

    println!("Seeded client {} with {} address(es)", client.id, client.addresses.len());
    Ok(())
}
