use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{Set, TransactionTrait};

use crate::{
    domain::reresolve,
    dto::{products::ProductRequest, requested_id},
    entity::products::ActiveModel,
    error::{AppError, AppResult},
    models::Product,
    repository::{products, subcategories},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    Ok(products::find_all(&state.orm).await?)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    products::find_by_id(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn create_product(state: &AppState, payload: ProductRequest) -> AppResult<Product> {
    ensure_stock(payload.stock_quantity)?;
    let unit_price = price_in_cents(payload.unit_price)?;
    let subcategory_id = requested_id(payload.subcategory.as_ref())
        .ok_or_else(|| AppError::BadRequest("subcategory.id is required".into()))?;

    let txn = state.orm.begin().await?;

    let subcategory = subcategories::find_by_id(&txn, subcategory_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("subcategory {subcategory_id} not found")))?;

    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        unit_price: Set(unit_price),
        stock_quantity: Set(payload.stock_quantity),
        sku: Set(payload.sku),
        active: Set(payload.active),
        subcategory_id: Set(subcategory.id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let product = products::save(&txn, active).await?;

    txn.commit().await?;

    tracing::info!(product_id = product.id, sku = %product.sku, "product created");
    Ok(product)
}

/// Overwrites every scalar field and stamps `updated_at`, even when nothing
/// else changes. The subcategory is replaced only when the payload names a
/// subcategory id that resolves.
pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductRequest,
) -> AppResult<Product> {
    ensure_stock(payload.stock_quantity)?;
    let unit_price = price_in_cents(payload.unit_price)?;

    let txn = state.orm.begin().await?;

    let existing = products::find_by_id(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let subcategory = reresolve(
        existing.subcategory,
        requested_id(payload.subcategory.as_ref()),
        |subcategory_id| subcategories::find_by_id(&txn, subcategory_id),
    )
    .await?;

    let active = ActiveModel {
        id: Unchanged(existing.id),
        name: Set(payload.name),
        description: Set(payload.description),
        unit_price: Set(unit_price),
        stock_quantity: Set(payload.stock_quantity),
        sku: Set(payload.sku),
        active: Set(payload.active),
        subcategory_id: Set(subcategory.id),
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    };
    let product = products::save(&txn, active).await?;

    txn.commit().await?;

    tracing::info!(
        product_id = product.id,
        subcategory_id = product.subcategory.id,
        "product updated"
    );
    Ok(product)
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    if !products::exists_by_id(&state.orm, id).await? {
        return Err(AppError::NotFound);
    }
    products::delete_by_id(&state.orm, id).await?;
    tracing::info!(product_id = id, "product deleted");
    Ok(())
}

fn ensure_stock(stock_quantity: i32) -> AppResult<()> {
    if stock_quantity < 0 {
        return Err(AppError::BadRequest(
            "stockQuantity must not be negative".to_string(),
        ));
    }
    Ok(())
}

// Prices are stored with exactly two decimal places.
fn price_in_cents(unit_price: Decimal) -> AppResult<Decimal> {
    let scale = products::PRICE_SCALE;
    if unit_price.normalize().scale() > scale {
        return Err(AppError::BadRequest(format!(
            "unitPrice {unit_price} has more than {scale} decimal places"
        )));
    }
    let mut price = unit_price;
    price.rescale(scale);
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_stock_is_rejected() {
        assert!(matches!(ensure_stock(-1), Err(AppError::BadRequest(_))));
        assert!(ensure_stock(0).is_ok());
        assert!(ensure_stock(150).is_ok());
    }

    #[test]
    fn prices_are_scaled_to_cents() {
        let price = price_in_cents("999".parse().unwrap()).unwrap();
        assert_eq!(price.to_string(), "999.00");
        let price = price_in_cents("12.340".parse().unwrap()).unwrap();
        assert_eq!(price.to_string(), "12.34");
        assert!(matches!(
            price_in_cents("12.345".parse().unwrap()),
            Err(AppError::BadRequest(_))
        ));
    }
}
