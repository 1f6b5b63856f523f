use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{Set, TransactionTrait};

use crate::{
    dto::product_categories::ProductCategoryRequest,
    entity::product_categories::ActiveModel,
    error::{AppError, AppResult},
    models::ProductCategory,
    repository::product_categories,
    state::AppState,
};

pub async fn list_product_categories(state: &AppState) -> AppResult<Vec<ProductCategory>> {
    Ok(product_categories::find_all(&state.orm).await?)
}

pub async fn get_product_category(state: &AppState, id: i32) -> AppResult<ProductCategory> {
    product_categories::find_by_id(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn create_product_category(
    state: &AppState,
    payload: ProductCategoryRequest,
) -> AppResult<ProductCategory> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
    };
    let category = product_categories::save(&state.orm, active).await?;
    tracing::info!(category_id = category.id, "product category created");
    Ok(category)
}

pub async fn update_product_category(
    state: &AppState,
    id: i32,
    payload: ProductCategoryRequest,
) -> AppResult<ProductCategory> {
    let txn = state.orm.begin().await?;

    if !product_categories::exists_by_id(&txn, id).await? {
        return Err(AppError::NotFound);
    }

    let active = ActiveModel {
        id: Unchanged(id),
        name: Set(payload.name),
        description: Set(payload.description),
    };
    let category = product_categories::save(&txn, active).await?;

    txn.commit().await?;

    tracing::info!(category_id = category.id, "product category updated");
    Ok(category)
}

pub async fn delete_product_category(state: &AppState, id: i32) -> AppResult<()> {
    if !product_categories::exists_by_id(&state.orm, id).await? {
        return Err(AppError::NotFound);
    }
    product_categories::delete_by_id(&state.orm, id).await?;
    tracing::info!(category_id = id, "product category deleted");
    Ok(())
}
