use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{Set, TransactionTrait};

use crate::{
    domain::reresolve,
    dto::{requested_id, subcategories::SubcategoryRequest},
    entity::subcategories::ActiveModel,
    error::{AppError, AppResult},
    models::Subcategory,
    repository::{product_categories, subcategories},
    state::AppState,
};

pub async fn list_subcategories(state: &AppState) -> AppResult<Vec<Subcategory>> {
    Ok(subcategories::find_all(&state.orm).await?)
}

pub async fn get_subcategory(state: &AppState, id: i32) -> AppResult<Subcategory> {
    subcategories::find_by_id(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Creates a subcategory under an existing product category.
pub async fn create_subcategory(
    state: &AppState,
    payload: SubcategoryRequest,
) -> AppResult<Subcategory> {
    let category_id = requested_id(payload.category.as_ref())
        .ok_or_else(|| AppError::BadRequest("category.id is required".into()))?;

    let txn = state.orm.begin().await?;

    let category = product_categories::find_by_id(&txn, category_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("product category {category_id} not found")))?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        category_id: Set(category.id),
    };
    let subcategory = subcategories::save(&txn, active).await?;

    txn.commit().await?;

    tracing::info!(
        subcategory_id = subcategory.id,
        category_id = category.id,
        "subcategory created"
    );
    Ok(subcategory)
}

/// Overwrites name and description. The category is replaced only when the
/// payload names a category id that resolves; otherwise it is kept.
pub async fn update_subcategory(
    state: &AppState,
    id: i32,
    payload: SubcategoryRequest,
) -> AppResult<Subcategory> {
    let txn = state.orm.begin().await?;

    let existing = subcategories::find_by_id(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let category = reresolve(
        existing.category,
        requested_id(payload.category.as_ref()),
        |category_id| product_categories::find_by_id(&txn, category_id),
    )
    .await?;

    let active = ActiveModel {
        id: Unchanged(existing.id),
        name: Set(payload.name),
        description: Set(payload.description),
        category_id: Set(category.id),
    };
    let subcategory = subcategories::save(&txn, active).await?;

    txn.commit().await?;

    tracing::info!(
        subcategory_id = subcategory.id,
        category_id = subcategory.category.id,
        "subcategory updated"
    );
    Ok(subcategory)
}

pub async fn delete_subcategory(state: &AppState, id: i32) -> AppResult<()> {
    if !subcategories::exists_by_id(&state.orm, id).await? {
        return Err(AppError::NotFound);
    }
    subcategories::delete_by_id(&state.orm, id).await?;
    tracing::info!(subcategory_id = id, "subcategory deleted");
    Ok(())
}
