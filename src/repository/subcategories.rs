use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    TryIntoModel,
};

use crate::{
    entity::{
        product_categories::{Entity as ProductCategories, Model as ProductCategoryModel},
        subcategories::{ActiveModel, Column, Entity as Subcategories, Model as SubcategoryModel},
    },
    models::Subcategory,
    repository::product_categories::category_from_entity,
};

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<Subcategory>, DbErr> {
    Subcategories::find_by_id(id)
        .find_also_related(ProductCategories)
        .one(conn)
        .await?
        .map(|(model, category)| subcategory_from_entity(model, category))
        .transpose()
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Subcategory>, DbErr> {
    Subcategories::find()
        .find_also_related(ProductCategories)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(|(model, category)| subcategory_from_entity(model, category))
        .collect()
}

/// Saves the row and returns it with its category freshly joined.
pub async fn save<C: ConnectionTrait>(conn: &C, active: ActiveModel) -> Result<Subcategory, DbErr> {
    let saved = active.save(conn).await?.try_into_model()?;
    find_by_id(conn, saved.id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("subcategory {} after save", saved.id)))
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Subcategories::find_by_id(id).count(conn).await? > 0)
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let result = Subcategories::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

pub(crate) fn subcategory_from_entity(
    model: SubcategoryModel,
    category: Option<ProductCategoryModel>,
) -> Result<Subcategory, DbErr> {
    let category = category.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "product category {} referenced by subcategory {}",
            model.category_id, model.id
        ))
    })?;
    Ok(Subcategory {
        id: model.id,
        name: model.name,
        description: model.description,
        category: category_from_entity(category),
    })
}
