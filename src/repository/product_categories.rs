use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    TryIntoModel,
};

use crate::{
    entity::product_categories::{
        ActiveModel, Column, Entity as ProductCategories, Model as ProductCategoryModel,
    },
    models::ProductCategory,
};

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<ProductCategory>, DbErr> {
    Ok(ProductCategories::find_by_id(id)
        .one(conn)
        .await?
        .map(category_from_entity))
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<ProductCategory>, DbErr> {
    Ok(ProductCategories::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect())
}

pub async fn save<C: ConnectionTrait>(
    conn: &C,
    active: ActiveModel,
) -> Result<ProductCategory, DbErr> {
    let saved = active.save(conn).await?.try_into_model()?;
    Ok(category_from_entity(saved))
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    Ok(ProductCategories::find_by_id(id).count(conn).await? > 0)
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let result = ProductCategories::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

pub(crate) fn category_from_entity(model: ProductCategoryModel) -> ProductCategory {
    ProductCategory {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}
