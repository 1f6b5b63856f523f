use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TryIntoModel,
};

use crate::{
    entity::{
        product_categories::{Column as CategoryCol, Entity as ProductCategories},
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
        subcategories::{Entity as Subcategories, Model as SubcategoryModel},
    },
    models::{Product, Subcategory},
    repository::subcategories::subcategory_from_entity,
};

/// Decimal places of `products.unit_price`.
pub const PRICE_SCALE: u32 = 2;

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Product>, DbErr> {
    let row = Products::find_by_id(id)
        .find_also_related(Subcategories)
        .one(conn)
        .await?;
    match row {
        Some(row) => Ok(assemble(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Product>, DbErr> {
    let rows = Products::find()
        .find_also_related(Subcategories)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?;
    assemble(conn, rows).await
}

/// Saves the row and returns it with its subcategory and category joined.
pub async fn save<C: ConnectionTrait>(conn: &C, active: ActiveModel) -> Result<Product, DbErr> {
    let saved = active.save(conn).await?.try_into_model()?;
    find_by_id(conn, saved.id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("product {} after save", saved.id)))
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Products::find_by_id(id).count(conn).await? > 0)
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let result = Products::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

// Loads the categories for all rows in one query.
async fn assemble<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<(ProductModel, Option<SubcategoryModel>)>,
) -> Result<Vec<Product>, DbErr> {
    let mut category_ids: Vec<i32> = rows
        .iter()
        .filter_map(|(_, sub)| sub.as_ref().map(|s| s.category_id))
        .collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let categories: HashMap<i32, _> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        ProductCategories::find()
            .filter(CategoryCol::Id.is_in(category_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect()
    };

    rows.into_iter()
        .map(|(product, subcategory)| {
            let subcategory = subcategory.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "subcategory {} referenced by product {}",
                    product.subcategory_id, product.id
                ))
            })?;
            let category = categories.get(&subcategory.category_id).cloned();
            let subcategory = subcategory_from_entity(subcategory, category)?;
            Ok(product_from_entity(product, subcategory))
        })
        .collect()
}

fn product_from_entity(model: ProductModel, subcategory: Subcategory) -> Product {
    // SQLite hands the column back as a float and drops trailing zeros.
    let mut unit_price = model.unit_price;
    unit_price.rescale(PRICE_SCALE);
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        unit_price,
        stock_quantity: model.stock_quantity,
        sku: model.sku,
        active: model.active,
        subcategory,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
