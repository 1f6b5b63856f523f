//! Persistence ports, one module per entity.
//!
//! Every function takes any [`sea_orm::ConnectionTrait`], so callers decide
//! whether it runs on the pool or inside an open transaction.

pub mod addresses;
pub mod clients;
pub mod product_categories;
pub mod products;
pub mod subcategories;
