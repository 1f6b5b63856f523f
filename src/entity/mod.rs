pub mod addresses;
pub mod clients;
pub mod product_categories;
pub mod products;
pub mod subcategories;

pub use addresses::Entity as Addresses;
pub use clients::Entity as Clients;
pub use product_categories::Entity as ProductCategories;
pub use products::Entity as Products;
pub use subcategories::Entity as Subcategories;
