pub mod address_service;
pub mod client_service;
pub mod product_category_service;
pub mod product_service;
pub mod subcategory_service;
