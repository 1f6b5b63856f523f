use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        EntityRef, addresses::AddressRequest,
        clients::{CreateClientRequest, UpdateClientRequest},
        product_categories::ProductCategoryRequest, products::ProductRequest,
        subcategories::SubcategoryRequest,
    },
    models::{Address, Client, Product, ProductCategory, Subcategory},
    response::{ApiResponse, Meta},
    routes::{addresses, clients, health, product_categories, products, subcategories},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        addresses::get_address,
        addresses::create_address,
        addresses::update_address,
        addresses::delete_address,
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        clients::add_address,
        clients::remove_address,
        product_categories::list_product_categories,
        product_categories::get_product_category,
        product_categories::create_product_category,
        product_categories::update_product_category,
        product_categories::delete_product_category,
        subcategories::list_subcategories,
        subcategories::get_subcategory,
        subcategories::create_subcategory,
        subcategories::update_subcategory,
        subcategories::delete_subcategory,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product
    ),
    components(
        schemas(
            Address,
            Client,
            ProductCategory,
            Subcategory,
            Product,
            EntityRef,
            AddressRequest,
            CreateClientRequest,
            UpdateClientRequest,
            ProductCategoryRequest,
            SubcategoryRequest,
            ProductRequest,
            Meta,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Addresses", description = "Standalone address endpoints"),
        (name = "Clients", description = "Client and owned-address endpoints"),
        (name = "Product Categories", description = "Product category endpoints"),
        (name = "Subcategories", description = "Subcategory endpoints"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
