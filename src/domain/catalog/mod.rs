mod categories;
mod get_product;
mod list_products;
mod product;

pub use categories::categories_endpoint;
pub use get_product::get_product_endpoint;
pub use list_products::{ProductFilter, list_products_endpoint};
pub use product::{Catalog, CatalogItem, CategoryCount};
