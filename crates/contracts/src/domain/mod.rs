pub mod a001_category;
pub mod a002_category_spec;
pub mod a003_product_owner;
pub mod a004_product;
pub mod common;
