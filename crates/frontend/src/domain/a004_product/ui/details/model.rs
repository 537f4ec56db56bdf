use contracts::domain::a004_product::{Product, ProductHandlerPayload};

use crate::shared::rest;

/// Create or update a product through the handler function.
/// The handler also writes the stock row, so the tables are never patched directly.
pub async fn save_product(payload: &ProductHandlerPayload) -> Result<(), String> {
    let response = rest::call_function(&Product::handler_path(), payload).await?;
    log::debug!("product handler: {}", response);
    Ok(())
}
