use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRecord;
use crate::shared::postgrest::function_path;
use crate::shared::validation::{parse_count, parse_decimal, required_text, ValidationError};

/// Edge function that creates or updates a product with its stock row
pub const PRODUCT_HANDLER: &str = "product-handler";

/// Selling target sent with every save
pub const DEFAULT_SELLING_TARGET: i64 = 50;

// ============================================================================
// Record
// ============================================================================

/// Catalog product as listed by the products table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub wholesale_price: f64,
    pub retail_price: f64,
    pub weight: f64,
    pub image_url: Option<String>,
    pub visible: bool,
    pub stock: i64,
    pub reserved: i64,
    pub override_available: bool,
    pub available: bool,
    pub category_id: Option<String>,
    pub product_owner_id: Option<String>,
}

impl Product {
    /// Shown as available only when visible and in stock
    pub fn is_available_for_sale(&self) -> bool {
        self.visible && self.available
    }

    pub fn handler_path() -> String {
        function_path(PRODUCT_HANDLER)
    }
}

impl CatalogRecord for Product {
    fn record_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn id_column() -> &'static str {
        "product_id"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Raw form state; numbers stay text until the form is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub product_id: Option<String>,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub retail_price: String,
    pub wholesale_price: String,
    pub weight: String,
    pub visible: bool,
    pub stock_quantity: String,
    pub reserved: String,
    pub override_available: bool,
    pub category_id: String,
    pub product_owner_id: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_id: None,
            sku: String::new(),
            name: String::new(),
            description: String::new(),
            retail_price: String::new(),
            wholesale_price: String::new(),
            weight: String::new(),
            visible: true,
            stock_quantity: String::new(),
            reserved: String::new(),
            override_available: false,
            category_id: String::new(),
            product_owner_id: String::new(),
        }
    }
}

impl ProductForm {
    /// Prefill the form for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            retail_price: product.retail_price.to_string(),
            wholesale_price: product.wholesale_price.to_string(),
            weight: product.weight.to_string(),
            visible: product.visible,
            stock_quantity: product.stock.to_string(),
            reserved: product.reserved.to_string(),
            override_available: product.override_available,
            category_id: product.category_id.clone().unwrap_or_default(),
            product_owner_id: product.product_owner_id.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.product_id.is_some()
    }

    /// Validate and build the product-handler body.
    pub fn to_payload(&self) -> Result<ProductHandlerPayload, ValidationError> {
        Ok(ProductHandlerPayload {
            p_product_id: self.product_id.clone(),
            p_sku: required_text("sku", &self.sku)?,
            p_name: required_text("name", &self.name)?,
            p_description: self.description.trim().to_string(),
            p_retail_price: parse_decimal("retail_price", &self.retail_price)?,
            p_wholesale_price: parse_decimal("wholesale_price", &self.wholesale_price)?,
            p_weight: parse_decimal("weight", &self.weight)?,
            p_visible: self.visible,
            p_stock_quantity: parse_count("stock_quantity", &self.stock_quantity)?,
            p_reserved: parse_count("reserved", &self.reserved)?,
            p_override_available: self.override_available,
            p_category_id: required_text("category_id", &self.category_id)?,
            p_product_owner_id: required_text("product_owner_id", &self.product_owner_id)?,
            p_selling_target: DEFAULT_SELLING_TARGET,
            p_spec_values: Vec::new(),
        })
    }
}

/// Body of `POST /functions/v1/product-handler`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHandlerPayload {
    /// Present only when updating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_product_id: Option<String>,
    pub p_sku: String,
    pub p_name: String,
    pub p_description: String,
    pub p_retail_price: f64,
    pub p_wholesale_price: f64,
    pub p_weight: f64,
    pub p_visible: bool,
    pub p_stock_quantity: i64,
    pub p_reserved: i64,
    pub p_override_available: bool,
    pub p_category_id: String,
    pub p_product_owner_id: String,
    pub p_selling_target: i64,
    pub p_spec_values: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            sku: "BK-001".into(),
            name: "Alf Layla".into(),
            description: " Classic ".into(),
            retail_price: "120.5".into(),
            wholesale_price: "90".into(),
            weight: "0.4".into(),
            stock_quantity: "15".into(),
            reserved: "0".into(),
            category_id: "c1".into(),
            product_owner_id: "o1".into(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_payload_for_new_product() {
        let payload = filled_form().to_payload().unwrap();
        assert_eq!(payload.p_retail_price, 120.5);
        assert_eq!(payload.p_stock_quantity, 15);
        assert_eq!(payload.p_description, "Classic");
        assert_eq!(payload.p_selling_target, 50);
        assert!(payload.p_visible);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("p_product_id").is_none());
        assert_eq!(json["p_spec_values"], serde_json::json!([]));
    }

    #[test]
    fn test_payload_for_edit_carries_id() {
        let mut form = filled_form();
        form.product_id = Some("p1".into());
        assert!(form.is_editing());
        assert_eq!(form.to_payload().unwrap().p_product_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_payload_rejects_bad_numbers() {
        let mut form = filled_form();
        form.stock_quantity = "ten".into();
        assert_eq!(form.to_payload().unwrap_err().field(), "stock_quantity");

        let mut form = filled_form();
        form.retail_price = "-1".into();
        assert_eq!(form.to_payload(), Err(ValidationError::Negative("retail_price")));
    }

    #[test]
    fn test_payload_requires_category_and_owner() {
        let mut form = filled_form();
        form.product_owner_id.clear();
        assert_eq!(form.to_payload(), Err(ValidationError::Required("product_owner_id")));
    }

    #[test]
    fn test_from_product_round_trips_into_payload() {
        let product = Product {
            product_id: Some("p9".into()),
            sku: "BK-9".into(),
            name: "Diwan".into(),
            retail_price: 75.0,
            wholesale_price: 50.0,
            weight: 1.0,
            visible: false,
            stock: 3,
            category_id: Some("c2".into()),
            product_owner_id: Some("o2".into()),
            ..Product::default()
        };
        let payload = ProductForm::from_product(&product).to_payload().unwrap();
        assert_eq!(payload.p_product_id.as_deref(), Some("p9"));
        assert_eq!(payload.p_retail_price, 75.0);
        assert!(!payload.p_visible);
        assert_eq!(payload.p_category_id, "c2");
    }

    #[test]
    fn test_availability_needs_visible_and_available() {
        let mut product = Product { visible: true, available: false, ..Product::default() };
        assert!(!product.is_available_for_sale());
        product.available = true;
        assert!(product.is_available_for_sale());
        assert_eq!(Product::handler_path(), "/functions/v1/product-handler");
    }

    #[test]
    fn test_lenient_row_parsing() {
        let json = r#"{"product_id":"p1","sku":"S","name":"N","retail_price":10,"stock":2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.retail_price, 10.0);
        assert!(product.category_id.is_none());
    }

    #[test]
    fn test_table_paths_match_order_embed() {
        assert_eq!(Product::list_path(), "/rest/v1/product?select=*");
        assert_eq!(Product::record_path("p1"), "/rest/v1/product?product_id=eq.p1");
        // The order search embeds the same table by name.
        let embed = format!("{}(*", Product::collection_name());
        assert!(crate::shared::smart_search::ORDER_AGGREGATE_SELECT.contains(&embed));
    }
}
