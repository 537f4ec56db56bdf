//! Helpers for the hosted REST surface (PostgREST filter grammar).
//!
//! Filters take the form `column=op.value`. Values are percent-encoded when
//! they are placed into a URL so user input can never inject extra
//! parameters or break out of its filter.

/// Path prefix for table access
pub const REST_PREFIX: &str = "/rest/v1";

/// Path prefix for edge functions
pub const FUNCTIONS_PREFIX: &str = "/functions/v1";

/// Header asking the backend to echo the written rows back
pub const PREFER_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");

/// Percent-encode a single query component.
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// `column=eq.value` with the value encoded.
pub fn eq_filter(column: &str, value: &str) -> String {
    format!("{}=eq.{}", encode_component(column), encode_component(value))
}

/// "/rest/v1/{resource}"
pub fn collection_path(resource: &str) -> String {
    format!("{}/{}", REST_PREFIX, resource)
}

/// "/rest/v1/{resource}?select=*"
pub fn select_all_path(resource: &str) -> String {
    format!("{}?select=*", collection_path(resource))
}

/// "/rest/v1/{resource}?{id_column}=eq.{id}"
pub fn record_path(resource: &str, id_column: &str, id: &str) -> String {
    format!("{}?{}", collection_path(resource), eq_filter(id_column, id))
}

/// "/functions/v1/{name}"
pub fn function_path(name: &str) -> String {
    format!("{}/{}", FUNCTIONS_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_encodes_value() {
        assert_eq!(
            record_path("categories", "category_id", "a&b=c"),
            "/rest/v1/categories?category_id=eq.a%26b%3Dc"
        );
    }

    #[test]
    fn test_select_all_path() {
        assert_eq!(select_all_path("product_owner"), "/rest/v1/product_owner?select=*");
    }

    #[test]
    fn test_function_path() {
        assert_eq!(function_path("product-handler"), "/functions/v1/product-handler");
    }
}
