use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Lenient field readers
// ============================================================================
//
// A user `select` can trim the projection down to a few columns, and ids or
// amounts may come back as either numbers or strings. Every field therefore
// defaults, and scalars accept null, strings and numbers alike.

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Read model
// ============================================================================

/// One order with everything embedded by the search projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderAggregate {
    #[serde(default, deserialize_with = "text")]
    pub order_id: String,
    #[serde(default, deserialize_with = "text")]
    pub order_number: String,
    #[serde(default, deserialize_with = "text")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "number")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(default, deserialize_with = "text")]
    pub user_id: String,
    #[serde(default)]
    pub user_comments: Option<String>,
    #[serde(default)]
    pub admin_comments: Option<String>,
    #[serde(default)]
    pub user_profiles_user: Option<CustomerProfile>,
    #[serde(default, deserialize_with = "or_default")]
    pub order_shipment: Vec<Shipment>,
    #[serde(default, deserialize_with = "or_default")]
    pub order_payment: Vec<Payment>,
    #[serde(default, deserialize_with = "or_default")]
    pub order_products: Vec<OrderLine>,
    #[serde(default, deserialize_with = "or_default")]
    pub refunds: Vec<Refund>,
}

impl OrderAggregate {
    pub fn customer_name(&self) -> Option<&str> {
        self.user_profiles_user
            .as_ref()
            .map(|p| p.full_name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Key used to track expanded cards; falls back to the order number.
    pub fn display_key(&self) -> &str {
        if self.order_id.is_empty() {
            &self.order_number
        } else {
            &self.order_id
        }
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::for_status(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerProfile {
    #[serde(default, deserialize_with = "text")]
    pub full_name: String,
}

/// `{ name }` of an embedded category or shipping provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductRef {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub sku: String,
    #[serde(default, deserialize_with = "number")]
    pub retail_price: f64,
    #[serde(default)]
    pub category: Option<NamedRef>,
}

impl ProductRef {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// Order line with the price at the time of ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderLine {
    #[serde(default, deserialize_with = "number")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "number")]
    pub retail_price: f64,
    #[serde(default)]
    pub product: Option<ProductRef>,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.retail_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShipmentLine {
    #[serde(default, deserialize_with = "number")]
    pub quantity: f64,
    #[serde(default)]
    pub product: Option<ProductRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Shipment {
    #[serde(default, deserialize_with = "text")]
    pub number: String,
    #[serde(default, deserialize_with = "text")]
    pub service: String,
    #[serde(default, deserialize_with = "text")]
    pub created_at: String,
    #[serde(default)]
    pub shipping_providers: Option<NamedRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub shipment_products: Vec<ShipmentLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Payment {
    #[serde(default, deserialize_with = "number")]
    pub amount: f64,
    #[serde(default, deserialize_with = "text")]
    pub method: String,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(default, deserialize_with = "text")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Refund {
    #[serde(default, deserialize_with = "number")]
    pub amount: f64,
    #[serde(default, deserialize_with = "text")]
    pub reason: String,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(default, deserialize_with = "text")]
    pub created_at: String,
}

// ============================================================================
// Status tones
// ============================================================================

/// Colour family of an order/payment/refund status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Primary,
    Info,
    Success,
    Error,
    Neutral,
}

impl StatusTone {
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "pending" => StatusTone::Warning,
            "confirmed" => StatusTone::Primary,
            "shipped" => StatusTone::Info,
            "delivered" => StatusTone::Success,
            "cancelled" => StatusTone::Error,
            _ => StatusTone::Neutral,
        }
    }

    /// Badge variant name
    pub fn badge_variant(&self) -> &'static str {
        match self {
            StatusTone::Warning => "warning",
            StatusTone::Primary => "primary",
            StatusTone::Info => "info",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
            StatusTone::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_aggregate_parses() {
        let json = r#"[{
            "order_id": 42,
            "order_number": "ORD-123",
            "timestamp": "2024-06-01T12:30:00+00:00",
            "total_amount": "250.50",
            "status": "Shipped",
            "user_id": "u1",
            "user_profiles_user": {"full_name": "Mona Adel"},
            "order_products": [
                {"quantity": 2, "retail_price": 100, "product": {"name": "Diwan", "sku": "BK-1", "category": {"name": "Poetry"}}}
            ],
            "order_shipment": [
                {"number": "SH-1", "service": "express", "created_at": "2024-06-02T09:00:00+00:00",
                 "shipping_providers": {"name": "Aramex"},
                 "shipment_products": [{"quantity": 2, "product": {"name": "Diwan", "retail_price": 100}}]}
            ],
            "order_payment": [{"amount": 250.5, "method": "card", "status": "paid", "created_at": null}],
            "refunds": []
        }]"#;
        let orders: Vec<OrderAggregate> = serde_json::from_str(json).unwrap();
        let order = &orders[0];
        assert_eq!(order.order_id, "42");
        assert_eq!(order.total_amount, 250.5);
        assert_eq!(order.customer_name(), Some("Mona Adel"));
        assert_eq!(order.order_products[0].line_total(), 200.0);
        assert_eq!(
            order.order_products[0].product.as_ref().and_then(|p| p.category_name()),
            Some("Poetry")
        );
        assert_eq!(order.order_shipment[0].shipping_providers.as_ref().unwrap().name, "Aramex");
        assert_eq!(order.order_payment[0].created_at, "");
        assert_eq!(order.tone(), StatusTone::Info);
    }

    #[test]
    fn test_partial_projection_parses() {
        let orders: Vec<OrderAggregate> =
            serde_json::from_str(r#"[{"order_number": "ORD-9", "order_products": null}]"#).unwrap();
        assert_eq!(orders[0].order_number, "ORD-9");
        assert!(orders[0].order_products.is_empty());
        assert!(orders[0].refunds.is_empty());
        assert_eq!(orders[0].display_key(), "ORD-9");
        assert_eq!(orders[0].customer_name(), None);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(StatusTone::for_status("pending"), StatusTone::Warning);
        assert_eq!(StatusTone::for_status("CONFIRMED"), StatusTone::Primary);
        assert_eq!(StatusTone::for_status("delivered").badge_variant(), "success");
        assert_eq!(StatusTone::for_status("cancelled").badge_variant(), "error");
        assert_eq!(StatusTone::for_status("refunded"), StatusTone::Neutral);
        assert_eq!(StatusTone::for_status(""), StatusTone::Neutral);
    }
}
