//! Product type definitions
//!
//! Wire format is camelCase to match the collaborator's JSON:
//! `productSerialNumber`, `productName`, `companyName`, `category`,
//! `stock`, `price`, plus three optional discount fields.

use serde::{Deserialize, Serialize};

/// The single domain entity managed by this layer.
///
/// A `Product` held in store state has always passed [`validate`]; the
/// store never keeps a value that failed shape or range checks.
/// Identity for update/delete is `product_serial_number` equality, an
/// externally supplied identifier rather than a generated key.
///
/// [`validate`]: super::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// External identifier; non-empty
    pub product_serial_number: String,
    /// Display name; non-empty
    pub product_name: String,
    /// Manufacturer; non-empty
    pub company_name: String,
    /// Category label; non-empty. The fixed option set is a UI concern,
    /// not enforced here.
    pub category: String,
    /// Units on hand; at least 1
    pub stock: f64,
    /// Unit price; at least 1
    pub price: f64,
    /// Positive when present, omitted otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wholesale_discount: Option<f64>,
    /// Positive when present, omitted otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_discount: Option<f64>,
    /// Positive when present, omitted otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_discount: Option<f64>,
}

/// Partial update payload for `PUT /api/products/{id}`.
///
/// Every field is optional; `None` fields are omitted from the request
/// body so the collaborator only sees the fields being changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wholesale_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_discount: Option<f64>,
}

impl ProductPatch {
    /// A patch that changes only the price
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// A patch that changes only the stock level
    pub fn stock(stock: f64) -> Self {
        Self {
            stock: Some(stock),
            ..Default::default()
        }
    }

    /// Returns true if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            product_serial_number: "SN-1".into(),
            product_name: "Widget".into(),
            company_name: "Acme".into(),
            category: "Bottle".into(),
            stock: 10.0,
            price: 5.0,
            wholesale_discount: None,
            normal_discount: None,
            special_discount: None,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "productSerialNumber": "SN-1",
                "productName": "Widget",
                "companyName": "Acme",
                "category": "Bottle",
                "stock": 10.0,
                "price": 5.0,
            })
        );
    }

    #[test]
    fn test_absent_discounts_are_omitted() {
        let product = Product {
            product_serial_number: "SN-1".into(),
            product_name: "Widget".into(),
            company_name: "Acme".into(),
            category: "Bottle".into(),
            stock: 1.0,
            price: 1.0,
            wholesale_discount: Some(2.5),
            normal_discount: None,
            special_discount: None,
        };

        let value = serde_json::to_value(&product).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("wholesaleDiscount"));
        assert!(!obj.contains_key("normalDiscount"));
        assert!(!obj.contains_key("specialDiscount"));
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = ProductPatch::price(50.0);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({ "price": 50.0 }));
    }

    #[test]
    fn test_empty_patch() {
        assert!(ProductPatch::default().is_empty());
        assert!(!ProductPatch::stock(3.0).is_empty());
    }
}
