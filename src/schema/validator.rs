//! Product schema validator
//!
//! Validation semantics:
//! - Required string fields must be present, strings, and non-empty
//! - `stock` and `price` must be numbers >= 1
//! - Discount fields are optional but must be > 0 when present
//! - No implicit coercion: a JSON string "5" fails a numeric check
//!
//! All failing fields are collected before returning, so callers see the
//! complete set of problems in one [`ValidationError`].

use serde_json::{Map, Value};

use super::errors::{FieldIssue, ValidationError, ValidationResult};
use super::types::Product;

/// Validates an arbitrary JSON candidate and decodes it into a [`Product`].
///
/// Pure function; the candidate is never mutated. Used for outgoing form
/// data before submission and for collaborator payloads before they enter
/// store state.
///
/// # Errors
///
/// Returns [`ValidationError`] enumerating every failing field when the
/// candidate is not an object or any attribute constraint is violated.
pub fn validate(candidate: &Value) -> ValidationResult<Product> {
    let obj = match candidate.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::not_an_object(json_type_name(candidate))),
    };

    let mut issues = Vec::new();

    let product_serial_number = require_nonempty_string(
        obj,
        "productSerialNumber",
        "Product Serial Number is required",
        &mut issues,
    );
    let product_name =
        require_nonempty_string(obj, "productName", "Product Name is required", &mut issues);
    let company_name =
        require_nonempty_string(obj, "companyName", "Company Name is required", &mut issues);
    let category = require_nonempty_string(obj, "category", "Category is required", &mut issues);

    let stock = require_number_at_least_one(obj, "stock", "Stock", &mut issues);
    let price = require_number_at_least_one(obj, "price", "Price", &mut issues);

    let wholesale_discount =
        optional_positive_number(obj, "wholesaleDiscount", "Wholesale Discount", &mut issues);
    let normal_discount =
        optional_positive_number(obj, "normalDiscount", "Normal Discount", &mut issues);
    let special_discount =
        optional_positive_number(obj, "specialDiscount", "Special Discount", &mut issues);

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    // Every field was checked above; the unwraps cannot fire once issues
    // is empty.
    Ok(Product {
        product_serial_number: product_serial_number.unwrap(),
        product_name: product_name.unwrap(),
        company_name: company_name.unwrap(),
        category: category.unwrap(),
        stock: stock.unwrap(),
        price: price.unwrap(),
        wholesale_discount,
        normal_discount,
        special_discount,
    })
}

/// Non-empty string check for required text fields
fn require_nonempty_string(
    obj: &Map<String, Value>,
    key: &str,
    required_message: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            issues.push(FieldIssue::new(key, required_message));
            None
        }
        Some(other) => {
            issues.push(FieldIssue::new(
                key,
                format!("Expected a string, got {}", json_type_name(other)),
            ));
            None
        }
    }
}

/// Numeric check for `stock` and `price`: present, a number, and >= 1
fn require_number_at_least_one(
    obj: &Map<String, Value>,
    key: &str,
    label: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<f64> {
    match obj.get(key) {
        Some(value) if value.is_number() => {
            let n = value.as_f64().unwrap_or(f64::NAN);
            if n >= 1.0 {
                Some(n)
            } else {
                issues.push(FieldIssue::new(key, format!("{} must be at least 1", label)));
                None
            }
        }
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(key, format!("{} must be a number", label)));
            None
        }
        Some(other) => {
            issues.push(FieldIssue::new(
                key,
                format!(
                    "{} must be a number, got {}",
                    label,
                    json_type_name(other)
                ),
            ));
            None
        }
    }
}

/// Optional discount check: absent is fine, anything present must be a
/// number > 0. Zero-as-sentinel is rejected, never silently mapped to
/// "no discount".
fn optional_positive_number(
    obj: &Map<String, Value>,
    key: &str,
    label: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<f64> {
    match obj.get(key) {
        None => None,
        Some(value) if value.is_number() => {
            let n = value.as_f64().unwrap_or(f64::NAN);
            if n > 0.0 {
                Some(n)
            } else {
                issues.push(FieldIssue::new(
                    key,
                    format!("{} must be a positive number", label),
                ));
                None
            }
        }
        Some(_) => {
            issues.push(FieldIssue::new(
                key,
                format!("{} must be a positive number", label),
            ));
            None
        }
    }
}

/// JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "productSerialNumber": "SN-100",
            "productName": "Widget",
            "companyName": "Acme",
            "category": "Bottle",
            "stock": 10,
            "price": 5,
        })
    }

    #[test]
    fn test_valid_candidate_decodes() {
        let product = validate(&sample()).unwrap();
        assert_eq!(product.product_serial_number, "SN-100");
        assert_eq!(product.stock, 10.0);
        assert_eq!(product.wholesale_discount, None);
    }

    #[test]
    fn test_missing_required_string_reports_field() {
        for field in ["productSerialNumber", "productName", "companyName", "category"] {
            let mut candidate = sample();
            candidate.as_object_mut().unwrap().remove(field);
            let err = validate(&candidate).unwrap_err();
            assert!(err.names_field(field), "expected issue for {}", field);
        }
    }

    #[test]
    fn test_empty_string_reports_field() {
        let mut candidate = sample();
        candidate["productName"] = json!("");
        let err = validate(&candidate).unwrap_err();
        assert!(err.names_field("productName"));
        assert_eq!(err.issues()[0].reason, "Product Name is required");
    }

    #[test]
    fn test_stock_and_price_below_one_fail() {
        for field in ["stock", "price"] {
            for bad in [0, -5] {
                let mut candidate = sample();
                candidate[field] = json!(bad);
                let err = validate(&candidate).unwrap_err();
                assert!(err.names_field(field));
            }
        }
    }

    #[test]
    fn test_stock_and_price_at_exactly_one_pass() {
        let mut candidate = sample();
        candidate["stock"] = json!(1);
        candidate["price"] = json!(1);
        let product = validate(&candidate).unwrap();
        assert_eq!(product.stock, 1.0);
        assert_eq!(product.price, 1.0);
    }

    #[test]
    fn test_numeric_string_is_not_coerced() {
        let mut candidate = sample();
        candidate["price"] = json!("5");
        let err = validate(&candidate).unwrap_err();
        assert!(err.names_field("price"));
    }

    #[test]
    fn test_zero_or_negative_discount_fails() {
        for field in ["wholesaleDiscount", "normalDiscount", "specialDiscount"] {
            for bad in [0.0, -2.5] {
                let mut candidate = sample();
                candidate[field] = json!(bad);
                let err = validate(&candidate).unwrap_err();
                assert!(err.names_field(field));
            }
        }
    }

    #[test]
    fn test_positive_or_absent_discount_passes() {
        let mut candidate = sample();
        candidate["normalDiscount"] = json!(0.1);
        let product = validate(&candidate).unwrap();
        assert_eq!(product.normal_discount, Some(0.1));
        assert_eq!(product.special_discount, None);
    }

    #[test]
    fn test_all_failing_fields_reported_together() {
        let candidate = json!({
            "productSerialNumber": "",
            "stock": 0,
            "specialDiscount": -1,
        });
        let err = validate(&candidate).unwrap_err();
        assert!(err.names_field("productSerialNumber"));
        assert!(err.names_field("productName"));
        assert!(err.names_field("companyName"));
        assert!(err.names_field("category"));
        assert!(err.names_field("stock"));
        assert!(err.names_field("price"));
        assert!(err.names_field("specialDiscount"));
    }

    #[test]
    fn test_non_object_candidate() {
        let err = validate(&json!([1, 2, 3])).unwrap_err();
        assert!(err.names_field("$root"));
        assert!(format!("{}", err).contains("array"));
    }
}
