//! Invoice records fetched from the SI-ACIL backend.

use serde::{Deserialize, Serialize};

/// A completed sale record with customer info, a serialized item list, and a
/// total.
///
/// Treated as an immutable snapshot once fetched; `invoice_id` is the only
/// identity. `total_amount` is authoritative for every displayed total and is
/// never recomputed from the item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice identifier (e.g., `INV-20250807-001`).
    #[serde(default)]
    pub invoice_id: String,
    /// Customer display name.
    #[serde(default)]
    pub customer_name: String,
    /// Customer WhatsApp number, as entered at the register.
    #[serde(default)]
    pub customer_wa: Option<String>,
    /// Sale timestamp, as stored by the backend.
    #[serde(default)]
    pub date: String,
    /// Line items, JSON-encoded by the backend.
    #[serde(default)]
    pub items_json: String,
    /// Grand total as charged.
    #[serde(default)]
    pub total_amount: f64,
}

impl Invoice {
    /// Decode the line items.
    ///
    /// Malformed `items_json` degrades to an empty list; display and message
    /// formatting never fail on a bad payload.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        serde_json::from_str(&self.items_json).unwrap_or_default()
    }
}

/// One product/quantity/price entry within an invoice's item list.
///
/// Fields are optional on the wire; the accessors substitute display defaults
/// so a partially populated item still renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub qty: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl LineItem {
    /// Product name, `"Item"` when absent or blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Item")
    }

    /// Quantity sold, defaulting to 1.
    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.qty.unwrap_or(1.0)
    }

    /// Unit price, defaulting to 0.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Line total, computed on demand and never stored.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice_with_items(items_json: &str) -> Invoice {
        Invoice {
            invoice_id: "INV-1".to_string(),
            customer_name: "Budi".to_string(),
            customer_wa: None,
            date: "2025-08-07T14:30:00".to_string(),
            items_json: items_json.to_string(),
            total_amount: 30000.0,
        }
    }

    #[test]
    fn test_items_decodes_valid_payload() {
        let invoice =
            invoice_with_items(r#"[{"name":"Kopi","qty":2,"price":15000}]"#);
        let items = invoice.items();
        assert_eq!(items.len(), 1);
        let item = items.first().expect("one item");
        assert_eq!(item.display_name(), "Kopi");
        assert!((item.quantity() - 2.0).abs() < f64::EPSILON);
        assert!((item.line_total() - 30000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_malformed_payload_degrades_to_empty() {
        assert!(invoice_with_items("not json").items().is_empty());
        assert!(invoice_with_items("{\"name\":").items().is_empty());
        assert!(invoice_with_items("").items().is_empty());
    }

    #[test]
    fn test_items_missing_fields_take_defaults() {
        let invoice = invoice_with_items(r#"[{}]"#);
        let items = invoice.items();
        let item = items.first().expect("one item");
        assert_eq!(item.display_name(), "Item");
        assert!((item.quantity() - 1.0).abs() < f64::EPSILON);
        assert!((item.unit_price() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_null_fields_take_defaults() {
        let invoice =
            invoice_with_items(r#"[{"name":null,"qty":null,"price":null}]"#);
        let items = invoice.items();
        let item = items.first().expect("one item");
        assert_eq!(item.display_name(), "Item");
        assert!((item.line_total() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invoice_deserializes_with_missing_fields() {
        let invoice: Invoice = serde_json::from_str(r#"{"invoice_id":"INV-9"}"#)
            .expect("partial invoice");
        assert_eq!(invoice.invoice_id, "INV-9");
        assert_eq!(invoice.customer_name, "");
        assert!(invoice.customer_wa.is_none());
        assert!((invoice.total_amount - 0.0).abs() < f64::EPSILON);
    }
}
