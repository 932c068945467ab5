//! View types for the Riwayat Nota templates.

use si_acil_core::{FormatConfig, Invoice};

/// Invoice row for the history list.
#[derive(Debug, Clone)]
pub struct NotaRowView {
    /// Invoice identifier shown in monospace under the customer name.
    pub invoice_id: String,
    /// Customer display name.
    pub customer_name: String,
    /// Customer WhatsApp number, shown when present.
    pub customer_wa: Option<String>,
    /// Sale date formatted for display.
    pub date: String,
    /// Total formatted in the UI currency form.
    pub total: String,
}

impl NotaRowView {
    /// Build a row from a fetched invoice.
    #[must_use]
    pub fn from_invoice(invoice: &Invoice, fmt: &FormatConfig) -> Self {
        Self {
            invoice_id: invoice.invoice_id.clone(),
            customer_name: invoice.customer_name.clone(),
            customer_wa: invoice.customer_wa.clone(),
            date: fmt.tanggal_short(&invoice.date),
            total: fmt.rupiah_display(invoice.total_amount),
        }
    }
}

/// Line item for the detail modal and the printable nota.
#[derive(Debug, Clone)]
pub struct ItemView {
    /// Product name with the receipt default applied.
    pub name: String,
    /// Quantity sold.
    pub qty: f64,
    /// Computed line total (unit price x qty); formatted by the template.
    pub line_total: f64,
}

/// Invoice detail for the modal and the printable nota.
#[derive(Debug, Clone)]
pub struct NotaDetailView {
    pub invoice_id: String,
    pub customer_name: String,
    pub customer_wa: Option<String>,
    /// Sale date formatted for display.
    pub date: String,
    /// Decoded line items; empty when `items_json` is malformed.
    pub items: Vec<ItemView>,
    /// Stored grand total; authoritative, never recomputed from items.
    pub total_amount: f64,
}

impl NotaDetailView {
    /// Build the detail view from a fetched invoice.
    #[must_use]
    pub fn from_invoice(invoice: &Invoice, fmt: &FormatConfig) -> Self {
        let items = invoice
            .items()
            .iter()
            .map(|item| ItemView {
                name: item.display_name().to_string(),
                qty: item.quantity(),
                line_total: item.line_total(),
            })
            .collect();

        Self {
            invoice_id: invoice.invoice_id.clone(),
            customer_name: invoice.customer_name.clone(),
            customer_wa: invoice.customer_wa.clone(),
            date: fmt.tanggal_short(&invoice.date),
            items,
            total_amount: invoice.total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_invoice() -> Invoice {
        Invoice {
            invoice_id: "INV-1".to_string(),
            customer_name: "Budi".to_string(),
            customer_wa: Some("081234567890".to_string()),
            date: "2025-08-07T14:30:00".to_string(),
            items_json: r#"[{"name":"Kopi","qty":2,"price":15000}]"#.to_string(),
            total_amount: 30000.0,
        }
    }

    #[test]
    fn test_row_view_formats_date_and_total() {
        let row = NotaRowView::from_invoice(&fixture_invoice(), &FormatConfig::default());
        assert_eq!(row.date, "07 Agu 2025, 14.30");
        assert_eq!(row.total, "Rp\u{a0}30.000");
        assert_eq!(row.customer_wa.as_deref(), Some("081234567890"));
    }

    #[test]
    fn test_detail_view_computes_line_totals() {
        let detail = NotaDetailView::from_invoice(&fixture_invoice(), &FormatConfig::default());
        assert_eq!(detail.items.len(), 1);
        let item = detail.items.first().expect("one item");
        assert_eq!(item.name, "Kopi");
        assert!((item.line_total - 30000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detail_view_malformed_items_render_empty() {
        let invoice = Invoice {
            items_json: "oops".to_string(),
            ..fixture_invoice()
        };
        let detail = NotaDetailView::from_invoice(&invoice, &FormatConfig::default());
        assert!(detail.items.is_empty());
        // The stored total is still displayed.
        assert!((detail.total_amount - 30000.0).abs() < f64::EPSILON);
    }
}
