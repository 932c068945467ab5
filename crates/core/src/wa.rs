//! WhatsApp receipt formatting.
//!
//! Builds the `wa.me` deep link and the plain-text receipt shared with
//! customers. The message template bytes (section dividers, emoji labels,
//! footer signature) are load-bearing: receipts shared from earlier builds
//! use the same layout, so the literals here must not drift.

use crate::fmt::FormatConfig;
use crate::invoice::Invoice;
use crate::store::StoreProfile;

/// Heavy divider around the header and footer blocks.
const DIVIDER_HEAVY: &str = "━━━━━━━━━━━━━━━━";

/// Light divider around the item section.
const DIVIDER_LIGHT: &str = "─────────────────";

/// Build a `wa.me` deep link pre-filled with the purchase receipt.
///
/// The destination number is resolved by priority: `explicit_phone`, then the
/// invoice's own `customer_wa`, then the store's `wa_number`. When none is
/// present (or the winner has no digits) the generic share link without a
/// phone segment is returned.
///
/// Total over its inputs: malformed `items_json` renders zero item lines and
/// missing fields take the receipt defaults.
#[must_use]
pub fn whatsapp_link(
    invoice: &Invoice,
    store: &StoreProfile,
    explicit_phone: Option<&str>,
    fmt: &FormatConfig,
) -> String {
    let message = message_body(invoice, store, fmt);
    let encoded = urlencoding::encode(&message);

    let phone = explicit_phone
        .filter(|p| !p.is_empty())
        .or_else(|| invoice.customer_wa.as_deref().filter(|p| !p.is_empty()))
        .or_else(|| store.wa_number.as_deref().filter(|p| !p.is_empty()))
        .and_then(|p| fmt.normalize_phone(p));

    match phone {
        Some(phone) => format!("https://wa.me/{phone}?text={encoded}"),
        None => format!("https://wa.me/?text={encoded}"),
    }
}

/// Compose the fixed-template receipt message.
fn message_body(invoice: &Invoice, store: &StoreProfile, fmt: &FormatConfig) -> String {
    let mut message = String::new();

    // Header
    message.push_str("🧾 *NOTA PEMBELIAN*\n");
    message.push_str(DIVIDER_HEAVY);
    message.push('\n');
    message.push_str(&format!("🏪 *{}*\n", store.display_name()));
    if let Some(address) = store.address.as_deref().filter(|a| !a.is_empty()) {
        message.push_str(&format!("📍 {address}\n"));
    }
    message.push('\n');

    // Invoice info
    let invoice_no = if invoice.invoice_id.is_empty() {
        "INV-0000"
    } else {
        &invoice.invoice_id
    };
    message.push_str(&format!("📋 No: #{invoice_no}\n"));
    message.push_str(&format!("📅 {}\n", fmt.tanggal_long(&invoice.date)));
    let customer = if invoice.customer_name.is_empty() {
        "Pelanggan"
    } else {
        &invoice.customer_name
    };
    message.push_str(&format!("👤 {customer}\n"));
    message.push('\n');

    // Items
    message.push_str("*Detail Pembelian:*\n");
    message.push_str(DIVIDER_LIGHT);
    message.push('\n');
    for (idx, item) in invoice.items().iter().enumerate() {
        message.push_str(&format!("{}. {}\n", idx + 1, item.display_name()));
        message.push_str(&format!(
            "   {} x {} = {}\n",
            item.quantity(),
            fmt.rupiah(item.unit_price()),
            fmt.rupiah(item.line_total()),
        ));
    }
    message.push_str(DIVIDER_LIGHT);
    message.push('\n');
    message.push_str(&format!("*TOTAL: {}*\n", fmt.rupiah(invoice.total_amount)));
    message.push('\n');

    // Footer
    message.push_str(DIVIDER_HEAVY);
    message.push('\n');
    message.push_str("✨ Terima kasih atas kunjungan Anda!\n");
    message.push_str("🤲 Barakallah!\n");
    message.push('\n');
    message.push_str("_Powered by SI-ACIL_");

    message
}

/// Plain-text receipt for clipboard use.
///
/// Shorter than the WhatsApp body and carries no footer/branding block. The
/// total line always reflects the stored `total_amount`, never the item sum.
#[must_use]
pub fn plain_text(invoice: &Invoice, store: &StoreProfile, fmt: &FormatConfig) -> String {
    let mut text = String::new();
    text.push_str(&format!("NOTA #{}\n", invoice.invoice_id));
    text.push_str(&format!("{}\n", store.display_name()));
    text.push_str(&format!("Pelanggan: {}\n", invoice.customer_name));
    text.push_str("---\n");

    for item in invoice.items() {
        text.push_str(&format!(
            "{} x{} = {}\n",
            item.display_name(),
            item.quantity(),
            fmt.rupiah(item.line_total()),
        ));
    }

    text.push_str("---\n");
    text.push_str(&format!("TOTAL: {}", fmt.rupiah(invoice.total_amount)));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_invoice() -> Invoice {
        Invoice {
            invoice_id: "INV-1".to_string(),
            customer_name: "Budi".to_string(),
            customer_wa: None,
            date: "2025-08-07T14:30:00".to_string(),
            items_json: r#"[{"name":"Kopi","qty":2,"price":15000}]"#.to_string(),
            total_amount: 30000.0,
        }
    }

    fn fixture_store() -> StoreProfile {
        StoreProfile {
            store_name: "Warung A".to_string(),
            address: None,
            wa_number: None,
        }
    }

    fn decoded_body(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").expect("text parameter");
        urlencoding::decode(encoded).expect("valid encoding").into_owned()
    }

    #[test]
    fn test_message_body_renders_items_and_total() {
        let link = whatsapp_link(
            &fixture_invoice(),
            &fixture_store(),
            None,
            &FormatConfig::default(),
        );
        let body = decoded_body(&link);

        assert!(body.contains("🧾 *NOTA PEMBELIAN*"));
        assert!(body.contains("🏪 *Warung A*"));
        assert!(body.contains("📋 No: #INV-1"));
        assert!(body.contains("📅 07 Agustus 2025, 14.30"));
        assert!(body.contains("👤 Budi"));
        assert!(body.contains("1. Kopi\n   2 x Rp 15.000 = Rp 30.000"));
        assert!(body.contains("*TOTAL: Rp 30.000*"));
        assert!(body.ends_with("_Powered by SI-ACIL_"));
    }

    #[test]
    fn test_malformed_items_render_zero_item_lines() {
        let invoice = Invoice {
            items_json: "{{not json".to_string(),
            ..fixture_invoice()
        };
        let body = decoded_body(&whatsapp_link(
            &invoice,
            &fixture_store(),
            None,
            &FormatConfig::default(),
        ));

        assert!(!body.contains("1. "));
        // The total still comes from the stored amount.
        assert!(body.contains("*TOTAL: Rp 30.000*"));

        let text = plain_text(&invoice, &fixture_store(), &FormatConfig::default());
        assert!(!text.contains(" x"));
        assert!(text.ends_with("TOTAL: Rp 30.000"));
    }

    #[test]
    fn test_empty_inputs_take_receipt_defaults() {
        let invoice = Invoice {
            invoice_id: String::new(),
            customer_name: String::new(),
            customer_wa: None,
            date: String::new(),
            items_json: String::new(),
            total_amount: 0.0,
        };
        let body = decoded_body(&whatsapp_link(
            &invoice,
            &StoreProfile::default(),
            None,
            &FormatConfig::default(),
        ));

        assert!(body.contains("🏪 *Toko*"));
        assert!(body.contains("📋 No: #INV-0000"));
        assert!(body.contains("👤 Pelanggan"));
        assert!(body.contains("*TOTAL: Rp 0*"));
    }

    #[test]
    fn test_phone_priority_explicit_wins() {
        let invoice = Invoice {
            customer_wa: Some("0822".to_string()),
            ..fixture_invoice()
        };
        let store = StoreProfile {
            wa_number: Some("0833".to_string()),
            ..fixture_store()
        };
        let link = whatsapp_link(&invoice, &store, Some("0811"), &FormatConfig::default());
        assert!(link.starts_with("https://wa.me/62811?text="));
    }

    #[test]
    fn test_phone_falls_back_to_invoice_then_store() {
        let invoice = Invoice {
            customer_wa: Some("0822".to_string()),
            ..fixture_invoice()
        };
        let store = StoreProfile {
            wa_number: Some("0833".to_string()),
            ..fixture_store()
        };
        let link = whatsapp_link(&invoice, &store, None, &FormatConfig::default());
        assert!(link.starts_with("https://wa.me/62822?text="));

        let link = whatsapp_link(&fixture_invoice(), &store, None, &FormatConfig::default());
        assert!(link.starts_with("https://wa.me/62833?text="));
    }

    #[test]
    fn test_no_phone_yields_generic_link() {
        let link = whatsapp_link(
            &fixture_invoice(),
            &fixture_store(),
            None,
            &FormatConfig::default(),
        );
        assert!(link.starts_with("https://wa.me/?text="));
    }

    #[test]
    fn test_already_international_number_is_not_rewritten() {
        let link = whatsapp_link(
            &fixture_invoice(),
            &fixture_store(),
            Some("+6281234567890"),
            &FormatConfig::default(),
        );
        assert!(link.starts_with("https://wa.me/6281234567890?text="));
    }

    #[test]
    fn test_plain_text_total_ignores_item_sum() {
        // Stored total deliberately disagrees with the item sum; the stored
        // value wins everywhere.
        let invoice = Invoice {
            total_amount: 99999.0,
            ..fixture_invoice()
        };
        let text = plain_text(&invoice, &fixture_store(), &FormatConfig::default());
        assert!(text.contains("Kopi x2 = Rp 30.000"));
        assert!(text.ends_with("TOTAL: Rp 99.999"));
    }

    #[test]
    fn test_plain_text_layout() {
        let text = plain_text(
            &fixture_invoice(),
            &fixture_store(),
            &FormatConfig::default(),
        );
        let expected = "NOTA #INV-1\n\
                        Warung A\n\
                        Pelanggan: Budi\n\
                        ---\n\
                        Kopi x2 = Rp 30.000\n\
                        ---\n\
                        TOTAL: Rp 30.000";
        assert_eq!(text, expected);
    }
}
