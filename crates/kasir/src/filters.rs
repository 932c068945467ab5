//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use si_acil_core::FormatConfig;

/// Format a numeric amount in the UI currency form (`Rp 15.000` with a
/// no-break space after the symbol).
///
/// Non-numeric input renders as zero, matching the receipt formatter.
///
/// Usage in templates: `{{ item.line_total|rupiah }}`
#[askama::filter_fn]
pub fn rupiah(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let value = amount.to_string().parse::<f64>().unwrap_or(0.0);
    Ok(FormatConfig::default().rupiah_display(value))
}

/// Format a stored timestamp for list/detail display (`07 Agu 2025, 14.30`).
///
/// Usage in templates: `{{ nota.date|tanggal }}`
#[askama::filter_fn]
pub fn tanggal(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(FormatConfig::default().tanggal_short(&value.to_string()))
}
