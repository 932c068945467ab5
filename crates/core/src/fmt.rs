//! Locale and currency formatting for receipt display.
//!
//! Every locale-specific literal (digit grouping, currency prefixes, month
//! names, phone country code) lives in [`FormatConfig`]. The receipt and view
//! templates only ever call the methods here, so the id-ID/IDR/"62" profile
//! stays overridable without touching template logic.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Indonesian month names, abbreviated.
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt",
    "Nov", "Des",
];

/// Indonesian month names, full.
const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Locale, currency, and phone-prefix profile for receipt formatting.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Digit-group separator (`.` for id-ID).
    pub thousands_separator: char,
    /// Currency prefix used in chat message bodies.
    pub currency_prefix: &'static str,
    /// Currency prefix used in the UI; Intl-style with a no-break space.
    pub currency_display_prefix: &'static str,
    /// Country calling code substituted for the national trunk prefix.
    pub country_code: &'static str,
    /// National trunk prefix rewritten to the country code.
    pub trunk_prefix: char,
    /// Abbreviated month names, January first.
    pub months_short: [&'static str; 12],
    /// Full month names, January first.
    pub months_long: [&'static str; 12],
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            thousands_separator: '.',
            currency_prefix: "Rp ",
            currency_display_prefix: "Rp\u{a0}",
            country_code: "62",
            trunk_prefix: '0',
            months_short: MONTHS_SHORT,
            months_long: MONTHS_LONG,
        }
    }
}

impl FormatConfig {
    /// Group the digits of `n` with the configured separator,
    /// e.g. `15000` -> `"15.000"`.
    #[must_use]
    pub fn group_thousands(&self, n: i64) -> String {
        let digits = n.unsigned_abs().to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 + 1);
        if n < 0 {
            grouped.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(c);
        }
        grouped
    }

    /// Chat-message currency form: `"Rp " + grouped integer`.
    ///
    /// Absent/non-finite amounts render as zero.
    #[must_use]
    pub fn rupiah(&self, amount: f64) -> String {
        format!(
            "{}{}",
            self.currency_prefix,
            self.group_thousands(rounded(amount))
        )
    }

    /// UI currency form: `"Rp\u{a0}" + grouped integer`.
    ///
    /// Same grouping digits as [`Self::rupiah`], distinct prefix bytes. Both
    /// forms are part of the output contract at their respective call sites.
    #[must_use]
    pub fn rupiah_display(&self, amount: f64) -> String {
        format!(
            "{}{}",
            self.currency_display_prefix,
            self.group_thousands(rounded(amount))
        )
    }

    /// List/detail date form: `07 Agu 2025, 14.30`.
    ///
    /// Unparseable input is returned as-is.
    #[must_use]
    pub fn tanggal_short(&self, value: &str) -> String {
        self.tanggal(value, &self.months_short)
    }

    /// Message-body date form with the full month name:
    /// `07 Agustus 2025, 14.30`.
    #[must_use]
    pub fn tanggal_long(&self, value: &str) -> String {
        self.tanggal(value, &self.months_long)
    }

    fn tanggal(&self, value: &str, months: &[&'static str; 12]) -> String {
        parse_timestamp(value).map_or_else(
            || value.to_string(),
            |dt| {
                let month = months
                    .get(dt.month0() as usize)
                    .copied()
                    .unwrap_or_default();
                format!(
                    "{:02} {} {}, {:02}.{:02}",
                    dt.day(),
                    month,
                    dt.year(),
                    dt.hour(),
                    dt.minute()
                )
            },
        )
    }

    /// Strip formatting from a phone number and rewrite the national trunk
    /// prefix to the configured country code (`0812...` -> `62812...`).
    ///
    /// Returns `None` when no digits remain.
    #[must_use]
    pub fn normalize_phone(&self, raw: &str) -> Option<String> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let normalized = match digits.strip_prefix(self.trunk_prefix) {
            Some(rest) => format!("{}{rest}", self.country_code),
            None => digits,
        };
        Some(normalized)
    }
}

/// Integer-round a display amount; the saturating cast is fine for amounts.
#[allow(clippy::cast_possible_truncation)]
fn rounded(amount: f64) -> i64 {
    if amount.is_finite() { amount.round() as i64 } else { 0 }
}

/// Accept the timestamp shapes the backend has historically stored.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}
