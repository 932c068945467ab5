//! Seller identity used in receipt headers.

use serde::{Deserialize, Serialize};

/// The seller's identity/contact info used in receipt headers.
///
/// Supplied by the session layer of the panel; read-only input to formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreProfile {
    /// Store display name.
    #[serde(default)]
    pub store_name: String,
    /// Street address printed under the store name.
    #[serde(default)]
    pub address: Option<String>,
    /// Store WhatsApp number, the last-resort share destination.
    #[serde(default)]
    pub wa_number: Option<String>,
}

impl StoreProfile {
    /// Store name with the generic fallback used on receipts.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.store_name.is_empty() {
            "Toko"
        } else {
            &self.store_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_generic() {
        assert_eq!(StoreProfile::default().display_name(), "Toko");

        let store = StoreProfile {
            store_name: "Warung A".to_string(),
            ..StoreProfile::default()
        };
        assert_eq!(store.display_name(), "Warung A");
    }
}
