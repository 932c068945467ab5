//! HTTP client for the SI-ACIL backend invoice API.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Deserialize;
use si_acil_core::Invoice;
use tracing::instrument;

use super::AcilApiError;
use crate::config::AcilApiConfig;

/// Invoice list envelope returned by the backend.
#[derive(Debug, Deserialize)]
struct InvoiceListResponse {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Invoice>>,
}

/// Client for the SI-ACIL backend API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct AcilClient {
    inner: Arc<AcilClientInner>,
}

struct AcilClientInner {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl AcilClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &AcilApiConfig) -> Self {
        Self {
            inner: Arc::new(AcilClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                api_token: config.api_token.expose_secret().to_string(),
            }),
        }
    }

    /// Fetch the stored invoices, in the order the backend returns them.
    ///
    /// One request per call: no retry, no debounce. The caller decides what
    /// a failure means (the history list swallows it, the detail routes
    /// surface it).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, the
    /// body is not the expected envelope, or the backend reports failure.
    #[instrument(skip(self))]
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, AcilApiError> {
        let url = format!("{}/api/invoices", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(&url)
            .bearer_auth(&self.inner.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcilApiError::Status(status));
        }

        let body = response.text().await?;
        let envelope: InvoiceListResponse = serde_json::from_str(&body)?;

        if !envelope.success {
            return Err(AcilApiError::Backend(
                "backend reported failure".to_string(),
            ));
        }

        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetch one invoice by id.
    ///
    /// The history API only exposes the list endpoint, so this fetches the
    /// list and selects by `invoice_id`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::list_invoices`].
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, AcilApiError> {
        let invoices = self.list_invoices().await?;
        Ok(invoices.into_iter().find(|inv| inv.invoice_id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let envelope: InvoiceListResponse = serde_json::from_str(
            r#"{"success":true,"data":[{"invoice_id":"INV-1"}]}"#,
        )
        .expect("valid envelope");
        assert!(envelope.success);
        assert_eq!(envelope.data.map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_envelope_missing_data_field() {
        let envelope: InvoiceListResponse =
            serde_json::from_str(r#"{"success":true}"#).expect("valid envelope");
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = AcilClient::new(&AcilApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            api_token: secrecy::SecretString::from("token"),
        });
        assert_eq!(client.inner.base_url, "http://localhost:8080");
    }
}
