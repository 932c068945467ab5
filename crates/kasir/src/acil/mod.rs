//! SI-ACIL backend API client.
//!
//! The history panel consumes a single inbound contract: the backend's
//! invoice list endpoint, wrapped in a `{ "success": bool, "data": [...] }`
//! envelope. The client is read-only; the panel never writes invoices.

mod client;

pub use client::AcilClient;

use thiserror::Error;

/// Errors that can occur when talking to the SI-ACIL backend API.
#[derive(Debug, Error)]
pub enum AcilApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend replied with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Backend envelope reported failure.
    #[error("Backend error: {0}")]
    Backend(String),
}
