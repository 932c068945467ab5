//! Integration tests for the SI-ACIL kasir panel.
//!
//! Each test stands up a stub backend serving a fixture invoice envelope and
//! the kasir router itself, both on ephemeral local listeners, then drives
//! the panel over HTTP the way a browser (and HTMX) would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p si-acil-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Json, Router, routing::get};
use secrecy::SecretString;
use si_acil_kasir::config::{AcilApiConfig, KasirConfig};
use si_acil_kasir::routes;
use si_acil_kasir::state::AppState;

/// A running kasir panel wired to a stub backend.
pub struct TestContext {
    /// HTTP client with redirects disabled, so `Location` headers are
    /// observable.
    pub client: reqwest::Client,
    /// Base URL of the running panel.
    pub base_url: String,
}

impl TestContext {
    /// Spawn a stub backend that serves `payload` from `/api/invoices`, then
    /// the kasir panel pointed at it.
    ///
    /// # Panics
    ///
    /// Panics when a local listener cannot be bound; tests cannot proceed
    /// without one.
    pub async fn spawn(payload: serde_json::Value) -> Self {
        // Stub SI-ACIL backend.
        let backend = Router::new().route(
            "/api/invoices",
            get(move || {
                let payload = payload.clone();
                async move { Json(payload) }
            }),
        );
        let backend_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let backend_addr = backend_listener.local_addr().expect("stub backend addr");
        tokio::spawn(async move {
            axum::serve(backend_listener, backend)
                .await
                .expect("stub backend server");
        });

        // Kasir panel pointed at the stub.
        let config = KasirConfig {
            host: "127.0.0.1".parse().expect("loopback address"),
            port: 0,
            acil: AcilApiConfig {
                base_url: format!("http://{backend_addr}"),
                api_token: SecretString::from("integration-test-token"),
            },
            store_name: "Warung A".to_string(),
            store_address: Some("Jl. Mawar No. 1".to_string()),
            store_wa: Some("0899000111".to_string()),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        let app = routes::routes().with_state(AppState::new(config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind kasir panel");
        let addr = listener.local_addr().expect("kasir panel addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("kasir server");
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("reqwest client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// GET a panel path, returning status and body.
    ///
    /// # Panics
    ///
    /// Panics when the request itself fails; the panel is local, so that is
    /// a harness bug, not a test outcome.
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("panel request");
        let status = response.status();
        let body = response.text().await.expect("panel response body");
        (status, body)
    }
}
