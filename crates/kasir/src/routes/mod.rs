//! HTTP route handlers for the kasir panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//!
//! # Riwayat Nota
//! GET  /                    - History page shell (alias of /nota)
//! GET  /nota                - History page shell with skeleton rows
//! GET  /nota/daftar         - Invoice rows fragment (HTMX, swapped on load)
//! GET  /nota/{id}           - Invoice detail modal fragment (HTMX)
//! GET  /nota/{id}/whatsapp  - 303 redirect to the wa.me share link
//! GET  /nota/{id}/cetak     - Printable nota page
//! ```

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod nota;

/// Build the panel router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(nota::list::index))
        .route("/nota", get(nota::list::index))
        .route("/nota/daftar", get(nota::list::daftar))
        .route("/nota/{id}", get(nota::detail::show))
        .route("/nota/{id}/whatsapp", get(nota::whatsapp::share))
        .route("/nota/{id}/cetak", get(nota::cetak::print))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}
