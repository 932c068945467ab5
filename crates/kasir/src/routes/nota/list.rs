//! Riwayat Nota list handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

use super::types::NotaRowView;

/// History page shell.
///
/// Renders the heading and a fixed-count placeholder (3 skeleton rows);
/// HTMX swaps in the `/nota/daftar` fragment on load.
#[derive(Template, WebTemplate)]
#[template(path = "nota/index.html")]
pub struct NotaIndexTemplate;

/// Invoice rows fragment, or the empty state when there are none.
#[derive(Template, WebTemplate)]
#[template(path = "nota/daftar.html")]
pub struct NotaDaftarTemplate {
    pub notas: Vec<NotaRowView>,
}

/// Riwayat Nota page shell.
pub async fn index() -> NotaIndexTemplate {
    NotaIndexTemplate
}

/// Invoice rows fragment.
///
/// A fetch failure is logged and renders the empty list; the panel has no
/// user-facing error state for history loading and never retries.
#[instrument(skip(state))]
pub async fn daftar(State(state): State<AppState>) -> NotaDaftarTemplate {
    let notas = match state.acil().list_invoices().await {
        Ok(invoices) => invoices
            .iter()
            .map(|inv| NotaRowView::from_invoice(inv, state.fmt()))
            .collect(),
        Err(e) => {
            tracing::error!("Gagal memuat riwayat nota: {e}");
            Vec::new()
        }
    };

    NotaDaftarTemplate { notas }
}
