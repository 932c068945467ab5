//! Printable nota page.
//!
//! The browser's print dialog turns this page into the PDF the register
//! hands out; the panel itself does not rasterize anything.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use si_acil_core::wa;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::types::NotaDetailView;

/// Printable nota template.
#[derive(Template, WebTemplate)]
#[template(path = "nota/cetak.html")]
pub struct NotaCetakTemplate {
    pub store_name: String,
    pub store_address: Option<String>,
    pub nota: NotaDetailView,
    /// Plain-text receipt offered for copying next to the printable nota.
    pub teks_nota: String,
    pub printed_at: String,
}

/// Printable nota page.
#[instrument(skip(state))]
pub async fn print(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<NotaCetakTemplate, AppError> {
    let invoice = state
        .acil()
        .get_invoice(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("nota {id}")))?;

    Ok(NotaCetakTemplate {
        store_name: state.store().display_name().to_string(),
        store_address: state.store().address.clone(),
        nota: NotaDetailView::from_invoice(&invoice, state.fmt()),
        teks_nota: wa::plain_text(&invoice, state.store(), state.fmt()),
        printed_at: chrono::Local::now().format("%d/%m/%Y %H.%M").to_string(),
    })
}
