//! Invoice detail modal handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::types::NotaDetailView;

/// Detail modal fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "nota/modal.html")]
pub struct NotaModalTemplate {
    pub nota: NotaDetailView,
}

/// Invoice detail modal fragment.
///
/// Shows the decoded line items with computed line totals and the stored
/// grand total, plus the two export actions.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<NotaModalTemplate, AppError> {
    let invoice = state
        .acil()
        .get_invoice(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("nota {id}")))?;

    Ok(NotaModalTemplate {
        nota: NotaDetailView::from_invoice(&invoice, state.fmt()),
    })
}
