//! WhatsApp share action.

use axum::extract::{Path, State};
use axum::response::Redirect;
use si_acil_core::wa;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `wa.me` deep link for an invoice and redirect to it.
///
/// The modal opens this route in a new browsing context, so the redirect
/// lands the cashier in WhatsApp with the receipt pre-filled. The invoice's
/// own number is passed as the explicit destination; the store number is the
/// formatter's last resort.
#[instrument(skip(state))]
pub async fn share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let invoice = state
        .acil()
        .get_invoice(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("nota {id}")))?;

    let link = wa::whatsapp_link(
        &invoice,
        state.store(),
        invoice.customer_wa.as_deref(),
        state.fmt(),
    );

    Ok(Redirect::to(&link))
}
