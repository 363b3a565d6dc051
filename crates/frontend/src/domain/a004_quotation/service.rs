//! Side effects of quotation transitions.
//!
//! Quotations live on the client, so there is no endpoint to call yet.
//! Both functions answer without a body and the transition controller
//! applies the locally computed status.

use crate::shared::api_utils::ApiError;
use contracts::domain::a004_quotation::Quotation;

/// "Enviar por email".
pub async fn send_quotation(quotation: Quotation) -> Result<Option<Quotation>, ApiError> {
    log::info!("quotation {} sent to {}", quotation.id, quotation.cliente);
    Ok(None)
}

pub async fn accept_quotation(quotation: Quotation) -> Result<Option<Quotation>, ApiError> {
    log::info!("quotation {} accepted by {}", quotation.id, quotation.cliente);
    Ok(None)
}
