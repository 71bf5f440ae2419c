use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::AuthClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn placements_per_employer(
    _claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let report = state.report_handler.placements_per_employer().await?;
    Ok(HttpResponse::Ok().json(report))
}
