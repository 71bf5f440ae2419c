use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::employer::{NewEmployer, UpdateEmployer},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_employer(
    state: web::Data<AppState>,
    data: web::Json<NewEmployer>,
) -> Result<impl Responder, AppError> {
    let employer = state.employer_handler.create_employer(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(employer))
}

#[instrument(skip(state))]
pub async fn list_employers(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let employers = state.employer_handler.list_employers().await?;
    Ok(HttpResponse::Ok().json(employers))
}

#[instrument(skip(state))]
pub async fn get_employer(
    employer_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let employer = state.employer_handler.get_employer(employer_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employer))
}

#[instrument(skip(state, data))]
pub async fn update_employer(
    employer_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateEmployer>,
) -> Result<impl Responder, AppError> {
    let employer = state
        .employer_handler
        .update_employer(employer_id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(employer))
}

#[instrument(skip(state))]
pub async fn delete_employer(
    employer_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.employer_handler.delete_employer(employer_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
