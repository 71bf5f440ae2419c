use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::placement::{NewPlacement, UpdatePlacement},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_placement(
    state: web::Data<AppState>,
    data: web::Json<NewPlacement>,
) -> Result<impl Responder, AppError> {
    let placement = state.placement_handler.create_placement(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(placement))
}

#[instrument(skip(state))]
pub async fn list_placements(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let placements = state.placement_handler.list_placements().await?;
    Ok(HttpResponse::Ok().json(placements))
}

#[instrument(skip(state))]
pub async fn get_placement(
    placement_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let placement = state.placement_handler.get_placement(placement_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(placement))
}

#[instrument(skip(state, data))]
pub async fn update_placement(
    placement_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdatePlacement>,
) -> Result<impl Responder, AppError> {
    let placement = state
        .placement_handler
        .update_placement(placement_id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(placement))
}

#[instrument(skip(state))]
pub async fn delete_placement(
    placement_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.placement_handler.delete_placement(placement_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn get_placement_evaluations(
    placement_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let evaluations = state
        .placement_handler
        .evaluations_for_placement(placement_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(evaluations))
}
