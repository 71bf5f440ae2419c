use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::evaluation::{NewEvaluation, UpdateEvaluation},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_evaluation(
    state: web::Data<AppState>,
    data: web::Json<NewEvaluation>,
) -> Result<impl Responder, AppError> {
    let evaluation = state.evaluation_handler.create_evaluation(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(evaluation))
}

#[instrument(skip(state))]
pub async fn list_evaluations(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let evaluations = state.evaluation_handler.list_evaluations().await?;
    Ok(HttpResponse::Ok().json(evaluations))
}

#[instrument(skip(state))]
pub async fn get_evaluation(
    evaluation_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let evaluation = state.evaluation_handler.get_evaluation(evaluation_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(evaluation))
}

#[instrument(skip(state, data))]
pub async fn update_evaluation(
    evaluation_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateEvaluation>,
) -> Result<impl Responder, AppError> {
    let evaluation = state
        .evaluation_handler
        .update_evaluation(evaluation_id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(evaluation))
}

#[instrument(skip(state))]
pub async fn delete_evaluation(
    evaluation_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.evaluation_handler.delete_evaluation(evaluation_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
