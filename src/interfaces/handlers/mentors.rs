use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::mentor::{NewMentor, UpdateMentor},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_mentor(
    state: web::Data<AppState>,
    data: web::Json<NewMentor>,
) -> Result<impl Responder, AppError> {
    let mentor = state.mentor_handler.create_mentor(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(mentor))
}

#[instrument(skip(state))]
pub async fn list_mentors(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let mentors = state.mentor_handler.list_mentors().await?;
    Ok(HttpResponse::Ok().json(mentors))
}

#[instrument(skip(state))]
pub async fn get_mentor(
    mentor_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let mentor = state.mentor_handler.get_mentor(mentor_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(mentor))
}

#[instrument(skip(state, data))]
pub async fn update_mentor(
    mentor_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateMentor>,
) -> Result<impl Responder, AppError> {
    let mentor = state
        .mentor_handler
        .update_mentor(mentor_id.into_inner(), data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(mentor))
}

#[instrument(skip(state))]
pub async fn delete_mentor(
    mentor_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.mentor_handler.delete_mentor(mentor_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
