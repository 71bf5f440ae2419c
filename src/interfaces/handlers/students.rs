use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::student::{NewStudent, UpdateStudent},
    errors::AppError,
    use_cases::extractors::AuthClaims,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_student(
    state: web::Data<AppState>,
    data: web::Json<NewStudent>,
) -> Result<impl Responder, AppError> {
    let student = state.student_handler.register(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(student))
}

#[instrument(skip(state))]
pub async fn list_students(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let students = state.student_handler.list_students().await?;
    Ok(HttpResponse::Ok().json(students))
}

#[instrument(skip(state))]
pub async fn get_student(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let student = state.student_handler.get_student(student_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(student))
}

#[instrument(skip(claims, state))]
pub async fn me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, actix_web::Error> {
    let student = state.student_handler.get_student(claims.student_id()?).await?;
    Ok(HttpResponse::Ok().json(student))
}

#[instrument(skip(claims, state, data))]
pub async fn update_student(
    claims: AuthClaims,
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateStudent>,
) -> Result<impl Responder, actix_web::Error> {
    let student_id = student_id.into_inner();
    claims.ensure_student(student_id)?;

    let student = state.student_handler.update_student(student_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(student))
}

#[instrument(skip(claims, state))]
pub async fn delete_student(
    claims: AuthClaims,
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, actix_web::Error> {
    let student_id = student_id.into_inner();
    claims.ensure_student(student_id)?;

    state.student_handler.delete_student(student_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(claims, state))]
pub async fn get_student_evaluations(
    claims: AuthClaims,
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, actix_web::Error> {
    let student_id = student_id.into_inner();
    claims.ensure_student(student_id)?;

    let evaluations = state.student_handler.evaluations_for_student(student_id).await?;
    Ok(HttpResponse::Ok().json(evaluations))
}
