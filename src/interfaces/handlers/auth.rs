use actix_web::{post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::entities::student::LoginStudent;
use crate::errors::AuthError;
use crate::AppState;

#[post("/login")]
#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginStudent>,
) -> Result<impl Responder, AuthError> {
    let auth_response = state.auth_handler.login(credentials.into_inner()).await?;
    Ok(HttpResponse::Ok().json(auth_response))
}
