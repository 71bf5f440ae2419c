use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use crate::{entities::token::Claims, errors::AuthError};

/// Extractor for authenticated claims, ensuring the student is authenticated.
/// Returns 401 if the request carries no verified token.
/// Usage: Add `claims: AuthClaims` as a parameter to your handler function.
#[derive(Debug)]
pub struct AuthClaims(pub Claims);

impl AuthClaims {
    /// Id of the authenticated student
    pub fn student_id(&self) -> Result<i64, AuthError> {
        self.0.student_id().ok_or(AuthError::InvalidUserId)
    }

    /// Returns 403 unless the token belongs to the student at `student_id`.
    pub fn ensure_student(&self, student_id: i64) -> Result<(), AuthError> {
        if self.student_id()? == student_id {
            Ok(())
        } else {
            tracing::warn!(
                token_student = %self.0.sub,
                target_student = student_id,
                "Student tried to access another student's record"
            );
            Err(AuthError::Forbidden("You can only access your own record".into()))
        }
    }
}

impl FromRequest for AuthClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthClaims(claims.clone()))),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
