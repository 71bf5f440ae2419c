use std::sync::Arc;

use validator::Validate;

use crate::auth::password::verify_password;
use crate::entities::student::{normalize_email, LoginStudent, Student};
use crate::entities::token::AuthResponse;
use crate::errors::AuthError;
use crate::repositories::{student::StudentRepository, token::TokenServiceRepository};

pub struct AuthHandler {
    pub student_repo: Arc<dyn StudentRepository>,
    pub token_service: Arc<dyn TokenServiceRepository>,
}

impl AuthHandler {
    pub fn new(
        student_repo: Arc<dyn StudentRepository>,
        token_service: Arc<dyn TokenServiceRepository>,
    ) -> Self {
        AuthHandler {
            student_repo,
            token_service,
        }
    }

    /// Logs in a student by checking credentials and issuing an access token.
    /// Unknown email and wrong password fail the same way.
    pub async fn login(&self, request: LoginStudent) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let student = self.student_repo.get_student_by_email(&normalize_email(&request.email))
            .await
            .map_err(|e| {
                tracing::error!("Student lookup failed during login: {}", e);
                AuthError::InternalError
            })?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &student.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let response = self.create_auth_response(&student)?;

        tracing::info!(student_id = student.id, "Student logged in successfully");
        Ok(response)
    }

    pub fn create_auth_response(&self, student: &Student) -> Result<AuthResponse, AuthError> {
        let access_token = self.token_service.create_jwt(student)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        Ok(AuthResponse::new(access_token, self.token_service.expires_in_seconds()))
    }
}
