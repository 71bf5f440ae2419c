use std::sync::Arc;

use validator::Validate;

use crate::entities::mentor::{Mentor, NewMentor, UpdateMentor};
use crate::errors::AppError;
use crate::repositories::mentor::MentorRepository;

pub struct MentorHandler {
    pub mentor_repo: Arc<dyn MentorRepository>,
}

impl MentorHandler {
    pub fn new(mentor_repo: Arc<dyn MentorRepository>) -> Self {
        MentorHandler { mentor_repo }
    }

    pub async fn create_mentor(&self, request: NewMentor) -> Result<Mentor, AppError> {
        request.validate()?;
        let mentor = request.normalized();

        if self.mentor_repo.get_mentor_by_email(&mentor.email).await?.is_some() {
            return Err(AppError::Conflict("Mentor with this email already exists".to_string()));
        }

        self.mentor_repo.create_mentor(&mentor).await
    }

    pub async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError> {
        self.mentor_repo.list_mentors().await
    }

    pub async fn get_mentor(&self, id: i64) -> Result<Mentor, AppError> {
        self.mentor_repo
            .get_mentor_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mentor not found".to_string()))
    }

    pub async fn update_mentor(&self, id: i64, request: UpdateMentor) -> Result<Mentor, AppError> {
        request.validate()?;
        if request.is_empty() {
            return Err(AppError::invalid_field("body", "At least one field must be provided"));
        }
        let changes = request.normalized();

        if let Some(email) = changes.email.as_deref() {
            if let Some(other) = self.mentor_repo.get_mentor_by_email(email).await? {
                if other.id != id {
                    return Err(AppError::Conflict("Mentor with this email already exists".to_string()));
                }
            }
        }

        self.mentor_repo.update_mentor(id, &changes).await
    }

    pub async fn delete_mentor(&self, id: i64) -> Result<(), AppError> {
        self.mentor_repo.delete_mentor(id).await
    }
}
