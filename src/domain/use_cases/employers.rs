use std::sync::Arc;

use validator::Validate;

use crate::entities::employer::{Employer, NewEmployer, UpdateEmployer};
use crate::errors::AppError;
use crate::repositories::employer::EmployerRepository;

pub struct EmployerHandler {
    pub employer_repo: Arc<dyn EmployerRepository>,
}

impl EmployerHandler {
    pub fn new(employer_repo: Arc<dyn EmployerRepository>) -> Self {
        EmployerHandler { employer_repo }
    }

    /// Creates an employer; company names are unique
    pub async fn create_employer(&self, request: NewEmployer) -> Result<Employer, AppError> {
        request.validate()?;
        let employer = request.normalized();

        if self.employer_repo.get_employer_by_name(&employer.name).await?.is_some() {
            return Err(AppError::Conflict("Employer with this name already exists".to_string()));
        }

        self.employer_repo.create_employer(&employer).await
    }

    pub async fn list_employers(&self) -> Result<Vec<Employer>, AppError> {
        self.employer_repo.list_employers().await
    }

    pub async fn get_employer(&self, id: i64) -> Result<Employer, AppError> {
        self.employer_repo
            .get_employer_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employer not found".to_string()))
    }

    pub async fn update_employer(&self, id: i64, request: UpdateEmployer) -> Result<Employer, AppError> {
        request.validate()?;
        if request.is_empty() {
            return Err(AppError::invalid_field("body", "At least one field must be provided"));
        }
        let changes = request.normalized();

        if let Some(name) = changes.name.as_deref() {
            if let Some(other) = self.employer_repo.get_employer_by_name(name).await? {
                if other.id != id {
                    return Err(AppError::Conflict("Employer with this name already exists".to_string()));
                }
            }
        }

        self.employer_repo.update_employer(id, &changes).await
    }

    pub async fn delete_employer(&self, id: i64) -> Result<(), AppError> {
        self.employer_repo.delete_employer(id).await
    }
}
