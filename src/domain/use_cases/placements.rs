use std::sync::Arc;

use validator::Validate;

use crate::entities::evaluation::Evaluation;
use crate::entities::placement::{dates_in_order, NewPlacement, Placement, UpdatePlacement};
use crate::errors::AppError;
use crate::repositories::{
    employer::EmployerRepository,
    evaluation::EvaluationRepository,
    mentor::MentorRepository,
    placement::PlacementRepository,
    student::StudentRepository,
};

pub struct PlacementHandler {
    pub placement_repo: Arc<dyn PlacementRepository>,
    pub student_repo: Arc<dyn StudentRepository>,
    pub employer_repo: Arc<dyn EmployerRepository>,
    pub mentor_repo: Arc<dyn MentorRepository>,
    pub evaluation_repo: Arc<dyn EvaluationRepository>,
}

fn end_before_start() -> AppError {
    AppError::invalid_field("end_date", "End date must not be before start date")
}

impl PlacementHandler {
    pub fn new(
        placement_repo: Arc<dyn PlacementRepository>,
        student_repo: Arc<dyn StudentRepository>,
        employer_repo: Arc<dyn EmployerRepository>,
        mentor_repo: Arc<dyn MentorRepository>,
        evaluation_repo: Arc<dyn EvaluationRepository>,
    ) -> Self {
        PlacementHandler {
            placement_repo,
            student_repo,
            employer_repo,
            mentor_repo,
            evaluation_repo,
        }
    }

    /// Creates a placement once the student, employer and mentor are known
    /// to exist. Nothing is written when one of them is missing.
    pub async fn create_placement(&self, request: NewPlacement) -> Result<Placement, AppError> {
        request.validate()?;
        if !dates_in_order(request.start_date, request.end_date) {
            return Err(end_before_start());
        }

        if !self.student_repo.student_exists(request.student_id).await? {
            return Err(AppError::NotFound(format!("Student with ID {} not found", request.student_id)));
        }
        if !self.employer_repo.employer_exists(request.employer_id).await? {
            return Err(AppError::NotFound(format!("Employer with ID {} not found", request.employer_id)));
        }
        if !self.mentor_repo.mentor_exists(request.mentor_id).await? {
            return Err(AppError::NotFound(format!("Mentor with ID {} not found", request.mentor_id)));
        }

        let placement = self.placement_repo.create_placement(&request.prepare_for_insert()).await?;
        tracing::info!(placement_id = placement.id, "Placement created");

        Ok(placement)
    }

    pub async fn list_placements(&self) -> Result<Vec<Placement>, AppError> {
        self.placement_repo.list_placements().await
    }

    pub async fn get_placement(&self, id: i64) -> Result<Placement, AppError> {
        self.placement_repo
            .get_placement_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Placement not found".to_string()))
    }

    /// Partial update; the date order is checked against the merged record
    pub async fn update_placement(&self, id: i64, request: UpdatePlacement) -> Result<Placement, AppError> {
        request.validate()?;
        if request.is_empty() {
            return Err(AppError::invalid_field("body", "At least one field must be provided"));
        }
        if request.description_too_long() {
            return Err(AppError::invalid_field("description", "Description must be at most 2000 characters"));
        }

        let current = self.get_placement(id).await?;
        let start = request.start_date.unwrap_or(current.start_date);
        let end = request.end_date.unwrap_or(current.end_date);
        if !dates_in_order(start, end) {
            return Err(end_before_start());
        }

        let changes = UpdatePlacement {
            job_title: request.job_title.map(|s| s.trim().to_string()),
            status: request.status.map(|s| s.trim().to_string()),
            ..request
        };

        self.placement_repo.update_placement(id, &changes).await
    }

    pub async fn delete_placement(&self, id: i64) -> Result<(), AppError> {
        self.placement_repo.delete_placement(id).await?;
        tracing::info!(placement_id = id, "Placement deleted");
        Ok(())
    }

    pub async fn evaluations_for_placement(&self, id: i64) -> Result<Vec<Evaluation>, AppError> {
        if !self.placement_repo.placement_exists(id).await? {
            return Err(AppError::NotFound("Placement not found".to_string()));
        }

        self.evaluation_repo.list_evaluations_for_placement(id).await
    }
}
