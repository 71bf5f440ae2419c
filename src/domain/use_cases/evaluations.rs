use std::sync::Arc;

use validator::Validate;

use crate::entities::evaluation::{Evaluation, NewEvaluation, UpdateEvaluation};
use crate::errors::AppError;
use crate::repositories::{evaluation::EvaluationRepository, placement::PlacementRepository};

pub struct EvaluationHandler {
    pub evaluation_repo: Arc<dyn EvaluationRepository>,
    pub placement_repo: Arc<dyn PlacementRepository>,
}

impl EvaluationHandler {
    pub fn new(
        evaluation_repo: Arc<dyn EvaluationRepository>,
        placement_repo: Arc<dyn PlacementRepository>,
    ) -> Self {
        EvaluationHandler {
            evaluation_repo,
            placement_repo,
        }
    }

    /// Records an evaluation against an existing placement
    pub async fn create_evaluation(&self, request: NewEvaluation) -> Result<Evaluation, AppError> {
        request.validate()?;

        if !self.placement_repo.placement_exists(request.placement_id).await? {
            return Err(AppError::NotFound(format!(
                "Placement with ID {} not found",
                request.placement_id
            )));
        }

        let evaluation = NewEvaluation {
            comments: request.comments.trim().to_string(),
            ..request
        };

        self.evaluation_repo.create_evaluation(&evaluation).await
    }

    pub async fn list_evaluations(&self) -> Result<Vec<Evaluation>, AppError> {
        self.evaluation_repo.list_evaluations().await
    }

    pub async fn get_evaluation(&self, id: i64) -> Result<Evaluation, AppError> {
        self.evaluation_repo
            .get_evaluation_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Evaluation not found".to_string()))
    }

    pub async fn update_evaluation(&self, id: i64, request: UpdateEvaluation) -> Result<Evaluation, AppError> {
        request.validate()?;
        if request.is_empty() {
            return Err(AppError::invalid_field("body", "At least one field must be provided"));
        }

        self.evaluation_repo.update_evaluation(id, &request).await
    }

    pub async fn delete_evaluation(&self, id: i64) -> Result<(), AppError> {
        self.evaluation_repo.delete_evaluation(id).await
    }
}
