use std::sync::Arc;

use crate::entities::report::PlacementsPerEmployer;
use crate::errors::AppError;
use crate::repositories::placement::PlacementRepository;

pub struct ReportHandler {
    pub placement_repo: Arc<dyn PlacementRepository>,
}

impl ReportHandler {
    pub fn new(placement_repo: Arc<dyn PlacementRepository>) -> Self {
        ReportHandler { placement_repo }
    }

    /// Placement counts for every employer that has at least one placement
    pub async fn placements_per_employer(&self) -> Result<Vec<PlacementsPerEmployer>, AppError> {
        let rows = self.placement_repo.placements_per_employer().await?;
        if rows.is_empty() {
            return Err(AppError::NotFound("No placements found to generate report".to_string()));
        }

        Ok(rows)
    }
}
