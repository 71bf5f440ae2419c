use async_trait::async_trait;

use crate::{
    entities::{
        placement::{Placement, PlacementInsert, UpdatePlacement},
        report::PlacementsPerEmployer,
    },
    errors::{is_db_error, AppError, FOREIGN_KEY_VIOLATION},
    repositories::sqlx_repo::SqlxPlacementRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementRepository: Send + Sync {
    async fn placement_exists(&self, id: i64) -> Result<bool, AppError>;
    async fn create_placement(&self, placement: &PlacementInsert) -> Result<Placement, AppError>;
    async fn list_placements(&self) -> Result<Vec<Placement>, AppError>;
    async fn get_placement_by_id(&self, id: i64) -> Result<Option<Placement>, AppError>;
    async fn update_placement(&self, id: i64, changes: &UpdatePlacement) -> Result<Placement, AppError>;
    async fn delete_placement(&self, id: i64) -> Result<(), AppError>;
    async fn placements_per_employer(&self) -> Result<Vec<PlacementsPerEmployer>, AppError>;
}

impl SqlxPlacementRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxPlacementRepo { pool }
    }
}

#[async_trait]
impl PlacementRepository for SqlxPlacementRepo {
    async fn placement_exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM placements WHERE id = $1)"
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_placement(&self, placement: &PlacementInsert) -> Result<Placement, AppError> {
        sqlx::query_as::<_, Placement>(
            r#"INSERT INTO placements (
                student_id,
                employer_id,
                mentor_id,
                job_title,
                description,
                start_date,
                end_date,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(placement.student_id)
        .bind(placement.employer_id)
        .bind(placement.mentor_id)
        .bind(&placement.job_title)
        .bind(&placement.description)
        .bind(placement.start_date)
        .bind(placement.end_date)
        .bind(&placement.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A referenced row vanished between the existence check and the insert
            if is_db_error(&e, FOREIGN_KEY_VIOLATION) {
                AppError::NotFound("Referenced student, employer or mentor not found".to_string())
            } else {
                AppError::from(e)
            }
        })
    }

    async fn list_placements(&self) -> Result<Vec<Placement>, AppError> {
        let placements = sqlx::query_as::<_, Placement>("SELECT * FROM placements ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(placements)
    }

    async fn get_placement_by_id(&self, id: i64) -> Result<Option<Placement>, AppError> {
        sqlx::query_as::<_, Placement>("SELECT * FROM placements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_placement(&self, id: i64, changes: &UpdatePlacement) -> Result<Placement, AppError> {
        sqlx::query_as::<_, Placement>(
            r#"
            UPDATE placements SET
                job_title = COALESCE($1, job_title),
                description = CASE WHEN $7 THEN $2 ELSE description END,
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                status = COALESCE($5, status),
                updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#
        )
        .bind(&changes.job_title)
        .bind(changes.description.clone().flatten())
        .bind(changes.start_date)
        .bind(changes.end_date)
        .bind(&changes.status)
        .bind(id)
        .bind(changes.description.is_some())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Placement not found".to_string()))
    }

    async fn delete_placement(&self, id: i64) -> Result<(), AppError> {
        // evaluations go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM placements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Placement not found".to_string()));
        }

        Ok(())
    }

    async fn placements_per_employer(&self) -> Result<Vec<PlacementsPerEmployer>, AppError> {
        let rows = sqlx::query_as::<_, PlacementsPerEmployer>(
            r#"
            SELECT
                e.id AS employer_id,
                e.name AS employer_name,
                COUNT(p.id) AS placement_count
            FROM employers e
            JOIN placements p ON p.employer_id = e.id
            GROUP BY e.id, e.name
            ORDER BY e.name
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
