use async_trait::async_trait;

use crate::{
    entities::evaluation::{Evaluation, NewEvaluation, UpdateEvaluation},
    errors::{is_db_error, AppError, FOREIGN_KEY_VIOLATION},
    repositories::sqlx_repo::SqlxEvaluationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    async fn create_evaluation(&self, evaluation: &NewEvaluation) -> Result<Evaluation, AppError>;
    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, AppError>;
    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>, AppError>;
    async fn list_evaluations_for_placement(&self, placement_id: i64) -> Result<Vec<Evaluation>, AppError>;
    async fn list_evaluations_for_student(&self, student_id: i64) -> Result<Vec<Evaluation>, AppError>;
    async fn update_evaluation(&self, id: i64, changes: &UpdateEvaluation) -> Result<Evaluation, AppError>;
    async fn delete_evaluation(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxEvaluationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEvaluationRepo { pool }
    }
}

#[async_trait]
impl EvaluationRepository for SqlxEvaluationRepo {
    async fn create_evaluation(&self, evaluation: &NewEvaluation) -> Result<Evaluation, AppError> {
        sqlx::query_as::<_, Evaluation>(
            r#"INSERT INTO evaluations (placement_id, rating, comments)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(evaluation.placement_id)
        .bind(evaluation.rating)
        .bind(&evaluation.comments)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_db_error(&e, FOREIGN_KEY_VIOLATION) {
                AppError::NotFound(format!("Placement with ID {} not found", evaluation.placement_id))
            } else {
                AppError::from(e)
            }
        })
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, AppError> {
        let evaluations = sqlx::query_as::<_, Evaluation>("SELECT * FROM evaluations ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(evaluations)
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>, AppError> {
        sqlx::query_as::<_, Evaluation>("SELECT * FROM evaluations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_evaluations_for_placement(&self, placement_id: i64) -> Result<Vec<Evaluation>, AppError> {
        let evaluations = sqlx::query_as::<_, Evaluation>(
            "SELECT * FROM evaluations WHERE placement_id = $1 ORDER BY id"
        )
        .bind(placement_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(evaluations)
    }

    async fn list_evaluations_for_student(&self, student_id: i64) -> Result<Vec<Evaluation>, AppError> {
        let evaluations = sqlx::query_as::<_, Evaluation>(
            r#"
            SELECT ev.*
            FROM evaluations ev
            JOIN placements p ON p.id = ev.placement_id
            WHERE p.student_id = $1
            ORDER BY ev.id
            "#
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(evaluations)
    }

    async fn update_evaluation(&self, id: i64, changes: &UpdateEvaluation) -> Result<Evaluation, AppError> {
        sqlx::query_as::<_, Evaluation>(
            r#"
            UPDATE evaluations SET
                rating = COALESCE($1, rating),
                comments = COALESCE($2, comments),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#
        )
        .bind(changes.rating)
        .bind(&changes.comments)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Evaluation not found".to_string()))
    }

    async fn delete_evaluation(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM evaluations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Evaluation not found".to_string()));
        }

        Ok(())
    }
}
