use async_trait::async_trait;

use crate::{
    entities::employer::{Employer, NewEmployer, UpdateEmployer},
    errors::{is_db_error, AppError, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
    repositories::sqlx_repo::SqlxEmployerRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployerRepository: Send + Sync {
    async fn employer_exists(&self, id: i64) -> Result<bool, AppError>;
    async fn get_employer_by_name(&self, name: &str) -> Result<Option<Employer>, AppError>;
    async fn create_employer(&self, employer: &NewEmployer) -> Result<Employer, AppError>;
    async fn list_employers(&self) -> Result<Vec<Employer>, AppError>;
    async fn get_employer_by_id(&self, id: i64) -> Result<Option<Employer>, AppError>;
    async fn update_employer(&self, id: i64, changes: &UpdateEmployer) -> Result<Employer, AppError>;
    async fn delete_employer(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxEmployerRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEmployerRepo { pool }
    }
}

fn duplicate_name(e: sqlx::Error) -> AppError {
    if is_db_error(&e, UNIQUE_VIOLATION) {
        AppError::Conflict("Employer with this name already exists".to_string())
    } else {
        AppError::from(e)
    }
}

#[async_trait]
impl EmployerRepository for SqlxEmployerRepo {
    async fn employer_exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM employers WHERE id = $1)"
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn get_employer_by_name(&self, name: &str) -> Result<Option<Employer>, AppError> {
        let employer = sqlx::query_as::<_, Employer>(
            "SELECT * FROM employers WHERE name = $1"
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employer)
    }

    async fn create_employer(&self, employer: &NewEmployer) -> Result<Employer, AppError> {
        sqlx::query_as::<_, Employer>(
            r#"INSERT INTO employers (name, industry, website)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(&employer.name)
        .bind(&employer.industry)
        .bind(&employer.website)
        .fetch_one(&self.pool)
        .await
        .map_err(duplicate_name)
    }

    async fn list_employers(&self) -> Result<Vec<Employer>, AppError> {
        let employers = sqlx::query_as::<_, Employer>("SELECT * FROM employers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(employers)
    }

    async fn get_employer_by_id(&self, id: i64) -> Result<Option<Employer>, AppError> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_employer(&self, id: i64, changes: &UpdateEmployer) -> Result<Employer, AppError> {
        sqlx::query_as::<_, Employer>(
            r#"
            UPDATE employers SET
                name = COALESCE($1, name),
                industry = COALESCE($2, industry),
                website = COALESCE($3, website),
                updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#
        )
        .bind(&changes.name)
        .bind(&changes.industry)
        .bind(&changes.website)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(duplicate_name)?
        .ok_or_else(|| AppError::NotFound("Employer not found".to_string()))
    }

    async fn delete_employer(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_db_error(&e, FOREIGN_KEY_VIOLATION) {
                    AppError::Conflict("Employer has associated placements".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employer not found".to_string()));
        }

        Ok(())
    }
}
