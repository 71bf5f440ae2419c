use async_trait::async_trait;

use crate::{
    entities::mentor::{Mentor, NewMentor, UpdateMentor},
    errors::{is_db_error, AppError, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
    repositories::sqlx_repo::SqlxMentorRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MentorRepository: Send + Sync {
    async fn mentor_exists(&self, id: i64) -> Result<bool, AppError>;
    async fn get_mentor_by_email(&self, email: &str) -> Result<Option<Mentor>, AppError>;
    async fn create_mentor(&self, mentor: &NewMentor) -> Result<Mentor, AppError>;
    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError>;
    async fn get_mentor_by_id(&self, id: i64) -> Result<Option<Mentor>, AppError>;
    async fn update_mentor(&self, id: i64, changes: &UpdateMentor) -> Result<Mentor, AppError>;
    async fn delete_mentor(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxMentorRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMentorRepo { pool }
    }
}

fn duplicate_email(e: sqlx::Error) -> AppError {
    if is_db_error(&e, UNIQUE_VIOLATION) {
        AppError::Conflict("Mentor with this email already exists".to_string())
    } else {
        AppError::from(e)
    }
}

#[async_trait]
impl MentorRepository for SqlxMentorRepo {
    async fn mentor_exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM mentors WHERE id = $1)"
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn get_mentor_by_email(&self, email: &str) -> Result<Option<Mentor>, AppError> {
        let mentor = sqlx::query_as::<_, Mentor>("SELECT * FROM mentors WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(mentor)
    }

    async fn create_mentor(&self, mentor: &NewMentor) -> Result<Mentor, AppError> {
        sqlx::query_as::<_, Mentor>(
            r#"INSERT INTO mentors (full_name, email, field)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(&mentor.full_name)
        .bind(&mentor.email)
        .bind(&mentor.field)
        .fetch_one(&self.pool)
        .await
        .map_err(duplicate_email)
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError> {
        let mentors = sqlx::query_as::<_, Mentor>("SELECT * FROM mentors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(mentors)
    }

    async fn get_mentor_by_id(&self, id: i64) -> Result<Option<Mentor>, AppError> {
        sqlx::query_as::<_, Mentor>("SELECT * FROM mentors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_mentor(&self, id: i64, changes: &UpdateMentor) -> Result<Mentor, AppError> {
        sqlx::query_as::<_, Mentor>(
            r#"
            UPDATE mentors SET
                full_name = COALESCE($1, full_name),
                email = COALESCE($2, email),
                field = COALESCE($3, field),
                updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#
        )
        .bind(&changes.full_name)
        .bind(&changes.email)
        .bind(&changes.field)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(duplicate_email)?
        .ok_or_else(|| AppError::NotFound("Mentor not found".to_string()))
    }

    async fn delete_mentor(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM mentors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_db_error(&e, FOREIGN_KEY_VIOLATION) {
                    AppError::Conflict("Mentor has associated placements".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Mentor not found".to_string()));
        }

        Ok(())
    }
}
