use async_trait::async_trait;

use crate::{
    entities::student::{Student, StudentChanges, StudentInsert},
    errors::{is_db_error, AppError, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
    repositories::sqlx_repo::SqlxStudentRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn student_exists(&self, id: i64) -> Result<bool, AppError>;
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>, AppError>;
    async fn create_student(&self, student: &StudentInsert) -> Result<Student, AppError>;
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;
    async fn update_student(&self, id: i64, changes: &StudentChanges) -> Result<Student, AppError>;
    async fn delete_student(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxStudentRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxStudentRepo { pool }
    }
}

fn duplicate_email(e: sqlx::Error) -> AppError {
    if is_db_error(&e, UNIQUE_VIOLATION) {
        AppError::Conflict("Student with this email already exists".to_string())
    } else {
        AppError::from(e)
    }
}

#[async_trait]
impl StudentRepository for SqlxStudentRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn student_exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)"
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn create_student(&self, student: &StudentInsert) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (
                full_name,
                email,
                major,
                password_hash
            )
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(&student.full_name)
        .bind(&student.email)
        .bind(&student.major)
        .bind(&student.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(duplicate_email)
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(students)
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_student(&self, id: i64, changes: &StudentChanges) -> Result<Student, AppError> {
        // COALESCE keeps the stored value for fields left out of the patch
        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET
                full_name = COALESCE($1, full_name),
                email = COALESCE($2, email),
                major = COALESCE($3, major),
                password_hash = COALESCE($4, password_hash),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#
        )
        .bind(&changes.full_name)
        .bind(&changes.email)
        .bind(&changes.major)
        .bind(&changes.password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(duplicate_email)?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_db_error(&e, FOREIGN_KEY_VIOLATION) {
                    AppError::Conflict("Student has associated placements".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        Ok(())
    }
}
