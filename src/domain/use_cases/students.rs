use std::sync::Arc;

use validator::Validate;

use crate::auth::password::hash_password;
use crate::entities::evaluation::Evaluation;
use crate::entities::student::{normalize_email, NewStudent, StudentResponse, UpdateStudent};
use crate::errors::AppError;
use crate::repositories::{evaluation::EvaluationRepository, student::StudentRepository};

pub struct StudentHandler {
    pub student_repo: Arc<dyn StudentRepository>,
    pub evaluation_repo: Arc<dyn EvaluationRepository>,
}

impl StudentHandler {
    pub fn new(
        student_repo: Arc<dyn StudentRepository>,
        evaluation_repo: Arc<dyn EvaluationRepository>,
    ) -> Self {
        StudentHandler {
            student_repo,
            evaluation_repo,
        }
    }

    /// Registers a new student after validation and password hashing
    pub async fn register(&self, request: NewStudent) -> Result<StudentResponse, AppError> {
        request.validate()?;

        let email = normalize_email(&request.email);
        if self.student_repo.get_student_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Student with this email already exists".to_string()));
        }

        let hashed_password = hash_password(&request.password)?;
        let student_insert = request.prepare_for_insert(hashed_password);

        let student = self.student_repo.create_student(&student_insert).await?;
        tracing::info!(student_id = student.id, "Student registered");

        Ok(student.into())
    }

    pub async fn list_students(&self) -> Result<Vec<StudentResponse>, AppError> {
        let students = self.student_repo.list_students().await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    pub async fn get_student(&self, id: i64) -> Result<StudentResponse, AppError> {
        self.student_repo
            .get_student_by_id(id)
            .await?
            .map(StudentResponse::from)
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Applies a partial update. A new password is re-hashed and a new email
    /// must not belong to another student.
    pub async fn update_student(&self, id: i64, request: UpdateStudent) -> Result<StudentResponse, AppError> {
        request.validate()?;
        if request.is_empty() {
            return Err(AppError::invalid_field("body", "At least one field must be provided"));
        }

        if !self.student_repo.student_exists(id).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        if let Some(email) = request.email.as_deref() {
            let email = normalize_email(email);
            if let Some(other) = self.student_repo.get_student_by_email(&email).await? {
                if other.id != id {
                    return Err(AppError::Conflict("Student with this email already exists".to_string()));
                }
            }
        }

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let changes = request.into_changes(password_hash);
        let student = self.student_repo.update_student(id, &changes).await?;

        Ok(student.into())
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        self.student_repo.delete_student(id).await?;
        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }

    /// Evaluations attached to any placement of the student
    pub async fn evaluations_for_student(&self, id: i64) -> Result<Vec<Evaluation>, AppError> {
        if !self.student_repo.student_exists(id).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        self.evaluation_repo.list_evaluations_for_student(id).await
    }
}
