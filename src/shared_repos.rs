use std::sync::Arc;

use crate::repositories::{
    employer::EmployerRepository,
    evaluation::EvaluationRepository,
    mentor::MentorRepository,
    placement::PlacementRepository,
    sqlx_repo::{SqlxEmployerRepo, SqlxEvaluationRepo, SqlxMentorRepo, SqlxPlacementRepo, SqlxStudentRepo},
    student::StudentRepository,
};

/// One repository per table, shared by every use case that touches it.
#[derive(Clone)]
pub struct SharedRepositories {
    pub student_repo: Arc<dyn StudentRepository>,
    pub employer_repo: Arc<dyn EmployerRepository>,
    pub mentor_repo: Arc<dyn MentorRepository>,
    pub placement_repo: Arc<dyn PlacementRepository>,
    pub evaluation_repo: Arc<dyn EvaluationRepository>,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let student_repo = SqlxStudentRepo::new(pool.clone());
        let employer_repo = SqlxEmployerRepo::new(pool.clone());
        let mentor_repo = SqlxMentorRepo::new(pool.clone());
        let placement_repo = SqlxPlacementRepo::new(pool.clone());
        let evaluation_repo = SqlxEvaluationRepo::new(pool);

        SharedRepositories {
            student_repo: Arc::new(student_repo),
            employer_repo: Arc::new(employer_repo),
            mentor_repo: Arc::new(mentor_repo),
            placement_repo: Arc::new(placement_repo),
            evaluation_repo: Arc::new(evaluation_repo),
        }
    }
}
