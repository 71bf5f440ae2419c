use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db};

use auth::jwt::JwtService;
use repositories::token::TokenServiceRepository;
use shared_repos::SharedRepositories;
use use_cases::{
    auth::AuthHandler,
    employers::EmployerHandler,
    evaluations::EvaluationHandler,
    mentors::MentorHandler,
    placements::PlacementHandler,
    reports::ReportHandler,
    students::StudentHandler,
};

pub struct AppState {
    pub student_handler: StudentHandler,
    pub employer_handler: EmployerHandler,
    pub mentor_handler: MentorHandler,
    pub placement_handler: PlacementHandler,
    pub evaluation_handler: EvaluationHandler,
    pub report_handler: ReportHandler,
    pub auth_handler: AuthHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        AppState::from_repositories(SharedRepositories::new(pool), Arc::new(jwt_service))
    }

    /// Wires every use case over the given repositories.
    pub fn from_repositories(
        repos: SharedRepositories,
        token_service: Arc<dyn TokenServiceRepository>,
    ) -> Self {
        let SharedRepositories {
            student_repo,
            employer_repo,
            mentor_repo,
            placement_repo,
            evaluation_repo,
        } = repos;

        AppState {
            student_handler: StudentHandler::new(student_repo.clone(), evaluation_repo.clone()),
            employer_handler: EmployerHandler::new(employer_repo.clone()),
            mentor_handler: MentorHandler::new(mentor_repo.clone()),
            placement_handler: PlacementHandler::new(
                placement_repo.clone(),
                student_repo.clone(),
                employer_repo,
                mentor_repo,
                evaluation_repo.clone(),
            ),
            evaluation_handler: EvaluationHandler::new(evaluation_repo, placement_repo.clone()),
            report_handler: ReportHandler::new(placement_repo),
            auth_handler: AuthHandler::new(student_repo, token_service),
        }
    }
}
