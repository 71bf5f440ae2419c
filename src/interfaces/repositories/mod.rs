pub mod employer;
pub mod evaluation;
pub mod mentor;
pub mod placement;
pub mod sqlx_repo;
pub mod student;
pub mod token;
