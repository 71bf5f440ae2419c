pub mod auth;
pub mod employers;
pub mod evaluations;
pub mod extractors;
pub mod mentors;
pub mod placements;
pub mod reports;
pub mod students;
