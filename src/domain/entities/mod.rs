pub mod employer;
pub mod evaluation;
pub mod mentor;
pub mod placement;
pub mod report;
pub mod student;
pub mod token;
pub mod validation;
