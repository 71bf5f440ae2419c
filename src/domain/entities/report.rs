use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct PlacementsPerEmployer {
    pub employer_id: i64,
    pub employer_name: String,
    pub placement_count: i64,
}
