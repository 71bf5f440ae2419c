use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

pub const DEFAULT_STATUS: &str = "active";
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Placement {
    pub id: i64,
    pub student_id: i64,
    pub employer_id: i64,
    pub mentor_id: i64,
    pub job_title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementInsert {
    pub student_id: i64,
    pub employer_id: i64,
    pub mentor_id: i64,
    pub job_title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewPlacement {
    pub student_id: i64,
    pub employer_id: i64,
    pub mentor_id: i64,

    #[validate(
        length(min = 1, max = 200, message = "Job title must be 1-200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub job_title: String,

    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 40, message = "Status must be 1-40 characters"),
        custom(function = "validate_not_blank")
    )]
    pub status: Option<String>,
}

impl NewPlacement {
    pub fn prepare_for_insert(self) -> PlacementInsert {
        PlacementInsert {
            student_id: self.student_id,
            employer_id: self.employer_id,
            mentor_id: self.mentor_id,
            job_title: self.job_title.trim().to_string(),
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self
                .status
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlacement {
    #[validate(
        length(min = 1, max = 200, message = "Job title must be 1-200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub job_title: Option<String>,

    /// `null` clears the description, an absent field keeps it.
    #[serde(default, deserialize_with = "present_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(
        length(min = 1, max = 40, message = "Status must be 1-40 characters"),
        custom(function = "validate_not_blank")
    )]
    pub status: Option<String>,
}

impl UpdatePlacement {
    pub fn is_empty(&self) -> bool {
        self.job_title.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
    }

    pub fn description_too_long(&self) -> bool {
        matches!(
            &self.description,
            Some(Some(d)) if d.chars().count() as u64 > MAX_DESCRIPTION_LENGTH
        )
    }
}

/// Wraps any present value, `null` included, so it differs from a missing field.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A placement may not end before it starts.
pub fn dates_in_order(start: NaiveDate, end: NaiveDate) -> bool {
    end >= start
}
