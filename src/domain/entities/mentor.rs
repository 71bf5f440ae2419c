use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::entities::student::normalize_email;
use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Mentor {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub field: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewMentor {
    #[validate(
        length(min = 1, max = 120, message = "Full name must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 120, message = "Field must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub field: Option<String>,
}

impl NewMentor {
    pub fn normalized(self) -> Self {
        NewMentor {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            field: self.field.map(|f| f.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateMentor {
    #[validate(
        length(min = 1, max = 120, message = "Full name must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub full_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(
        length(min = 1, max = 120, message = "Field must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub field: Option<String>,
}

impl UpdateMentor {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.field.is_none()
    }

    pub fn normalized(self) -> Self {
        UpdateMentor {
            full_name: self.full_name.map(|s| s.trim().to_string()),
            email: self.email.as_deref().map(normalize_email),
            field: self.field.map(|s| s.trim().to_string()),
        }
    }
}
