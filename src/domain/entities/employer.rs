use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Employer {
    pub id: i64,
    pub name: String,
    pub industry: String,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewEmployer {
    #[validate(
        length(min = 1, max = 200, message = "Company name must be 1-200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 120, message = "Industry must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub industry: String,

    #[serde(default)]
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
}

impl NewEmployer {
    pub fn normalized(self) -> Self {
        NewEmployer {
            name: self.name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            website: self.website.map(|w| w.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployer {
    #[validate(
        length(min = 1, max = 200, message = "Company name must be 1-200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 120, message = "Industry must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub industry: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
}

impl UpdateEmployer {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.industry.is_none() && self.website.is_none()
    }

    pub fn normalized(self) -> Self {
        UpdateEmployer {
            name: self.name.map(|s| s.trim().to_string()),
            industry: self.industry.map(|s| s.trim().to_string()),
            website: self.website.map(|s| s.trim().to_string()),
        }
    }
}
