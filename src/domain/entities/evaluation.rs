use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Evaluation {
    pub id: i64,
    pub placement_id: i64,
    pub rating: i16,
    pub comments: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewEvaluation {
    pub placement_id: i64,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,

    #[validate(
        length(min = 1, max = 5000, message = "Comments must be 1-5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub comments: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateEvaluation {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,

    #[validate(
        length(min = 1, max = 5000, message = "Comments must be 1-5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub comments: Option<String>,
}

impl UpdateEvaluation {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.comments.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        for rating in [0, 6, -1] {
            let evaluation = NewEvaluation {
                placement_id: 1,
                rating,
                comments: "Solid work".into(),
            };
            assert!(evaluation.validate().is_err(), "rating {rating} accepted");
        }
    }

    #[test]
    fn update_rating_is_range_checked() {
        let update = UpdateEvaluation { rating: Some(9), comments: None };
        assert!(update.validate().is_err());

        let update = UpdateEvaluation { rating: Some(4), comments: None };
        assert!(update.validate().is_ok());
    }
}
