use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub major: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StudentInsert {
    pub full_name: String,
    pub email: String,
    pub major: String,
    pub password_hash: String,
}

/// Fields already checked and hashed, ready for `UPDATE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewStudent {
    #[validate(
        length(min = 1, max = 120, message = "Full name must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 1, max = 120, message = "Major must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub major: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

impl NewStudent {
    pub fn prepare_for_insert(&self, password_hash: String) -> StudentInsert {
        StudentInsert {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            major: self.major.trim().to_string(),
            password_hash,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateStudent {
    #[validate(
        length(min = 1, max = 120, message = "Full name must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub full_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(
        length(min = 1, max = 120, message = "Major must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub major: Option<String>,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Option<String>,
}

impl UpdateStudent {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.major.is_none()
            && self.password.is_none()
    }

    pub fn into_changes(self, password_hash: Option<String>) -> StudentChanges {
        StudentChanges {
            full_name: self.full_name.map(|s| s.trim().to_string()),
            email: self.email.as_deref().map(normalize_email),
            major: self.major.map(|s| s.trim().to_string()),
            password_hash,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub major: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        StudentResponse {
            id: student.id,
            full_name: student.full_name,
            email: student.email,
            major: student.major,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginStudent {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Emails compare case-insensitively; store them lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naruto() -> NewStudent {
        NewStudent {
            full_name: "Naruto Uzumaki".into(),
            email: "naruto@konoha.com".into(),
            major: "Ninjutsu".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        assert!(naruto().validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let student = NewStudent { email: "not-an-email".into(), ..naruto() };
        let errors = student.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn rejects_missing_field_at_deserialization() {
        let body = r#"{"full_name":"Naruto Uzumaki","email":"naruto@konoha.com","password":"secret"}"#;
        assert!(serde_json::from_str::<NewStudent>(body).is_err());
    }

    #[test]
    fn rejects_misnamed_field_at_deserialization() {
        let body = r#"{"name":"Naruto","email":"naruto@konoha.com","major":"Ninjutsu","password":"secret"}"#;
        assert!(serde_json::from_str::<NewStudent>(body).is_err());
    }

    #[test]
    fn insert_normalizes_email() {
        let student = NewStudent { email: " Naruto@Konoha.COM ".into(), ..naruto() };
        let insert = student.prepare_for_insert("hash".into());
        assert_eq!(insert.email, "naruto@konoha.com");
        assert_eq!(insert.password_hash, "hash");
    }

    #[test]
    fn response_never_carries_the_password_hash() {
        let now = Utc::now();
        let response = StudentResponse::from(Student {
            id: 1,
            full_name: "Naruto Uzumaki".into(),
            email: "naruto@konoha.com".into(),
            major: "Ninjutsu".into(),
            password_hash: "$argon2id$...".into(),
            created_at: now,
            updated_at: now,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdateStudent::default().is_empty());
        let update = UpdateStudent { major: Some("Taijutsu".into()), ..Default::default() };
        assert!(!update.is_empty());
    }
}
