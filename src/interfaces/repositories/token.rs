use jsonwebtoken::TokenData;
use crate::{entities::{student::Student, token::Claims}, errors::AuthError};

pub trait TokenServiceRepository: Send + Sync {
    /// Creates a new access JWT for the student
    fn create_jwt(&self, student: &Student) -> Result<String, AuthError>;

    /// Decodes a JWT and returns the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;

    /// Lifetime of a freshly issued token
    fn expires_in_seconds(&self) -> i64;
}
