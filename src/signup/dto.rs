use serde::Deserialize;

use crate::error::SignupError;

/// Raw form submission. Every field is optional so that an absent field is a
/// validation error rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// A fully-populated submission.
#[derive(Debug)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Require every field. Browsers submit the key even for empty inputs,
    /// so empty counts as missing.
    pub fn into_input(self) -> Result<SignupInput, SignupError> {
        Ok(SignupInput {
            name: require(self.name, "name")?,
            email: require(self.email, "email")?,
            password: require(self.password, "password")?,
            confirm_password: require(self.confirm_password, "confirm_password")?,
        })
    }
}

fn require(field: Option<String>, name: &'static str) -> Result<String, SignupError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SignupError::MissingField(name)),
    }
}
