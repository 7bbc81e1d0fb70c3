use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

use crate::pages;

/// Fatal errors raised while bringing up the record store connection.
///
/// The entry point decides what to do with one of these; everything here is
/// unrecoverable and is never retried.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("connection timed out: {0}")]
    Timeout(String),

    #[error("unexpected startup error: {0}")]
    Unexpected(mongodb::error::Error),
}

impl StartupError {
    /// Classify a driver error into the startup taxonomy.
    pub fn from_mongo(err: mongodb::error::Error) -> Self {
        match &*err.kind {
            ErrorKind::Authentication { message, .. } => Self::Auth(message.clone()),
            ErrorKind::ServerSelection { message, .. } => Self::Timeout(message.clone()),
            ErrorKind::InvalidArgument { message, .. } => Self::Config(message.clone()),
            _ => Self::Unexpected(err),
        }
    }

    /// Remediation hint printed next to the diagnostic at startup.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("check your .env file and MONGO_URI"),
            Self::Auth(_) => Some("check the record store username and password"),
            Self::Timeout(_) => Some("check your network connection and cluster availability"),
            Self::Unexpected(_) => None,
        }
    }
}

/// Request-scoped signup failures, reported to the caller as an HTML page.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("password hashing failed: {0}")]
    Hash(anyhow::Error),

    #[error("record store error: {0}")]
    Storage(#[from] mongodb::error::Error),
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::PasswordMismatch | Self::DuplicateEmail(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Hash(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page_message(&self) -> String {
        match self {
            Self::MissingField(field) => format!("Missing required field: {field}"),
            Self::PasswordMismatch => "Passwords do not match!".into(),
            Self::DuplicateEmail(_) => "Email already registered!".into(),
            Self::Hash(e) => format!("Error: {e}"),
            Self::Storage(e) => format!("Error: {e}"),
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (self.status(), Html(pages::error_page(&self.page_message()))).into_response()
    }
}

/// True when an insert lost the uniqueness race and hit the unique index
/// (server write error code 11000).
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_map_to_bad_request() {
        assert_eq!(
            SignupError::MissingField("email").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(SignupError::PasswordMismatch.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            SignupError::DuplicateEmail("a@b.c".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn faults_map_to_internal_server_error() {
        assert_eq!(
            SignupError::Hash(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SignupError::Storage(mongodb::error::Error::custom("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn page_messages_match_the_rendered_pages() {
        assert_eq!(
            SignupError::MissingField("name").page_message(),
            "Missing required field: name"
        );
        assert_eq!(
            SignupError::PasswordMismatch.page_message(),
            "Passwords do not match!"
        );
        assert_eq!(
            SignupError::DuplicateEmail("a@b.c".into()).page_message(),
            "Email already registered!"
        );
        assert_eq!(
            SignupError::Hash(anyhow::anyhow!("boom")).page_message(),
            "Error: boom"
        );
    }

    #[test]
    fn unclassified_driver_errors_are_unexpected() {
        let err = mongodb::error::Error::custom("boom");
        assert!(matches!(
            StartupError::from_mongo(err),
            StartupError::Unexpected(_)
        ));
    }

    #[test]
    fn hints_cover_every_recoverable_misconfiguration() {
        assert!(StartupError::Config("x".into()).hint().is_some());
        assert!(StartupError::Auth("x".into()).hint().is_some());
        assert!(StartupError::Timeout("x".into()).hint().is_some());
        assert!(StartupError::Unexpected(mongodb::error::Error::custom("x"))
            .hint()
            .is_none());
    }
}
