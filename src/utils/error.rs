//! Error handling.

use serde::Deserialize;
use std::fmt;

/// Message the API sends when a request carries no session token.
pub const TOKEN_NOT_FOUND: &str = "Token not found";

/// Failure of a remote auth call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The request never produced a usable reply (connection, timeout, TLS).
    Network(String),
    /// The server answered but refused the request.
    Rejected(String),
    /// No session token was sent. Not worth telling the user about.
    TokenNotFound,
    /// The reply body did not have the expected shape.
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorReply {
    message: Option<String>,
    error: Option<String>,
}

impl AuthError {
    /// Maps a server-provided message to an error.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim() == TOKEN_NOT_FOUND {
            Self::TokenNotFound
        } else {
            Self::Rejected(message)
        }
    }

    /// Builds an error from a non-2xx reply.
    pub fn from_reply(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorReply>(body)
            .ok()
            .and_then(|reply| reply.message.or(reply.error))
            .filter(|message| !message.trim().is_empty());

        match message {
            Some(message) => Self::from_message(message),
            None => Self::Rejected(format!("Request failed with status {status}")),
        }
    }

    pub const fn is_token_missing(&self) -> bool {
        matches!(self, Self::TokenNotFound)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::Rejected(message) => write!(f, "{message}"),
            Self::TokenNotFound => write!(f, "{TOKEN_NOT_FOUND}"),
            Self::Decode(e) => write!(f, "Unexpected server response: {e}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_message_becomes_rejection() {
        let err = AuthError::from_reply(401, r#"{"success":false,"message":"Invalid credentials"}"#);
        assert_eq!(err, AuthError::Rejected("Invalid credentials".to_string()));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn missing_token_is_distinguished() {
        let err = AuthError::from_reply(401, r#"{"message":"Token not found"}"#);
        assert!(err.is_token_missing());
        assert_eq!(err.to_string(), TOKEN_NOT_FOUND);
    }

    #[test]
    fn error_field_is_accepted() {
        let err = AuthError::from_reply(500, r#"{"error":"Database unavailable"}"#);
        assert_eq!(err, AuthError::Rejected("Database unavailable".to_string()));
    }

    #[test]
    fn unreadable_body_falls_back_to_status() {
        let err = AuthError::from_reply(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
    }
}
