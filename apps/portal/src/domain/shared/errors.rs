use crate::i18n::{current::common, fill_one};
use thiserror::Error;

/// Failure of a call to the remote CMS API.
///
/// Every remote operation collapses into one of these variants at the client
/// boundary, so controllers branch on a typed value instead of catching.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Request rejected with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_permission_denied(&self) -> bool {
        self.status() == Some(403)
    }

    /// Message sent by the server, if it sent a non-blank one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Human-readable message: the server's message, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Like [`ApiError::user_message`], but a rejection without a message is
    /// reported by its status code.
    pub fn user_message_with_status(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            Self::Status { status, .. } => fill_one(common::STATUS_ERROR_TEMPLATE, status),
            _ => fallback.to_string(),
        }
    }
}
