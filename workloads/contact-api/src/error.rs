//! Contact handler errors and their HTTP mapping.

use http::StatusCode;
use physio_core::ConfigError;
use physio_mail::MailError;
use thiserror::Error;

/// Everything that can end a contact request early.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("request body of {size} bytes exceeds {limit}")]
    BodyTooLarge { size: usize, limit: usize },

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The provider refused the notification email.
    #[error("notification rejected: {0}")]
    NotificationRejected(MailError),

    /// The notification could not be attempted or its outcome is unknown.
    #[error("notification failed: {0}")]
    NotificationFailed(MailError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidBody(_) | Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::NotificationRejected(_) | Self::NotificationFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the client. Server-side detail stays in the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed(_) => "Method not allowed",
            Self::BodyTooLarge { .. } => "Request body too large",
            Self::InvalidBody(_) => "Invalid request body",
            Self::MissingFields(_) => "Name, phone, and message are required",
            Self::NotificationRejected(_) => "Failed to send email",
            Self::Config(_) | Self::NotificationFailed(_) => "Internal server error",
        }
    }

    /// Classify a failed notification send.
    pub fn from_notification(error: MailError) -> Self {
        if error.is_rejection() {
            Self::NotificationRejected(error)
        } else {
            Self::NotificationFailed(error)
        }
    }

    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed(_) => "method_not_allowed",
            Self::BodyTooLarge { .. } => "body_too_large",
            Self::InvalidBody(_) => "invalid_body",
            Self::MissingFields(_) => "missing_fields",
            Self::Config(_) => "config",
            Self::NotificationRejected(_) => "provider_rejected",
            Self::NotificationFailed(_) => "provider_unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physio_mail::FetchError;

    #[test]
    fn test_client_errors() {
        let err = ContactError::MethodNotAllowed("GET".to_string());
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.public_message(), "Method not allowed");

        let err = ContactError::MissingFields(vec!["name"]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Name, phone, and message are required");
        assert_eq!(err.to_string(), "missing required fields: name");

        let err = ContactError::BodyTooLarge { size: 70_000, limit: 65_536 };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_notification_classification() {
        let rejected = MailError::Rejected {
            status: 403,
            name: "validation_error".to_string(),
            message: "domain not verified".to_string(),
        };
        let err = ContactError::from_notification(rejected);
        assert_eq!(err.public_message(), "Failed to send email");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let unreachable = MailError::Transport(FetchError::RequestError("dns".to_string()));
        let err = ContactError::from_notification(unreachable);
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(err.kind(), "provider_unreachable");
    }

    #[test]
    fn test_config_error_is_internal() {
        let err = ContactError::from(ConfigError::Missing("resend_api_key".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }
}
