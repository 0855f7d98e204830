//! Contact request processing.
//!
//! Validation runs before configuration is read, so client errors never touch
//! the variable store or the mail provider.

use physio_core::{ConfigError, Method};
use physio_mail::{MailConfig, MailProvider};
use physio_observability::StructuredLogger;

use crate::{emails, ApiResponse, ContactError, Submission};

/// Outcome of the best-effort acknowledgment send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Sent,
    Failed,
    /// No submitter email was given.
    Skipped,
}

impl Acknowledgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Check the method and parse the body. Has no side effects.
pub fn accept(method: &Method, body: &[u8]) -> Result<Submission, ContactError> {
    if *method != Method::Post {
        return Err(ContactError::MethodNotAllowed(method.to_string()));
    }
    Submission::parse(body)
}

/// Sends the emails for one validated submission.
pub struct ContactHandler<'a, P> {
    provider: P,
    config: MailConfig,
    logger: &'a StructuredLogger,
}

impl<'a, P: MailProvider> ContactHandler<'a, P> {
    pub fn new(provider: P, config: MailConfig, logger: &'a StructuredLogger) -> Self {
        Self {
            provider,
            config,
            logger,
        }
    }

    /// Send the notification, then the acknowledgment if the submitter gave
    /// an email. Only a failed notification is an error.
    pub async fn deliver(&self, submission: &Submission) -> Result<Acknowledgment, ContactError> {
        let notification = emails::notification(submission, &self.config);
        let receipt = self
            .provider
            .send(&notification)
            .await
            .map_err(ContactError::from_notification)?;

        self.logger
            .info_builder("Notification sent")
            .field("email_id", receipt.id)
            .field_bool("has_email", submission.email.is_some())
            .emit();

        let Some(acknowledgment) = emails::acknowledgment(submission, &self.config) else {
            return Ok(Acknowledgment::Skipped);
        };

        match self.provider.send(&acknowledgment).await {
            Ok(receipt) => {
                self.logger
                    .info_builder("Acknowledgment sent")
                    .field("email_id", receipt.id)
                    .emit();
                Ok(Acknowledgment::Sent)
            }
            Err(e) => {
                self.logger
                    .warn_builder("Acknowledgment failed")
                    .field("error", e.to_string())
                    .emit();
                Ok(Acknowledgment::Failed)
            }
        }
    }
}

/// Handle one request end to end.
///
/// `load_config` is only called for well-formed submissions and `connect`
/// builds the provider from the loaded config.
pub async fn process<C, F, P>(
    method: &Method,
    body: &[u8],
    logger: &StructuredLogger,
    load_config: C,
    connect: F,
) -> ApiResponse
where
    C: FnOnce() -> Result<MailConfig, ConfigError>,
    F: FnOnce(&MailConfig) -> P,
    P: MailProvider,
{
    match run(method, body, logger, load_config, connect).await {
        Ok(ack) => {
            logger
                .info_builder("Consultation request relayed")
                .field("acknowledgment", ack.as_str())
                .emit();
            ApiResponse::success("Email sent successfully").with_header("x-acknowledgment", ack.as_str())
        }
        Err(e) => {
            let builder = if e.status().is_server_error() {
                logger.error_builder("Contact request failed")
            } else {
                logger.warn_builder("Contact request rejected")
            };
            builder
                .field("kind", e.kind())
                .field("error", e.to_string())
                .field_i64("status", i64::from(e.status().as_u16()))
                .emit();
            ApiResponse::from_error(&e)
        }
    }
}

async fn run<C, F, P>(
    method: &Method,
    body: &[u8],
    logger: &StructuredLogger,
    load_config: C,
    connect: F,
) -> Result<Acknowledgment, ContactError>
where
    C: FnOnce() -> Result<MailConfig, ConfigError>,
    F: FnOnce(&MailConfig) -> P,
    P: MailProvider,
{
    let submission = accept(method, body)?;
    let config = load_config()?;
    let provider = connect(&config);
    ContactHandler::new(provider, config, logger)
        .deliver(&submission)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use http::StatusCode;
    use physio_core::{MapSource, RequestId};
    use physio_mail::{EmailMessage, FetchError, MailError, SendReceipt};
    use physio_observability::LogLevel;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Records every message and replies with scripted results, then `Ok`.
    #[derive(Default)]
    struct FakeProvider {
        sent: RefCell<Vec<EmailMessage>>,
        replies: RefCell<VecDeque<Result<SendReceipt, MailError>>>,
    }

    impl FakeProvider {
        fn replying(replies: Vec<Result<SendReceipt, MailError>>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.into()),
            }
        }

        fn sent(&self) -> Vec<EmailMessage> {
            self.sent.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl MailProvider for FakeProvider {
        async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, MailError> {
            self.sent.borrow_mut().push(message.clone());
            self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
                Ok(SendReceipt {
                    id: format!("email-{}", self.sent.borrow().len()),
                })
            })
        }
    }

    fn rejected() -> MailError {
        MailError::Rejected {
            status: 422,
            name: "validation_error".to_string(),
            message: "Invalid `from` field".to_string(),
        }
    }

    fn unreachable() -> MailError {
        MailError::Transport(FetchError::RequestError("connection reset".to_string()))
    }

    fn config() -> Result<MailConfig, ConfigError> {
        let source = MapSource::new()
            .with("resend_api_key", "re_test")
            .with("operator_email", "clinic@example.com");
        MailConfig::from_source(&source)
    }

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test"))
            .with_workload("contact-api")
            .with_min_level(LogLevel::Error)
    }

    fn run_with(method: Method, body: &str, provider: &FakeProvider) -> ApiResponse {
        let logger = logger();
        block_on(process(&method, body.as_bytes(), &logger, config, |_| provider))
    }

    const VALID: &str = r#"{"name":"Jane","phone":"0700000000","message":"Hip pain"}"#;
    const VALID_WITH_EMAIL: &str =
        r#"{"name":"Jane","phone":"0700000000","email":"jane@example.com","message":"Hip pain"}"#;

    // === Method Tests ===

    #[test]
    fn test_get_not_allowed_without_side_effects() {
        let provider = FakeProvider::default();
        let config_read = Cell::new(false);
        let logger = logger();

        let response = block_on(process(
            &Method::Get,
            VALID.as_bytes(),
            &logger,
            || {
                config_read.set(true);
                config()
            },
            |_| &provider,
        ));

        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.body_json().unwrap(), json!({"error": "Method not allowed"}));
        assert_eq!(response.header("allow"), Some("POST"));
        assert!(provider.sent().is_empty());
        assert!(!config_read.get());
    }

    #[test]
    fn test_every_non_post_method_rejected() {
        for method in [Method::Put, Method::Delete, Method::Patch, Method::Head, Method::Options] {
            let provider = FakeProvider::default();
            let response = run_with(method, VALID, &provider);
            assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
            assert!(provider.sent().is_empty());
        }
    }

    // === Validation Tests ===

    #[test]
    fn test_empty_name_rejected_without_email() {
        let provider = FakeProvider::default();
        let body = r#"{"name":"","phone":"0700000000","message":"Hip pain"}"#;
        let response = run_with(Method::Post, body, &provider);

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body_json().unwrap(),
            json!({"error": "Name, phone, and message are required"})
        );
        assert!(provider.sent().is_empty());
    }

    #[test]
    fn test_missing_phone_or_message_rejected() {
        for body in [
            r#"{"name":"Jane","message":"Hip pain"}"#,
            r#"{"name":"Jane","phone":"0700000000"}"#,
        ] {
            let provider = FakeProvider::default();
            assert_eq!(run_with(Method::Post, body, &provider).status, StatusCode::BAD_REQUEST);
            assert!(provider.sent().is_empty());
        }
    }

    #[test]
    fn test_malformed_body() {
        let provider = FakeProvider::default();
        let response = run_with(Method::Post, "{not json", &provider);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body_json().unwrap(), json!({"error": "Invalid request body"}));
        assert!(provider.sent().is_empty());
    }

    #[test]
    fn test_oversized_body() {
        let provider = FakeProvider::default();
        let body = format!(
            r#"{{"name":"Jane","phone":"07","message":"{}"}}"#,
            "x".repeat(crate::MAX_BODY_BYTES)
        );
        let response = run_with(Method::Post, &body, &provider);
        assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(provider.sent().is_empty());
    }

    // === Delivery Tests ===

    #[test]
    fn test_valid_without_email_sends_one_notification() {
        let provider = FakeProvider::default();
        let response = run_with(Method::Post, VALID, &provider);

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body_json().unwrap(),
            json!({"success": true, "message": "Email sent successfully"})
        );
        assert_eq!(response.header("x-acknowledgment"), Some("skipped"));

        let sent = provider.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, ["clinic@example.com"]);
        assert_eq!(sent[0].subject, "New Consultation Request from Jane");
    }

    #[test]
    fn test_notification_rejected_is_500() {
        let provider = FakeProvider::replying(vec![Err(rejected())]);
        let response = run_with(Method::Post, VALID_WITH_EMAIL, &provider);

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body_json().unwrap(), json!({"error": "Failed to send email"}));
        // The acknowledgment is never attempted.
        assert_eq!(provider.sent().len(), 1);
        assert_eq!(response.header("x-acknowledgment"), None);
    }

    #[test]
    fn test_notification_unreachable_is_internal_error() {
        let provider = FakeProvider::replying(vec![Err(unreachable())]);
        let response = run_with(Method::Post, VALID, &provider);

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body_json().unwrap(), json!({"error": "Internal server error"}));
    }

    #[test]
    fn test_with_email_sends_acknowledgment() {
        let provider = FakeProvider::default();
        let response = run_with(Method::Post, VALID_WITH_EMAIL, &provider);

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.header("x-acknowledgment"), Some("sent"));

        let sent = provider.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(sent[1].to, ["jane@example.com"]);
        assert_eq!(sent[1].subject, "Thank you for your consultation request");
    }

    #[test]
    fn test_acknowledgment_failure_still_succeeds() {
        let receipt = SendReceipt { id: "n-1".to_string() };
        let provider = FakeProvider::replying(vec![Ok(receipt), Err(rejected())]);
        let response = run_with(Method::Post, VALID_WITH_EMAIL, &provider);

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body_json().unwrap()["success"], json!(true));
        assert_eq!(response.header("x-acknowledgment"), Some("failed"));
        assert_eq!(provider.sent().len(), 2);
    }

    #[test]
    fn test_acknowledgment_transport_failure_still_succeeds() {
        let receipt = SendReceipt { id: "n-1".to_string() };
        let provider = FakeProvider::replying(vec![Ok(receipt), Err(unreachable())]);
        let response = run_with(Method::Post, VALID_WITH_EMAIL, &provider);
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.header("x-acknowledgment"), Some("failed"));
    }

    // === Configuration Tests ===

    #[test]
    fn test_missing_config_is_internal_error() {
        let provider = FakeProvider::default();
        let logger = logger();
        let response = block_on(process(
            &Method::Post,
            VALID.as_bytes(),
            &logger,
            || Err(ConfigError::Missing("resend_api_key".to_string())),
            |_| &provider,
        ));

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body_json().unwrap(), json!({"error": "Internal server error"}));
        assert!(provider.sent().is_empty());
    }

    #[test]
    fn test_provider_built_from_loaded_config() {
        let provider = FakeProvider::default();
        let logger = logger();
        let seen_key = RefCell::new(String::new());

        block_on(process(
            &Method::Post,
            VALID.as_bytes(),
            &logger,
            config,
            |config| {
                *seen_key.borrow_mut() = config.api_key.clone();
                &provider
            },
        ));

        assert_eq!(*seen_key.borrow(), "re_test");
    }

    #[test]
    fn test_acknowledgment_labels() {
        assert_eq!(Acknowledgment::Sent.as_str(), "sent");
        assert_eq!(Acknowledgment::Failed.as_str(), "failed");
        assert_eq!(Acknowledgment::Skipped.as_str(), "skipped");
    }
}
