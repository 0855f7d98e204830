//! Mail providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{EmailMessage, HttpTransport, MailConfig, MailError, OutboundRequest};

/// Identifier the provider assigned to an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}

/// Delivers email messages.
#[async_trait(?Send)]
pub trait MailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, MailError>;
}

#[async_trait(?Send)]
impl<P: MailProvider + ?Sized> MailProvider for &P {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, MailError> {
        (**self).send(message).await
    }
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> From<&'a EmailMessage> for ResendEmail<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            from: &message.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
            reply_to: message.reply_to.as_deref(),
        }
    }
}

/// Error body returned by Resend, e.g.
/// `{"statusCode":422,"name":"validation_error","message":"..."}`.
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Resend (`POST /emails`) provider.
pub struct ResendProvider<T> {
    transport: T,
    api_key: String,
    api_base: String,
}

impl<T: HttpTransport> ResendProvider<T> {
    pub fn new(transport: T, config: &MailConfig) -> Self {
        Self {
            transport,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_base)
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> MailProvider for ResendProvider<T> {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, MailError> {
        message.validate()?;

        let request = OutboundRequest::post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&ResendEmail::from(message))?;

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            // Non-JSON error bodies still count as a rejection.
            let body = response.json::<ResendErrorBody>().ok();
            let (name, detail) = match body {
                Some(body) => (body.name, body.message),
                None => (None, None),
            };
            return Err(MailError::Rejected {
                status: response.status,
                name: name.unwrap_or_else(|| "unknown_error".to_string()),
                message: detail
                    .or_else(|| response.text().ok())
                    .unwrap_or_default(),
            });
        }

        Ok(response.json::<SendReceipt>()?)
    }
}
