//! Provider-neutral email message.

use crate::MailError;

/// A single HTML email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Sender, e.g. `Home Physio <hello@example.com>`.
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

impl EmailMessage {
    pub fn new(from: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Vec::new(),
            subject: subject.into(),
            html: String::new(),
            reply_to: None,
        }
    }

    /// Add a recipient.
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    /// Check the message can be handed to a provider.
    pub fn validate(&self) -> Result<(), MailError> {
        if self.from.trim().is_empty() {
            return Err(MailError::InvalidMessage("missing sender".to_string()));
        }
        if self.to.iter().all(|r| r.trim().is_empty()) {
            return Err(MailError::InvalidMessage("no recipients".to_string()));
        }
        if self.subject.trim().is_empty() {
            return Err(MailError::InvalidMessage("missing subject".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let message = EmailMessage::new("Clinic <a@example.com>", "Hello")
            .to("b@example.com")
            .reply_to("c@example.com")
            .html("<p>Hi</p>");
        assert_eq!(message.to, ["b@example.com"]);
        assert_eq!(message.reply_to.as_deref(), Some("c@example.com"));
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_recipient() {
        let message = EmailMessage::new("a@example.com", "Hello");
        assert_eq!(
            message.validate(),
            Err(MailError::InvalidMessage("no recipients".to_string()))
        );
    }

    #[test]
    fn test_validate_requires_subject() {
        let message = EmailMessage::new("a@example.com", " ").to("b@example.com");
        assert!(matches!(message.validate(), Err(MailError::InvalidMessage(_))));
    }
}
