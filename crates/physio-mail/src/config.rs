//! Mail delivery configuration.

use physio_core::{ConfigError, ConfigSource};
use url::Url;

/// Addresses and credentials used by the contact handler.
///
/// Built once per request from the component's variables and passed into the
/// handler; nothing here is a compile-time constant.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    /// Provider base URL without a trailing slash.
    pub api_base: String,
    /// Where consultation requests are delivered.
    pub operator_email: String,
    pub notification_from: String,
    pub acknowledgment_from: String,
    /// Reply-to used when the submitter gave no email.
    pub fallback_reply_to: String,
    pub practice_phone: String,
    pub practitioner_name: String,
    pub practitioner_title: String,
}

impl MailConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.resend.com";

    /// Read the configuration. `resend_api_key` and `operator_email` are required.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let api_base = origin(&source.get_or("resend_api_base", Self::DEFAULT_API_BASE))?;

        Ok(Self {
            api_key: source.require("resend_api_key")?,
            api_base,
            operator_email: source.require("operator_email")?,
            notification_from: source
                .get_or("notification_from", "Home Physio Contact <onboarding@resend.dev>"),
            acknowledgment_from: source
                .get_or("acknowledgment_from", "Home Physio <onboarding@resend.dev>"),
            fallback_reply_to: source.get_or("fallback_reply_to", "noreply@example.com"),
            practice_phone: source.get_or("practice_phone", "07466 012234"),
            practitioner_name: source.get_or("practitioner_name", "Ismail Aram"),
            practitioner_title: source.get_or("practitioner_title", "Chartered Physiotherapist"),
        })
    }
}

/// Validate the provider base as a bare origin.
///
/// The same value is the component's `allowed_outbound_hosts` entry, so a
/// path or query would never match the allow-list.
fn origin(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: "resend_api_base".to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("must be an http(s) URL"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must be an origin without path or query"));
    }

    Ok(url.origin().ascii_serialization())
}

// Keeps the API key out of logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("operator_email", &self.operator_email)
            .field("notification_from", &self.notification_from)
            .field("acknowledgment_from", &self.acknowledgment_from)
            .field("fallback_reply_to", &self.fallback_reply_to)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physio_core::MapSource;

    fn minimal() -> MapSource {
        MapSource::new()
            .with("resend_api_key", "re_secret")
            .with("operator_email", "clinic@example.com")
    }

    #[test]
    fn test_defaults_applied() {
        let config = MailConfig::from_source(&minimal()).unwrap();
        assert_eq!(config.api_base, "https://api.resend.com");
        assert_eq!(config.notification_from, "Home Physio Contact <onboarding@resend.dev>");
        assert_eq!(config.acknowledgment_from, "Home Physio <onboarding@resend.dev>");
        assert_eq!(config.fallback_reply_to, "noreply@example.com");
        assert_eq!(config.practice_phone, "07466 012234");
    }

    #[test]
    fn test_missing_api_key() {
        let source = MapSource::new().with("operator_email", "clinic@example.com");
        assert_eq!(
            MailConfig::from_source(&source),
            Err(ConfigError::Missing("resend_api_key".to_string()))
        );
    }

    #[test]
    fn test_missing_operator() {
        let source = MapSource::new().with("resend_api_key", "re_secret");
        assert_eq!(
            MailConfig::from_source(&source),
            Err(ConfigError::Missing("operator_email".to_string()))
        );
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let source = minimal().with("resend_api_base", "http://localhost:3000/");
        let config = MailConfig::from_source(&source).unwrap();
        assert_eq!(config.api_base, "http://localhost:3000");
    }

    #[test]
    fn test_api_base_must_be_url() {
        let source = minimal().with("resend_api_base", "api.resend.com");
        assert!(matches!(
            MailConfig::from_source(&source),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_api_base_must_be_origin() {
        for base in [
            "https://api.resend.com/v1",
            "https://api.resend.com/?region=eu",
            "ftp://api.resend.com",
        ] {
            let source = minimal().with("resend_api_base", base);
            assert!(
                matches!(
                    MailConfig::from_source(&source),
                    Err(ConfigError::Invalid { ref key, .. }) if key == "resend_api_base"
                ),
                "{}",
                base
            );
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = MailConfig::from_source(&minimal()).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("re_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
