//! Contact form payload parsing and validation.

use serde::Deserialize;

use crate::ContactError;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Default, Deserialize)]
struct RawSubmission {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// A validated consultation request. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    /// Not format-checked.
    pub email: Option<String>,
    pub message: String,
}

impl Submission {
    /// Parse and validate a JSON request body.
    pub fn parse(body: &[u8]) -> Result<Self, ContactError> {
        if body.len() > MAX_BODY_BYTES {
            return Err(ContactError::BodyTooLarge {
                size: body.len(),
                limit: MAX_BODY_BYTES,
            });
        }

        let raw: RawSubmission =
            serde_json::from_slice(body).map_err(|e| ContactError::InvalidBody(e.to_string()))?;

        let name = non_blank(raw.name);
        let phone = non_blank(raw.phone);
        let message = non_blank(raw.message);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if phone.is_none() {
            missing.push("phone");
        }
        if message.is_none() {
            missing.push("message");
        }

        match (name, phone, message) {
            (Some(name), Some(phone), Some(message)) => Ok(Self {
                name,
                phone,
                email: non_blank(raw.email),
                message,
            }),
            _ => Err(ContactError::MissingFields(missing)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Valid Payload Tests ===

    #[test]
    fn test_parse_without_email() {
        let body = br#"{"name":"Jane","phone":"0700000000","message":"Hip pain"}"#;
        let submission = Submission::parse(body).unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.phone, "0700000000");
        assert_eq!(submission.email, None);
        assert_eq!(submission.message, "Hip pain");
    }

    #[test]
    fn test_parse_trims_fields() {
        let body = br#"{"name":"  Jane ","phone":" 0700 ","email":" jane@example.com ","message":"\nHip pain\n"}"#;
        let submission = Submission::parse(body).unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.phone, "0700");
        assert_eq!(submission.email.as_deref(), Some("jane@example.com"));
        assert_eq!(submission.message, "Hip pain");
    }

    #[test]
    fn test_blank_or_null_email_is_absent() {
        let body = br#"{"name":"Jane","phone":"07","email":"   ","message":"Hi"}"#;
        assert_eq!(Submission::parse(body).unwrap().email, None);

        let body = br#"{"name":"Jane","phone":"07","email":null,"message":"Hi"}"#;
        assert_eq!(Submission::parse(body).unwrap().email, None);
    }

    #[test]
    fn test_email_format_not_checked() {
        let body = br#"{"name":"Jane","phone":"07","email":"not-an-email","message":"Hi"}"#;
        assert_eq!(Submission::parse(body).unwrap().email.as_deref(), Some("not-an-email"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = br#"{"name":"Jane","phone":"07","message":"Hi","source":"landing"}"#;
        assert!(Submission::parse(body).is_ok());
    }

    // === Validation Tests ===

    #[test]
    fn test_empty_name_rejected() {
        let body = br#"{"name":"","phone":"0700000000","message":"Hip pain"}"#;
        assert_eq!(
            Submission::parse(body),
            Err(ContactError::MissingFields(vec!["name"]))
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let body = br#"{"name":"Jane","phone":"   ","message":"\t"}"#;
        assert_eq!(
            Submission::parse(body),
            Err(ContactError::MissingFields(vec!["phone", "message"]))
        );
    }

    #[test]
    fn test_empty_object_reports_all_missing() {
        assert_eq!(
            Submission::parse(b"{}"),
            Err(ContactError::MissingFields(vec!["name", "phone", "message"]))
        );
    }

    // === Malformed Body Tests ===

    #[test]
    fn test_non_json_body() {
        assert!(matches!(
            Submission::parse(b"name=Jane"),
            Err(ContactError::InvalidBody(_))
        ));
        assert!(matches!(Submission::parse(b""), Err(ContactError::InvalidBody(_))));
    }

    #[test]
    fn test_non_object_body() {
        assert!(matches!(Submission::parse(b"[]"), Err(ContactError::InvalidBody(_))));
        assert!(matches!(Submission::parse(b"\"Jane\""), Err(ContactError::InvalidBody(_))));
    }

    #[test]
    fn test_non_string_field() {
        let body = br#"{"name":"Jane","phone":7000,"message":"Hi"}"#;
        assert!(matches!(Submission::parse(body), Err(ContactError::InvalidBody(_))));
    }

    #[test]
    fn test_oversized_body() {
        let body = vec![b' '; MAX_BODY_BYTES + 1];
        assert_eq!(
            Submission::parse(&body),
            Err(ContactError::BodyTooLarge {
                size: MAX_BODY_BYTES + 1,
                limit: MAX_BODY_BYTES,
            })
        );
    }
}
