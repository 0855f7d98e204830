//! Email templates for consultation requests.

use physio_mail::{EmailMessage, MailConfig};
use physio_streaming::{escape_html, escape_multiline};

use crate::Submission;

/// Email to the practice operator announcing a new request.
pub fn notification(submission: &Submission, config: &MailConfig) -> EmailMessage {
    let name = escape_html(&submission.name);
    let phone = escape_html(&submission.phone);
    let message = escape_multiline(&submission.message);

    let (email_row, reply_hint) = match &submission.email {
        Some(email) => (
            format!("<p><strong>Email:</strong> {}</p>", escape_html(email)),
            format!("<p>You can reply directly to this email to respond to {}.</p>", name),
        ),
        None => (String::new(), String::new()),
    };

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">New Consultation Request</h2>
  <div style="background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Phone:</strong> {phone}</p>
    {email_row}
  </div>
  <div style="background: #ffffff; padding: 20px; border: 1px solid #e2e8f0; border-radius: 8px;">
    <h3 style="color: #1e293b; margin-top: 0;">Message:</h3>
    <p style="color: #475569; line-height: 1.6;">{message}</p>
  </div>
  <div style="margin-top: 20px; padding-top: 20px; border-top: 1px solid #e2e8f0; color: #64748b; font-size: 12px;">
    <p>This message was sent from the Home Physio website contact form.</p>
    {reply_hint}
  </div>
</div>"#
    );

    let reply_to = submission
        .email
        .clone()
        .unwrap_or_else(|| config.fallback_reply_to.clone());

    EmailMessage::new(
        &config.notification_from,
        format!("New Consultation Request from {}", submission.name),
    )
    .to(&config.operator_email)
    .reply_to(reply_to)
    .html(html)
}

/// Confirmation to the submitter, if they gave an email address.
pub fn acknowledgment(submission: &Submission, config: &MailConfig) -> Option<EmailMessage> {
    let recipient = submission.email.as_ref()?;

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">Thank you for contacting us!</h2>
  <p>Dear {name},</p>
  <p>Thank you for reaching out to Home Physio. We have received your consultation request and will get back to you within 24 hours.</p>
  <div style="background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Your Message:</strong></p>
    <p style="color: #475569; line-height: 1.6;">{message}</p>
  </div>
  <p>If you have any urgent questions, please call us at <strong>{phone}</strong>.</p>
  <p>Best regards,<br>{practitioner}<br>{title}</p>
</div>"#,
        name = escape_html(&submission.name),
        message = escape_multiline(&submission.message),
        phone = escape_html(&config.practice_phone),
        practitioner = escape_html(&config.practitioner_name),
        title = escape_html(&config.practitioner_title),
    );

    Some(
        EmailMessage::new(
            &config.acknowledgment_from,
            "Thank you for your consultation request",
        )
        .to(recipient)
        .html(html),
    )
}
