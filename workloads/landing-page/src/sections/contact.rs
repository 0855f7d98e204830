//! Contact details and consultation form.

use physio_content::PracticeInfo;
use physio_streaming::escape_html;

use crate::state::{FormState, SubmitStatus, SUCCESS_TEXT};

/// Endpoint the form script posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Render the contact section.
pub fn render_contact(practice: &PracticeInfo, form: &FormState) -> String {
    let error = match form.error() {
        Some(message) => format!(
            r#"<div class="form-notice form-error" role="alert">&#9888; <span class="notice-text">{}</span></div>"#,
            escape_html(message)
        ),
        None => r#"<div class="form-notice form-error" role="alert" hidden>&#9888; <span class="notice-text"></span></div>"#
            .to_string(),
    };

    let success_hidden = if form.status == SubmitStatus::Succeeded { "" } else { " hidden" };
    let disabled = if form.is_submitting() { " disabled" } else { "" };

    format!(
        r#"<section id="contact" class="contact-section" data-section="contact">
    <div class="contact-container">
        <div class="contact-info">
            <h2>Get in Touch</h2>
            <p>{intro}</p>
            <div class="contact-details">
                <div class="contact-item"><span>&#128222;</span> <a href="{phone_href}">{phone}</a></div>
                <div class="contact-item"><span>&#128231;</span> <a href="mailto:{email}">{email}</a></div>
            </div>
            <div class="coverage-area">
                <h4>&#128205; Service Areas</h4>
                <p>{areas}</p>
            </div>
        </div>
        <form class="contact-form" id="contact-form" data-endpoint="{endpoint}" novalidate>
            {error}
            <div class="form-notice form-success" role="status"{success_hidden}>&#10003; {success}</div>
            <input type="text" name="name" placeholder="Your Name *" value="{name}" required>
            <input type="tel" name="phone" placeholder="Phone Number *" value="{phone_value}" required>
            <input type="email" name="email" placeholder="Email Address" value="{email_value}">
            <textarea name="message" placeholder="Tell us about your condition and how we can help... *" required>{message}</textarea>
            <button type="submit"{disabled}>{label}</button>
            <p class="form-footnote">We typically respond within 24 hours</p>
            <noscript><p class="form-footnote">Please enable JavaScript to send this form, or call us on {phone}.</p></noscript>
        </form>
    </div>
</section>
"#,
        intro = escape_html(&practice.contact_intro),
        phone_href = escape_html(&practice.phone_href()),
        phone = escape_html(&practice.phone),
        email = escape_html(&practice.email),
        areas = escape_html(&practice.service_areas),
        endpoint = CONTACT_ENDPOINT,
        success = escape_html(SUCCESS_TEXT),
        name = escape_html(&form.fields.name),
        phone_value = escape_html(&form.fields.phone),
        email_value = escape_html(&form.fields.email),
        message = escape_html(&form.fields.message),
        label = form.button_label(),
    )
}
