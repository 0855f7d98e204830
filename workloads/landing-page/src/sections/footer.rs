//! Page footer.

use physio_content::PracticeInfo;
use physio_streaming::escape_html;

/// Render the footer. `year` is the current calendar year.
pub fn render_footer(practice: &PracticeInfo, year: i32) -> String {
    format!(
        r#"<footer data-section="footer">
    <p><strong>{name} {post_nominals} &ndash; {role}</strong></p>
    <p class="footer-registrations">{registrations}</p>
    <p class="footer-copyright">&copy; {year} {name} Physiotherapy. All rights reserved.</p>
</footer>
"#,
        name = escape_html(&practice.practitioner),
        post_nominals = escape_html(&practice.post_nominals),
        role = escape_html(&practice.role),
        registrations = escape_html(&practice.registrations),
    )
}
