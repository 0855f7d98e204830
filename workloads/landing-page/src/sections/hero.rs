//! Hero and trust strip.

use physio_content::PracticeInfo;
use physio_streaming::escape_html;

/// Render the hero section.
pub fn render_hero(practice: &PracticeInfo) -> String {
    let badges: String = practice
        .credentials
        .iter()
        .map(|c| format!(r#"<span class="credential-badge">{}</span>"#, escape_html(c)))
        .collect();

    format!(
        r##"<section id="home" class="hero" data-section="hero">
    <div class="hero-content">
        <h1>Professional <span class="highlight">Home Physiotherapy</span></h1>
        <div class="credentials">{badges}</div>
        <p>{intro}</p>
        <a href="#contact" class="cta-button"><span>&#128197;</span> Book Your Consultation</a>
    </div>
    <div class="hero-image">
        <img src="{image}" alt="Home physiotherapy care" loading="eager">
    </div>
</section>
"##,
        intro = escape_html(&practice.hero_intro),
        image = escape_html(&practice.hero_image),
    )
}

/// Render the registration and insurance badges under the hero.
pub fn render_trust(practice: &PracticeInfo) -> String {
    let cards: String = practice
        .trust_badges
        .iter()
        .map(|b| {
            format!(
                r#"<div class="trust-card">
            <span class="trust-icon">{}</span>
            <div>
                <strong>{}</strong>
                <p class="trust-detail">{}</p>
            </div>
        </div>"#,
                escape_html(&b.icon),
                escape_html(&b.heading),
                escape_html(&b.detail)
            )
        })
        .collect();

    format!(
        r#"<section class="trust-section" data-section="trust">
    <div class="trust-container">
        {}
    </div>
</section>
"#,
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_shows_credentials() {
        let html = render_hero(&PracticeInfo::default());
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(r#"<span class="credential-badge">HCPC Registered</span>"#));
        assert!(html.contains(r#"<span class="credential-badge">BSc (Hons) Physiotherapy</span>"#));
        assert!(html.contains(r#"src="/evhastasi.jpg""#));
    }

    #[test]
    fn test_trust_badges_escaped() {
        let html = render_trust(&PracticeInfo::default());
        assert_eq!(html.matches("trust-card").count(), 3);
        assert!(html.contains("Health &amp; Care Professions Council"));
    }
}
