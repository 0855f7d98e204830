//! Practice and practitioner details.

/// A badge in the trust strip under the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustBadge {
    pub icon: String,
    pub heading: String,
    pub detail: String,
}

impl TrustBadge {
    pub fn new(icon: &str, heading: &str, detail: &str) -> Self {
        Self {
            icon: icon.to_string(),
            heading: heading.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Who the practice is and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeInfo {
    /// Brand shown in the nav bar.
    pub brand: String,
    pub practitioner: String,
    pub post_nominals: String,
    pub role: String,
    /// Phone number as displayed.
    pub phone: String,
    pub email: String,
    /// Hero credential badges.
    pub credentials: Vec<String>,
    pub trust_badges: Vec<TrustBadge>,
    pub hero_intro: String,
    pub hero_image: String,
    pub contact_intro: String,
    pub service_areas: String,
    /// Footer registration line.
    pub registrations: String,
}

impl PracticeInfo {
    /// Phone number for a `tel:` link (digits and a leading `+` only).
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

impl Default for PracticeInfo {
    fn default() -> Self {
        Self {
            brand: "Home Physiotherapy Visit".to_string(),
            practitioner: "Ismail Aram".to_string(),
            post_nominals: "BSc (Hons) MCSP".to_string(),
            role: "Chartered Physiotherapist".to_string(),
            phone: "07466 012234".to_string(),
            email: "ismailaram94@gmail.com".to_string(),
            credentials: vec![
                "HCPC Registered".to_string(),
                "MCSP Chartered".to_string(),
                "BSc (Hons) Physiotherapy".to_string(),
            ],
            trust_badges: vec![
                TrustBadge::new("🛡️", "HCPC Registered", "Health & Care Professions Council"),
                TrustBadge::new("⚡", "Chartered Physiotherapist", "Member of CSP (MCSP)"),
                TrustBadge::new("🏠", "Home Visit Specialist", "Fully Insured & DBS Checked"),
            ],
            hero_intro: "Delivering specialist, evidence-based physiotherapy care in the comfort and safety of your own home. Comprehensive rehabilitation programmes tailored to your individual needs and goals.".to_string(),
            hero_image: "/evhastasi.jpg".to_string(),
            contact_intro: "Ready to start your recovery journey? Contact me today to discuss your needs and arrange a free consultation. I'm here to answer any questions you may have.".to_string(),
            service_areas: "West and North London, East and West Berkshire, South Buckinghamshire and surrounding areas. Flexible appointment times available - contact us to discuss your preferred schedule.".to_string(),
            registrations: "HCPC Registered | Professional Liability Insurance (PLI) | Enhanced DBS".to_string(),
        }
    }
}
