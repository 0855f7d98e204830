//! Conditions, treatment approach and process sections.

use physio_content::{ApproachCard, ConditionCategory, ProcessStep};
use physio_streaming::escape_html;

fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// Render the "Conditions We Treat" grid.
pub fn render_conditions(categories: &[ConditionCategory]) -> String {
    let columns: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<div class="condition-category">
            <h3>{} {}</h3>
            <ul>{}</ul>
        </div>"#,
                escape_html(&c.icon),
                escape_html(&c.heading),
                render_list(&c.conditions)
            )
        })
        .collect();

    format!(
        r#"<section class="conditions-section" data-section="conditions">
    <div class="section-intro">
        <h2 class="section-title">Conditions We Treat</h2>
        <p class="section-subtitle">Expert physiotherapy for a comprehensive range of medical conditions</p>
    </div>
    <div class="conditions-grid">
        {}
    </div>
</section>
"#,
        columns
    )
}

/// Render the treatment approach cards.
pub fn render_approach(cards: &[ApproachCard]) -> String {
    let cards: String = cards
        .iter()
        .map(|c| {
            format!(
                r#"<div class="approach-card">
            <h3>{}</h3>
            <p>{}</p>
            <ul>{}</ul>
        </div>"#,
                escape_html(&c.heading),
                escape_html(&c.intro),
                render_list(&c.points)
            )
        })
        .collect();

    format!(
        r#"<section id="approach" class="approach-section" data-section="approach">
    <h2 class="section-title">Our Treatment Approach</h2>
    <p class="section-subtitle">Evidence-based physiotherapy combining clinical expertise with compassionate, patient-centered care</p>
    <div class="approach-grid">
        {}
    </div>
</section>
"#,
        cards
    )
}

/// Render the numbered "How It Works" steps.
pub fn render_process(steps: &[ProcessStep]) -> String {
    let steps: String = steps
        .iter()
        .map(|s| {
            format!(
                r#"<div class="process-step">
                <div class="process-number">{}</div>
                <h4>{}</h4>
                <p>{}</p>
            </div>"#,
                s.number,
                escape_html(&s.heading),
                escape_html(&s.text)
            )
        })
        .collect();

    format!(
        r#"<section id="process" class="process-section" data-section="process">
    <div class="process-container">
        <h2 class="section-title">How It Works</h2>
        <p class="section-subtitle">A simple, straightforward process from initial contact to ongoing care</p>
        <div class="process-steps">
            {}
        </div>
    </div>
</section>
"#,
        steps
    )
}
