//! Services grid and service detail modal.

use physio_content::{ServiceCatalog, ServiceEntry};
use physio_streaming::escape_html;

use crate::state::PageState;

/// Render the services grid.
///
/// Each card links to `?service={key}` so the modal also opens without
/// JavaScript; the page script intercepts the click when it can.
pub fn render_services(catalog: &ServiceCatalog) -> String {
    let cards: String = catalog.iter().map(render_service_card).collect();

    format!(
        r#"<section id="services" class="section-wrapper" data-section="services">
    <h2 class="section-title">Specialist Services</h2>
    <p class="section-subtitle">Comprehensive physiotherapy care across a wide range of conditions, delivered with expertise and compassion in your home environment</p>
    <div class="services-grid">
        {}
    </div>
</section>
"#,
        cards
    )
}

fn render_service_card(entry: &ServiceEntry) -> String {
    let key = escape_html(&entry.key);
    format!(
        r#"<a class="service-card" href="/?service={key}#services" data-service="{key}">
            <div class="service-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{summary}</p>
            <p class="click-hint">View conditions &amp; treatments &rarr;</p>
        </a>"#,
        icon = escape_html(&entry.icon),
        title = escape_html(&entry.card_title),
        summary = escape_html(&entry.summary),
    )
}

/// Render the service modal.
///
/// The container is always emitted so the script can fill it; it is only
/// visible and populated when the state names a known service.
pub fn render_modal(catalog: &ServiceCatalog, state: &PageState) -> String {
    let Some(entry) = state.active_service(catalog) else {
        return r#"<div class="modal" id="service-modal" data-section="modal" hidden>
    <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="modal-title">
        <div class="modal-header">
            <h3 id="modal-title"></h3>
            <a class="close-btn" href="/#services" aria-label="Close">&times;</a>
        </div>
        <div class="modal-body"></div>
    </div>
</div>
"#
        .to_string();
    };

    let descriptor = &entry.descriptor;
    format!(
        r#"<div class="modal active" id="service-modal" data-section="modal">
    <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="modal-title">
        <div class="modal-header">
            <h3 id="modal-title">{title}</h3>
            <a class="close-btn" href="/#services" aria-label="Close">&times;</a>
        </div>
        <div class="modal-body">{body}</div>
    </div>
</div>
"#,
        title = escape_html(&descriptor.title),
        body = render_modal_body(entry),
    )
}

fn list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

fn render_modal_body(entry: &ServiceEntry) -> String {
    format!(
        r#"<p class="modal-description">{}</p>
            <h4>Conditions Treated:</h4>
            <ul>{}</ul>
            <h4>Treatment Approaches:</h4>
            <ul>{}</ul>"#,
        escape_html(&entry.descriptor.description),
        list(&entry.descriptor.conditions),
        list(&entry.descriptor.treatments)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static ServiceCatalog {
        ServiceCatalog::standard()
    }

    #[test]
    fn test_services_grid_has_every_card() {
        let html = render_services(catalog());
        assert_eq!(html.matches(r#"class="service-card""#).count(), catalog().len());
        assert!(html.contains(r#"data-service="postOp""#));
        assert!(html.contains(r#"href="/?service=neurological#services""#));
        assert!(html.contains("Musculoskeletal Therapy"));
    }

    #[test]
    fn test_closed_modal_is_hidden_and_empty() {
        let html = render_modal(catalog(), &PageState::default());
        assert!(html.contains(r#"id="service-modal""#));
        assert!(html.contains("hidden"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_open_modal_lists_conditions_and_treatments() {
        let mut state = PageState::default();
        state.open_modal(catalog(), "balance");
        let html = render_modal(catalog(), &state);

        assert!(html.contains(r#"class="modal active""#));
        assert!(html.contains("Balance &amp; Falls Prevention"));
        assert!(html.contains("<li>Epley maneuver for BPPV</li>"));
        assert!(html.contains("<li>Recurrent Falls - multi-factorial assessment</li>"));
        let conditions = html.find("Conditions Treated").unwrap();
        let treatments = html.find("Treatment Approaches").unwrap();
        assert!(conditions < treatments);
    }
}
