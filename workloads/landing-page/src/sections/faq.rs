//! FAQ accordion.

use physio_content::FaqList;
use physio_streaming::escape_html;

use crate::state::PageState;

/// Render the FAQ accordion with at most one entry expanded.
pub fn render_faq(faq: &FaqList, state: &PageState) -> String {
    let items: String = faq
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let open = state.is_faq_open(index);
            // Script-less fallback: the link toggles `?faq=`.
            let href = if open {
                "/#faq".to_string()
            } else {
                format!("/?faq={}#faq", index)
            };
            format!(
                r#"<div class="faq-item">
            <a class="faq-question" href="{href}" data-faq="{index}" aria-expanded="{open}">
                {question}
                <span class="faq-indicator">{indicator}</span>
            </a>
            <div class="faq-answer{active}">{answer}</div>
        </div>"#,
                question = escape_html(&entry.question),
                indicator = if open { "&minus;" } else { "+" },
                active = if open { " active" } else { "" },
                answer = escape_html(&entry.answer),
            )
        })
        .collect();

    format!(
        r#"<section id="faq" class="faq-section" data-section="faq">
    <div class="faq-container">
        <h2 class="section-title">Frequently Asked Questions</h2>
        {}
    </div>
</section>
"#,
        items
    )
}
