//! Page assembly: shell, ordered sections and cache policy.

use std::fmt::Display;

use futures::Sink;
use physio_content::PageContent;
use physio_core::WorkloadError;
use physio_streaming::{HeadContent, Shell, StreamingSink};

use crate::scripts::page_scripts;
use crate::sections::{
    render_approach, render_conditions, render_contact, render_faq, render_footer, render_hero,
    render_modal, render_nav, render_process, render_services, render_trust,
};
use crate::state::PageState;
use crate::styles::PAGE_STYLES;

/// Cache policy for the plain page. The content is static.
pub const PUBLIC_CACHE: &str = "public, max-age=3600, stale-while-revalidate=300";
/// Cache policy when the query string seeds UI state.
pub const PRIVATE_CACHE: &str = "no-store";

/// Name of the final chunk carrying scripts and the closing tags.
pub const CLOSING_SECTION: &str = "closing";

/// `cache-control` for a rendered state.
pub fn cache_control(state: &PageState) -> &'static str {
    if state.is_initial() {
        PUBLIC_CACHE
    } else {
        PRIVATE_CACHE
    }
}

/// Document frame: head with metadata and inline styles.
pub fn create_shell() -> Shell {
    let head = HeadContent::new("Home Physiotherapy Services UK")
        .with_meta(
            "description",
            "HCPC registered physiotherapist providing specialist home physiotherapy across the UK. \
             Neurological rehabilitation, post-operative care, falls prevention and more.",
        )
        .with_meta("viewport", "width=device-width, initial-scale=1.0")
        .with_style(PAGE_STYLES);

    Shell::new(head).with_lang("en-GB")
}

/// Every section in page order, ending with the closing chunk.
pub fn render_sections(
    content: &PageContent,
    state: &PageState,
    shell: &Shell,
    year: i32,
) -> Vec<(&'static str, String)> {
    let practice = &content.practice;
    vec![
        ("nav", render_nav(practice, state)),
        ("hero", render_hero(practice)),
        ("trust", render_trust(practice)),
        ("services", render_services(content.services)),
        ("conditions", render_conditions(&content.conditions)),
        ("approach", render_approach(&content.approach)),
        ("process", render_process(&content.process)),
        ("faq", render_faq(&content.faq, state)),
        ("contact", render_contact(practice, &state.form)),
        ("footer", render_footer(practice, year)),
        ("modal", render_modal(content.services, state)),
        (
            CLOSING_SECTION,
            format!("{}{}", page_scripts(content.services), shell.render_closing()),
        ),
    ]
}

/// Write the shell, then each section, then close the sink.
pub async fn stream_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    content: &PageContent,
    state: &PageState,
    year: i32,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = create_shell();
    sink.send_shell(&shell.render_opening()).await?;

    for (name, html) in render_sections(content, state, &shell, year) {
        sink.send_section(name, &html).await?;
    }

    sink.complete().await
}
