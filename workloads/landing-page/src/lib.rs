//! Landing page - shell-first streaming SSR for the practice's single page.
//!
//! This workload:
//! - streams the shell, then each section in page order
//! - caches the plain page publicly; query-seeded UI state is `no-store`
//! - embeds the service catalog for the client-side modal
//! - renders menu, modal, FAQ and form state server-side for script-less clients

mod page;
mod response;
mod scripts;
mod sections;
mod state;
mod styles;

#[cfg(target_arch = "wasm32")]
mod component;

pub use page::{
    cache_control, create_shell, render_sections, stream_page, CLOSING_SECTION, PRIVATE_CACHE,
    PUBLIC_CACHE,
};
pub use response::{BodyMode, ResponsePlan, ALLOWED_METHODS, HTML_CONTENT_TYPE};
pub use scripts::page_scripts;
pub use state::{
    FormFields, FormState, PageState, SubmitStatus, FALLBACK_ERROR, SENDING_LABEL, SUBMIT_LABEL,
    SUCCESS_NOTICE_MS, SUCCESS_TEXT,
};
