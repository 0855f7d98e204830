//! Presentational UI state.
//!
//! The browser script drives the same transitions client-side; on the server
//! the state is seeded from the query string so the page renders correctly
//! without JavaScript.

use physio_content::{PageContent, ServiceCatalog, ServiceEntry};
use physio_core::RequestContext;

/// Shown after a successful submission.
pub const SUCCESS_TEXT: &str = "Thank you! We'll get back to you within 24 hours.";
/// Shown when a submission fails without a server-supplied message.
pub const FALLBACK_ERROR: &str = "An error occurred. Please try again or call us directly.";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
/// How long the success notice stays visible.
pub const SUCCESS_NOTICE_MS: u32 = 5_000;

/// Contact form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// Update a field by its input `name`. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// The contact form: field values plus submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub status: SubmitStatus,
}

impl FormState {
    /// Start a submission. Returns `false` if one is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SubmitStatus::Submitting {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// The endpoint accepted the request; fields are cleared.
    pub fn succeed(&mut self) {
        self.fields = FormFields::default();
        self.status = SubmitStatus::Succeeded;
    }

    /// The request failed. Field values are kept so the user can retry.
    pub fn fail(&mut self, server_message: Option<&str>) {
        let message = server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR);
        self.status = SubmitStatus::Failed(message.to_string());
    }

    /// Hide the success notice once its timer fires.
    pub fn dismiss_success(&mut self) {
        if self.status == SubmitStatus::Succeeded {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Everything the page shows that is not static content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub menu_open: bool,
    /// Key of the service shown in the modal; `None` when closed.
    pub active_service: Option<String>,
    pub open_faq: Option<usize>,
    pub form: FormState,
}

impl PageState {
    /// Seed state from `?menu=open&service={key}&faq={index}`.
    ///
    /// Unknown service keys and out-of-range FAQ indexes are ignored.
    pub fn from_query(ctx: &RequestContext, content: &PageContent) -> Self {
        let mut state = Self::default();

        if ctx.query_param("menu") == Some("open") {
            state.menu_open = true;
        }
        if let Some(key) = ctx.query_param("service") {
            state.open_modal(content.services, key);
        }
        if let Some(index) = ctx.query_param("faq").and_then(|v| v.parse::<usize>().ok()) {
            if index < content.faq.len() {
                state.open_faq = Some(index);
            }
        }

        state
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following an in-page link closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Open the modal for a service. Unknown keys leave the modal closed.
    pub fn open_modal(&mut self, catalog: &ServiceCatalog, key: &str) -> bool {
        if catalog.contains(key) {
            self.active_service = Some(key.to_string());
            true
        } else {
            false
        }
    }

    pub fn close_modal(&mut self) {
        self.active_service = None;
    }

    pub fn modal_open(&self) -> bool {
        self.active_service.is_some()
    }

    pub fn active_service<'c>(&self, catalog: &'c ServiceCatalog) -> Option<&'c ServiceEntry> {
        self.active_service.as_deref().and_then(|key| catalog.get(key))
    }

    /// Expand an entry, or collapse it if it is already expanded.
    /// At most one entry is expanded at a time.
    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_faq_open(&self, index: usize) -> bool {
        self.open_faq == Some(index)
    }

    /// Whether anything differs from the initial page.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}
