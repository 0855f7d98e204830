//! Contact API - relays consultation requests from the landing page by email.
//!
//! `POST /api/contact` with `{name, phone, email?, message}`:
//! - validates the payload (no side effects on failure)
//! - emails the practice operator through the mail provider
//! - sends a best-effort acknowledgment when the submitter gave an email
//!
//! The outcome of the acknowledgment is reported in `x-acknowledgment`.

mod emails;
mod error;
mod handler;
mod response;
mod submission;

#[cfg(target_arch = "wasm32")]
mod component;

pub use emails::{acknowledgment, notification};
pub use error::ContactError;
pub use handler::{accept, process, Acknowledgment, ContactHandler};
pub use response::ApiResponse;
pub use submission::{Submission, MAX_BODY_BYTES};
