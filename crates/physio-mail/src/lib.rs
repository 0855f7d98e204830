//! Transactional email delivery.
//!
//! Layers, bottom up:
//! - `OutboundRequest` / `HttpResponse` - plain outbound HTTP values
//! - `HttpTransport` - sends a request; `SpinTransport` on wasm32
//! - `EmailMessage` - provider-neutral message
//! - `MailProvider` - sends a message; `ResendProvider` speaks the Resend API
//!
//! # Example
//!
//! ```rust,ignore
//! use physio_mail::{EmailMessage, MailConfig, MailProvider, ResendProvider, SpinTransport};
//!
//! let config = MailConfig::from_source(&source)?;
//! let provider = ResendProvider::new(SpinTransport, &config);
//!
//! let message = EmailMessage::new(&config.notification_from, "New request")
//!     .to(&config.operator_email)
//!     .html("<p>Hello</p>");
//! let receipt = provider.send(&message).await?;
//! ```

mod config;
mod error;
mod message;
mod provider;
mod request;
mod response;
mod transport;

pub use config::MailConfig;
pub use error::{FetchError, MailError};
pub use message::EmailMessage;
pub use provider::{MailProvider, ResendProvider, SendReceipt};
pub use request::OutboundRequest;
pub use response::HttpResponse;
pub use transport::HttpTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;
