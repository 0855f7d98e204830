//! Section renderers for the landing page, in page order.

mod care;
mod contact;
mod faq;
mod footer;
mod hero;
mod nav;
mod services;

pub use care::*;
pub use contact::*;
pub use faq::*;
pub use footer::*;
pub use hero::*;
pub use nav::*;
pub use services::*;
