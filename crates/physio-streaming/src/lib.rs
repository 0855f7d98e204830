//! Streaming primitives for shell-first SSR.
//!
//! - `StreamingSink` - Enforces shell-before-sections ordering
//! - `Shell` / `HeadContent` - Document frame around the streamed sections
//! - `escape_html` - Text and attribute escaping for rendered content

mod html;
mod shell;
mod sink;

pub use html::*;
pub use shell::*;
pub use sink::*;
