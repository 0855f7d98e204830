//! Observability for the Home Physio workloads.
//!
//! Diagnostics go to the component's stderr stream only; Spin forwards it to
//! the host log. Nothing is persisted.

mod logging;

pub use logging::*;

// Re-export RequestId from physio-core for convenience
pub use physio_core::RequestId;
