//! Core abstractions shared by the Home Physio workloads.
//!
//! This crate provides the fundamental types:
//! - `RequestContext` - Method, path and parsed query of an incoming request
//! - `RequestId` - Identifier used to correlate log lines
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking
//! - `ConfigSource` - Key/value configuration lookup (Spin variables, TOML, maps)
//! - `WorkloadError` - Errors raised while streaming a response

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
