//! Observability for the storefront stores.
//!
//! This crate provides:
//! - `init_tracing` - Process-wide `tracing` subscriber setup
//! - `DevtoolsRecorder` - Action/state history for external inspection
//! - `DevtoolsPlayer` - Read-side queries over an exported `Recording`

mod devtools;
mod logging;

pub use devtools::*;
pub use logging::*;
