//! Shared utilities.
//!
//! - `runtime`: Tokio runtime helper for running async code from sync call sites

mod runtime;

pub use runtime::run_async;
