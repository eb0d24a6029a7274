//! Tokio runtime helpers for async-to-sync bridges.
//!
//! The CLI is synchronous; the debounce and outcome commands need a runtime.

/// Run an async future to completion from synchronous code.
///
/// Handles two scenarios:
/// 1. If a multi-threaded Tokio runtime is already running, uses `block_in_place`
///    to block on the future.
/// 2. If no runtime is available, creates a temporary one to run the future.
///
/// # Errors
/// Returns the I/O error if a temporary runtime cannot be built.
pub fn run_async<F, T>(future: F) -> std::io::Result<T>
where
    F: std::future::Future<Output = T>,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => Ok(tokio::task::block_in_place(|| handle.block_on(future))),
        Err(_) => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_time()
                .build()?;
            Ok(rt.block_on(future))
        }
    }
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
