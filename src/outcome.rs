// Deferred outcome - an async operation that either resolves or rejects,
// plus reporting that routes each branch to the matching log level.

/// Message produced when the operation resolves
pub const SUCCESS_MESSAGE: &str = "Operation succeeded!";
/// Message carried by the rejection
pub const FAILURE_MESSAGE: &str = "Operation failed!";

/// Error types for the deferred operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// The operation's condition did not hold
    #[error("{0}")]
    Rejected(String),
}

/// Run the operation; resolves when `success` holds, rejects otherwise
///
/// Completes without real I/O, but yields once so it behaves like any
/// other awaited operation.
pub async fn settle(success: bool) -> Result<String, OutcomeError> {
    tokio::task::yield_now().await;
    if success {
        Ok(SUCCESS_MESSAGE.to_string())
    } else {
        Err(OutcomeError::Rejected(FAILURE_MESSAGE.to_string()))
    }
}

/// Log the outcome (info on success, error on failure) and return the logged line
pub fn report(result: &Result<String, OutcomeError>) -> String {
    match result {
        Ok(value) => {
            crate::info!("{}", value);
            value.clone()
        }
        Err(e) => {
            let line = e.to_string();
            crate::error!("{}", line);
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_settle_resolves_on_success() {
        let result = settle(true).await;
        assert_eq!(result, Ok("Operation succeeded!".to_string()));
        assert_eq!(report(&result), SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_settle_rejects_on_failure() {
        let result = settle(false).await;
        assert!(matches!(result, Err(OutcomeError::Rejected(_))));
        assert_eq!(report(&result), "Operation failed!");
    }
}
