use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Runs an atomic operation under a deadline.
///
/// When the deadline passes first, `operation` is dropped. Any `DatabaseTransaction` it owns
/// is dropped with it and rolls back, so nothing from the abandoned operation is durable.
/// The operation must stop short of `commit` and return the open transaction; the caller
/// commits once the deadline has been met. A commit dropped mid-flight may already be durable.
///
/// # Arguments
/// - `deadline` - Maximum time the operation may take
/// - `operation` - Future performing the transaction's writes
///
/// # Returns
/// - `Ok(T)` / `Err(AppError)` - The operation's own result when it finishes in time
/// - `Err(AppError::TransactionAborted)` - The deadline passed first
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(AppError::TransactionAborted(format!(
            "operation exceeded deadline of {:?}",
            deadline
        ))),
    }
}
