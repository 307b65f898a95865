// ============================================================================
// Async Delay
// ============================================================================

use std::time::Duration;

/// Resolve after `ms` milliseconds on the tokio timer.
///
/// Dropping the returned future cancels the wait.
pub async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
