//! Bounded-call helper for store and bus operations.

use std::future::Future;
use std::time::Duration;

use sprout_domain::error::SproutError;

/// Budget for a single store or publish call. A stalled write must not
/// wedge the dispatch loop.
pub(crate) const OP_BUDGET: Duration = Duration::from_secs(5);

/// Await `fut`, mapping an overrun of `budget` to [`SproutError::Timeout`].
pub(crate) async fn bounded<T>(
    budget: Duration,
    fut: impl Future<Output = Result<T, SproutError>>,
) -> Result<T, SproutError> {
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => Err(SproutError::Timeout(budget)),
    }
}
