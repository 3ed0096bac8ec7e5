use std::future::Future;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing::warn;

/// Bounded retry with a fixed delay between attempts. Returns the first
/// success, or the last error once the attempt budget is spent.
pub async fn retry_with_delay<T, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(attempt, attempts, error = ?err, "retry: attempt failed");
                last_error = Some(err);
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow!("retry: no attempts were made")))
}
