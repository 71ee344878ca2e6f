//! Ctrl-C handling
//!
//! A run is cancelled by dropping its future, so everything it holds
//! (spinners, temp files from a snapshot export) is released by its
//! destructor instead of being left behind by a killed process.

use std::future::Future;

/// Drive `work` to completion unless `shutdown` resolves first
///
/// Returns `None` when interrupted; `work` has been dropped by then.
pub async fn run_until<F, S>(work: F, shutdown: S) -> Option<F::Output>
where
    F: Future,
    S: Future<Output = ()>,
{
    tokio::select! {
        biased;
        output = work => Some(output),
        () = shutdown => None,
    }
}

/// Resolves on Ctrl-C
///
/// Never resolves if the signal handler cannot be installed, leaving the
/// default process behaviour in place.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
