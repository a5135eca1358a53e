use std::future::Future;
use tracing::{info, warn};

/// Resolves on Ctrl-C or, on unix, SIGTERM.
///
/// A handler that fails to install never fires, so the server keeps running
/// instead of shutting down immediately.
pub async fn shutdown_signal() {
    let ctrl_c = wait_or_park("Ctrl-C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

async fn wait_or_park<F>(name: &str, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, signal = name, "failed to install signal handler");
        std::future::pending::<()>().await;
    }
}
