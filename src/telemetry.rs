use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "items_api=debug,tower_http=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolves once the process is asked to stop.
pub async fn shutdown_signal() {
    let signal = wait_for_stop().await;
    info!(signal, "shutdown requested, draining connections");
}

#[cfg(unix)]
async fn wait_for_stop() -> &'static str {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(err) => {
            warn!(error = %err, "SIGTERM unavailable, stopping on Ctrl+C only");
            return interrupted().await;
        }
    };

    tokio::select! {
        signal = interrupted() => signal,
        _ = terminate.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
async fn wait_for_stop() -> &'static str {
    interrupted().await
}

// Never resolves if the handler cannot be installed.
async fn interrupted() -> &'static str {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "unable to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    "Ctrl+C"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
