//! Ctrl-C handling: the first interrupt cancels a pending connect sequence,
//! the second exits immediately.

use kvdemo_core::control::CancelToken;

/// Spawns a task that sets `cancel` on the first Ctrl-C.
pub fn spawn_interrupt_watcher(cancel: CancelToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::debug!("ctrl-c handler unavailable: {}", e);
            return;
        }
        tracing::info!("interrupt received, cancelling connect");
        eprintln!("interrupted; stopping after the current attempt (Ctrl-C again to quit)");
        cancel.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    })
}
