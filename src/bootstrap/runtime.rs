use anyhow::Context;
use tokio::runtime::Runtime;

/// Single-threaded runtime; every widget lives on one event loop.
pub fn create_runtime() -> anyhow::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}
