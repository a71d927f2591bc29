pub mod builders;
pub mod fake_source;

use std::sync::Once;

use stepgraph::logging::LOG_ENV_VAR;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a test-captured tracing subscriber once per test binary.
///
/// The filter is read from `STEPGRAPH_LOG` (same variable as the binary),
/// defaulting to `info`. Output only shows for failing tests unless the
/// harness runs with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
