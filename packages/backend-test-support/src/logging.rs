//! Unified test logging initialization
//!
//! Shared by every integration test binary of the backend. Each binary wires
//! it up through a `ctor` in `tests/common`, so individual tests never call it.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default filter when neither `TEST_LOG` nor `RUST_LOG` is set.
/// SQL statement logging is noisy at `info`, keep it at `warn`.
const DEFAULT_FILTER: &str = "warn,sqlx=warn,sea_orm=warn";

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter is read in this order:
///
/// 1. `TEST_LOG`
/// 2. `RUST_LOG`
/// 3. [`DEFAULT_FILTER`]
///
/// The subscriber writes through `with_test_writer()` so output is captured
/// per test, and omits timestamps for stable output.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok(); // something else may already own the global subscriber
    });
}
