//! Shared helpers for unit tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the test logger once per test binary. Safe to call from
/// every test; later calls are no-ops.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
