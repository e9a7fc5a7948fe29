use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `warn` level subscriber once per test binary, routed through the
/// test writer so output is captured per test.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}
