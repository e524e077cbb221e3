use std::path::PathBuf;
use std::sync::Once;

/// Returns the path to an analyzer JSON fixture.
pub fn analyzer_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/analyzer")
        .join(name)
}

/// Returns the path to a configuration fixture.
pub fn config_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/configs")
        .join(name)
}

/// Reads an analyzer JSON fixture to a string.
#[allow(clippy::expect_used)]
pub fn read_analyzer_fixture(name: &str) -> String {
    std::fs::read_to_string(analyzer_fixture_path(name)).expect("Failed to read fixture")
}

/// Installs a test subscriber once so `RUST_LOG` shows library traces.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
