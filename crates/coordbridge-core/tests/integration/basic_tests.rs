use std::path::{Path, PathBuf};

use coordbridge_core::config::BridgeConfig;
use coordbridge_core::{Converter, OutsideRootPolicy};

use crate::common::test_utils::config_fixture_path;

#[test]
#[allow(clippy::expect_used)]
fn test_config_loading_minimal() {
    let config_path = config_fixture_path("minimal.toml");
    assert!(config_path.exists(), "Config fixture should exist");

    let config = BridgeConfig::load_from(&config_path).expect("Failed to load config");
    assert_eq!(config.workspace.root, Some(PathBuf::from("/ws")));
    assert_eq!(config.workspace.outside_root, OutsideRootPolicy::Reject);
    assert_eq!(config.diagnostics.source, "polymer-ide");
}

#[test]
#[allow(clippy::expect_used)]
fn test_config_loading_custom_source() {
    let config = BridgeConfig::load_from(&config_fixture_path("custom_source.toml"))
        .expect("Failed to load config");

    assert_eq!(config.workspace.outside_root, OutsideRootPolicy::Allow);
    assert_eq!(config.diagnostics.source, "element-linter");
}

#[test]
#[allow(clippy::expect_used)]
fn test_converter_from_fixture_config() {
    let config = BridgeConfig::load_from(&config_fixture_path("custom_source.toml"))
        .expect("Failed to load config");
    let converter =
        Converter::from_config(&config, Path::new("/unused")).expect("Failed to build converter");

    assert_eq!(converter.root().path(), Path::new("/home/dev/elements"));
    assert_eq!(converter.source(), "element-linter");
    assert_eq!(converter.policy(), OutsideRootPolicy::Allow);
}

#[test]
fn test_converter_rejects_relative_fallback_root() {
    let result = Converter::from_config(&BridgeConfig::default(), Path::new("not/absolute"));
    assert!(matches!(
        result,
        Err(coordbridge_core::Error::InvalidWorkspaceRoot(_))
    ));
}

#[test]
fn test_converter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Converter>();
}
