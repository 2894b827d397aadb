//! Integration tests for configuration resolution.
//!
//! Covers the layering order: defaults, then catalog.toml, then HOST/PORT
//! environment overrides. Environment access goes through the scoped helper
//! so parallel tests stay isolated.

mod support;

use product_catalog::config::{CatalogConfig, ConfigError};
use support::with_scoped_env;

#[test]
fn test_defaults_without_file_or_env() {
    let config = with_scoped_env(&[("HOST", None), ("PORT", None)], CatalogConfig::load).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn test_env_overrides_defaults() {
    let config = with_scoped_env(
        &[("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))],
        CatalogConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_partial_env_override_keeps_other_default() {
    let config = with_scoped_env(
        &[("HOST", None), ("PORT", Some("9090"))],
        CatalogConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
}

#[test]
fn test_unparseable_port_env_is_an_error() {
    let result = with_scoped_env(
        &[("HOST", None), ("PORT", Some("eight-thousand"))],
        CatalogConfig::load,
    );

    assert!(matches!(result, Err(ConfigError::Invalid { .. })));
}

#[test]
fn test_from_file_reads_toml() {
    let path = std::env::temp_dir().join(format!("catalog-config-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[server]
host = "10.0.0.5"
port = 8888
"#,
    )
    .unwrap();

    let config = CatalogConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.server.host, "10.0.0.5");
    assert_eq!(config.server.port, 8888);
}

#[test]
fn test_from_file_missing_path_is_read_error() {
    let result = CatalogConfig::from_file("/nonexistent/catalog.toml");
    assert!(matches!(result, Err(ConfigError::Read(_))));
}

#[test]
fn test_from_file_rejects_invalid_toml() {
    let path = std::env::temp_dir().join(format!("catalog-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "[server\nhost=").unwrap();

    let result = CatalogConfig::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_default_location_reports_not_found() {
    // No catalog.toml ships with the repo, so the search comes up empty
    let result = CatalogConfig::from_default_location();
    assert!(matches!(result, Err(ConfigError::NotFound)));
}
