//! Configuration resolution tests.
//!
//! These exercise the environment override layer, which cannot be tested
//! from the inline unit tests without racing other tests on the
//! process-global environment. `support::with_scoped_env` serializes and
//! restores the variables it touches.

mod support;

use cca_rust::config::ServerConfig;

#[test]
fn test_env_overrides_apply_on_top_of_defaults() {
    support::with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9999")),
            ("CCA_DATASET", Some("fixtures/override.csv")),
        ],
        || {
            let config = ServerConfig::default().apply_env_overrides();
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 9999);
            assert_eq!(config.dataset.path, "fixtures/override.csv");
            assert_eq!(config.bind_addr(), "127.0.0.1:9999");
        },
    );
}

#[test]
fn test_absent_env_leaves_defaults_alone() {
    support::with_scoped_env(
        &[("HOST", None), ("PORT", None), ("CCA_DATASET", None)],
        || {
            let config = ServerConfig::default().apply_env_overrides();
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.dataset.path, "data/channel_metrics.csv");
        },
    );
}

#[test]
fn test_unparseable_port_is_ignored() {
    support::with_scoped_env(&[("HOST", None), ("PORT", Some("not-a-port"))], || {
        let config = ServerConfig::default().apply_env_overrides();
        assert_eq!(config.server.port, 8080);
    });
}

#[test]
fn test_env_overrides_win_over_file_settings() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[server]\nhost = \"10.0.0.1\"\nport = 3000\n").unwrap();

    support::with_scoped_env(
        &[("HOST", None), ("PORT", Some("4000")), ("CCA_DATASET", None)],
        || {
            let config = ServerConfig::from_file(file.path())
                .unwrap()
                .apply_env_overrides();
            // PORT wins over the file; HOST keeps the file value
            assert_eq!(config.server.host, "10.0.0.1");
            assert_eq!(config.server.port, 4000);
            assert_eq!(config.bind_addr(), "10.0.0.1:4000");
        },
    );
}
