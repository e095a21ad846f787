use std::env;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use clusterdeck::config;

// Env-var mutation is process-global; serialize the tests that touch it.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.example.com/v1/"),
        "https://api.example.com/v1"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://api.example.com/v1///"),
        "https://api.example.com/v1"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.example.com/v1/  "),
        "https://api.example.com/v1"
    );
}

#[test]
fn test_sanitize_base_url_empty() {
    assert_eq!(config::sanitize_base_url(""), "");
}

#[test]
fn test_dev_versions_from_hostname_marker() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("EXPOSE_DEV_VERSIONS");
    env::remove_var("DEV_HOST_MARKER");

    assert!(config::resolve_expose_dev_versions("dev.console.example.com"));
    assert!(!config::resolve_expose_dev_versions("console.example.com"));
}

#[test]
fn test_dev_versions_custom_marker() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("EXPOSE_DEV_VERSIONS");
    env::set_var("DEV_HOST_MARKER", "staging");

    assert!(config::resolve_expose_dev_versions("staging-console"));
    assert!(!config::resolve_expose_dev_versions("dev.console"));

    env::remove_var("DEV_HOST_MARKER");
}

#[test]
fn test_dev_versions_env_flag_wins_over_hostname() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("EXPOSE_DEV_VERSIONS", "false");
    assert!(!config::resolve_expose_dev_versions("dev.console.example.com"));

    env::set_var("EXPOSE_DEV_VERSIONS", "true");
    assert!(config::resolve_expose_dev_versions("console.example.com"));

    env::remove_var("EXPOSE_DEV_VERSIONS");
}
