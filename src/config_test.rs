use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let config = AppConfig::from_values(None, None);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api_base_url, "https://mock-api.arikmpt.com");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let config = AppConfig::from_values(Some("http://localhost:8080//"), None);
    assert_eq!(config.api_base_url, "http://localhost:8080");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let config = AppConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(AppConfig::from_values(None, Some("DEBUG")).log_level, log::Level::Debug);
    assert_eq!(AppConfig::from_values(None, Some(" warning ")).log_level, log::Level::Warn);
    assert_eq!(AppConfig::from_values(None, Some("trace")).log_level, log::Level::Trace);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, log::Level::Info);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = AppConfig::from_values(Some("http://api.test/"), None);
    assert_eq!(config.endpoint("/api/category"), "http://api.test/api/category");
    assert_eq!(config.endpoint("api/user/login"), "http://api.test/api/user/login");
}
