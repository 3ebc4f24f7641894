use super::loader::parse;
use super::template::generate_config;
use super::*;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let config = Config::default();

    // Assert
    assert_eq!(config.modes.split, SplitPolicy::GreenBias);
    assert_eq!(config.fullscreen.hold_seconds, 10);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[modes]\nsplit = \"even\"\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.modes.split, SplitPolicy::Even);
    assert_eq!(config.fullscreen.hold_seconds, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn unknown_split_policy_is_rejected() {
    // Arrange
    let toml_str = "[modes]\nsplit = \"sideways\"\n";

    // Act / Assert
    assert!(parse(toml_str).is_err());
}

#[test]
fn validate_clamps_extreme_values() {
    // Arrange
    let toml_str = "[fullscreen]\nhold_seconds = 0\n[logging]\nmax_file_mb = 99999\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.fullscreen.hold_seconds, 1);
    assert_eq!(config.logging.max_file_mb, 1024);
}

#[test]
fn template_parses_to_defaults() {
    // Arrange
    let template = generate_config();

    // Act
    let config = parse(&template).unwrap();

    // Assert
    assert_eq!(config.modes.split, SplitPolicy::GreenBias);
    assert_eq!(config.fullscreen.hold_seconds, 10);
    assert_eq!(config.logging.max_file_mb, 10);
}

#[test]
fn config_path_ends_with_toml_file() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/dispmode/config.toml"));
    }
}
