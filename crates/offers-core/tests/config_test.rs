use offers_core::config::*;
use offers_core::errors::ConfigError;
use offers_core::models::{Polarity, PolarityRule};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = OffersConfig::from_toml("").unwrap();

    // Comparator defaults
    assert_eq!(config.comparator.missing_placeholder, "-");
    assert_eq!(config.comparator.rating_label, "Avaliação Geral");
    assert!(config.comparator.include_rating_row);
    assert!(config.comparator.rules.is_empty());
    assert_eq!(
        config.comparator.effective_rules(),
        PolarityRule::default_table()
    );

    // Catalog defaults
    assert_eq!(config.catalog.path, "reviews.json");
    assert!(config.catalog.newest_first);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[comparator]
rating_label = "Nota"

[catalog]
path = "/data/reviews.json"
"#;
    let config = OffersConfig::from_toml(toml).unwrap();
    assert_eq!(config.comparator.rating_label, "Nota");
    assert_eq!(config.catalog.path, "/data/reviews.json");
    // Non-overridden fields keep defaults
    assert_eq!(config.comparator.missing_placeholder, "-");
    assert!(config.catalog.newest_first);
}

#[test]
fn custom_rule_table_replaces_default() {
    let toml = r#"
[[comparator.rules]]
name = "noise"
tokens = ["ruido", "db"]
polarity = "lower_is_better"
"#;
    let config = OffersConfig::from_toml(toml).unwrap();
    let rules = config.comparator.effective_rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name, "noise");
    assert_eq!(rules[0].polarity, Polarity::LowerIsBetter);
}

#[test]
fn blank_placeholder_is_rejected() {
    let err = OffersConfig::from_toml("[comparator]\nmissing_placeholder = \"  \"").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "comparator.missing_placeholder"));
}

#[test]
fn rule_without_tokens_is_rejected() {
    let toml = r#"
[[comparator.rules]]
name = "empty"
tokens = []
polarity = "higher_is_better"
"#;
    assert!(matches!(
        OffersConfig::from_toml(toml),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn empty_or_uppercase_tokens_are_rejected() {
    for tokens in [r#"["ok", ""]"#, r#"["MAH"]"#] {
        let toml = format!(
            "[[comparator.rules]]\nname = \"r\"\ntokens = {tokens}\npolarity = \"higher_is_better\"\n"
        );
        assert!(
            OffersConfig::from_toml(&toml).is_err(),
            "tokens {tokens} should be rejected"
        );
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = OffersConfig::from_toml("[comparator\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = OffersConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = OffersConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.comparator.rating_label,
        config.comparator.rating_label
    );
    assert_eq!(roundtripped.catalog.path, config.catalog.path);
}

#[test]
fn project_file_overrides_user_file() {
    let user_dir = tempfile::tempdir().unwrap();
    let project_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        user_dir.path().join("config.toml"),
        "[comparator]\nrating_label = \"Nota\"\ninclude_rating_row = false\n",
    )
    .unwrap();
    std::fs::write(
        project_dir.path().join("offers.toml"),
        "[comparator]\nrating_label = \"Score\"\n",
    )
    .unwrap();

    let config =
        OffersConfig::load_with_user_dir(project_dir.path(), Some(user_dir.path())).unwrap();
    // Project wins on the shared key, user value survives on the other.
    assert_eq!(config.comparator.rating_label, "Score");
    assert!(!config.comparator.include_rating_row);
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let project_dir = tempfile::tempdir().unwrap();
    let config = OffersConfig::load_with_user_dir(project_dir.path(), None).unwrap();
    assert_eq!(config.catalog.path, "reviews.json");
}

#[test]
fn invalid_project_file_reports_its_path() {
    let project_dir = tempfile::tempdir().unwrap();
    let path = project_dir.path().join("offers.toml");
    std::fs::write(&path, "comparator = [").unwrap();
    match OffersConfig::load_with_user_dir(project_dir.path(), None) {
        Err(ConfigError::ParseError { path: reported, .. }) => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unreadable_project_file_keeps_io_reason() {
    let project_dir = tempfile::tempdir().unwrap();
    // A directory where the file should be: exists() holds, reading fails.
    let path = project_dir.path().join("offers.toml");
    std::fs::create_dir(&path).unwrap();
    match OffersConfig::load_with_user_dir(project_dir.path(), None) {
        Err(ConfigError::ReadFailed {
            path: reported,
            reason,
        }) => {
            assert_eq!(reported, path.display().to_string());
            assert!(!reason.is_empty());
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn env_overrides_take_priority() {
    let mut config = OffersConfig::default();
    config.apply_env_overrides(|key| match key {
        "OFFERS_RATING_LABEL" => Some("Overall".to_string()),
        "OFFERS_INCLUDE_RATING_ROW" => Some("false".to_string()),
        "OFFERS_CATALOG_PATH" => Some("snap.json".to_string()),
        "OFFERS_LOG_LEVEL" => Some("debug".to_string()),
        _ => None,
    });
    assert_eq!(config.comparator.rating_label, "Overall");
    assert!(!config.comparator.include_rating_row);
    assert_eq!(config.catalog.path, "snap.json");
    assert_eq!(config.observability.log_level, "debug");
    // Untouched.
    assert_eq!(config.comparator.missing_placeholder, "-");
}

#[test]
fn unparseable_bool_env_override_is_ignored() {
    let mut config = OffersConfig::default();
    config.apply_env_overrides(|key| {
        (key == "OFFERS_INCLUDE_RATING_ROW").then(|| "maybe".to_string())
    });
    assert!(config.comparator.include_rating_row);
}
