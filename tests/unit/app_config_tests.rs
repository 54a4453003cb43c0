/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;

use crate::common;
use jsubnorm::app_config::{Config, LogLevel};
use jsubnorm::normalizer::RuleSpec;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.normalization.target_style, "Default");
    assert_eq!(config.normalization.annotation_style, "Rubi");
    assert_eq!(config.normalization.split_marker, "split");
    assert_eq!(config.normalization.merge_separator, "\u{3000}");
    assert!(config.normalization.extra_rules.is_empty());
    assert_eq!(config.output.suffix, "normalized");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.normalization.target_style = "  ".to_string();
    assert!(config.validate().is_err());
    config.normalization.target_style = "Default".to_string();

    config.normalization.annotation_style = "Default".to_string();
    assert!(config.validate().is_err());
    config.normalization.annotation_style = "Rubi".to_string();

    config.output.suffix = "out/put".to_string();
    assert!(config.validate().is_err());
    config.output.suffix = "normalized".to_string();

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_withBadExtraRule_shouldFail() {
    let mut config = Config::default();
    config.normalization.extra_rules.push(RuleSpec::new("(?<=", "x"));

    let err = config.validate().unwrap_err();
    assert!(format!("{:#}", err).contains("(?<="));
}

#[test]
fn test_config_fromJson_withPartialFields_shouldFillDefaults() -> Result<()> {
    let json = r#"{
        "normalization": {
            "target_style": "Main",
            "extra_rules": [ { "pattern": "ｗ+$" } ]
        },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.normalization.target_style, "Main");
    assert_eq!(config.normalization.annotation_style, "Rubi");
    assert_eq!(config.normalization.extra_rules, vec![RuleSpec::new("ｗ+$", "")]);
    assert_eq!(config.output.suffix, "normalized");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);

    Ok(())
}

#[test]
fn test_config_saveThenLoad_shouldKeepEveryField() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.normalization.split_marker = "dual".to_string();
    config.normalization.extra_rules.push(RuleSpec::new("(\\d+)円", "$1 yen"));
    config.output.suffix = "clean".to_string();
    config.log_level = LogLevel::Warn;

    config.save(&path)?;
    let loaded = Config::load(&path)?;

    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_config_load_withInvalidJson_shouldNameFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));

    Ok(())
}

#[test]
fn test_to_options_shouldCopyNormalizationSettings() {
    let mut config = Config::default();
    config.normalization.target_style = "Main".to_string();

    let options = config.normalization.to_options();

    assert_eq!(options.target_style, "Main");
    assert_eq!(options.annotation_style, "Rubi");
    assert_eq!(options.merge_separator, "\u{3000}");
}
