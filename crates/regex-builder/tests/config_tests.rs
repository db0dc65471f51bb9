//! Integration tests for engine configuration.

use std::path::PathBuf;

use regex_builder::config::env::vars;
use regex_builder::{ConfigFormat, Engine, EngineConfig, EnvConfig, PatternError};

/// Write `content` to a uniquely named file in the system temp directory.
fn temp_config(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("regex-builder-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn engine_config_default() {
    let config = EngineConfig::default();
    assert_eq!(config.backtrack_limit, 1_000_000);
    assert_eq!(config.cache_size, 100);
    assert_eq!(config.delimiter, '/');
    assert!(config.validate().is_ok());
}

#[test]
fn engine_config_builder_pattern() {
    let config = EngineConfig::new()
        .backtrack_limit(10_000)
        .cache_size(4)
        .delimiter('#');
    assert_eq!(config.backtrack_limit, 10_000);
    assert_eq!(config.cache_size, 4);
    assert_eq!(config.delimiter, '#');
}

#[test]
fn load_toml_file() {
    let path = temp_config(
        "engine.toml",
        "backtrack_limit = 5000\ncache_size = 2\ndelimiter = \"~\"\n",
    );
    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(config, EngineConfig::new().backtrack_limit(5000).cache_size(2).delimiter('~'));
}

#[test]
fn load_json_file_with_partial_fields() {
    let path = temp_config("engine.json", r#"{ "delimiter": "!" }"#);
    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(config.delimiter, '!');
    assert_eq!(config.cache_size, 100);
}

#[test]
fn load_rejects_unknown_extension() {
    let path = temp_config("engine.ini", "cache_size = 2");
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, PatternError::Config { .. }));
}

#[test]
fn load_rejects_wrong_types() {
    let path = temp_config("bad.json", r#"{ "cache_size": "big" }"#);
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn serialize_round_trip_through_toml() {
    let config = EngineConfig::new().cache_size(7).delimiter('%');
    let text = toml::to_string(&config).unwrap();
    let parsed = EngineConfig::from_str_with_format(&text, ConfigFormat::Toml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn env_layer_applies_on_top_of_file() {
    let path = temp_config("layered.toml", "cache_size = 2\ndelimiter = \"~\"\n");
    let env = EnvConfig::new("REGEX_BUILDER_LAYER_TEST").with_override(vars::CACHE_SIZE, "9");
    let config = EngineConfig::from_file(&path).unwrap().with_env(&env);
    assert_eq!(config.cache_size, 9);
    assert_eq!(config.delimiter, '~');
}

#[test]
fn engine_uses_configured_delimiter_and_cache() {
    let engine = Engine::new(EngineConfig::new().delimiter('#').cache_size(1));
    assert_eq!(engine.delimit("a"), "#a#");

    engine.compile("a").unwrap();
    engine.compile("b").unwrap();
    assert_eq!(engine.cache().len(), 1);
    assert!(engine.cache().contains("b"));
}

#[test]
fn zero_cache_size_disables_caching() {
    let engine = Engine::new(EngineConfig::new().cache_size(0));
    engine.compile("a").unwrap();
    assert!(engine.cache().is_empty());
    assert_eq!(engine.cache().stats().total_misses, 1);
}
