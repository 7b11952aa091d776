// File: ./tests/config_tests.rs
use anniv::config::Config;
use anniv::context::{AppContext, TestContext};
use anniv::model::date::DateFormat;
use anniv::model::table::Delimiter;
use std::fs;

#[test]
fn test_missing_file_detected_and_defaulted() {
    let ctx = TestContext::new();

    let err = Config::load(&ctx).expect_err("no config file yet");
    assert!(Config::is_missing_config_error(&err));

    let config = Config::load_or_default(&ctx).unwrap();
    assert_eq!(config.delimiter, Delimiter::Comma);
    assert_eq!(config.date_format, DateFormat::Dmy);
    assert_eq!(config.max_age, 100);
    assert_eq!(config.output_filename, "birthdays.ics");
}

#[test]
fn test_save_and_load_roundtrip() {
    let ctx = TestContext::new();

    let config = Config {
        delimiter: Delimiter::Semicolon,
        date_format: DateFormat::Ymd,
        max_age: 42,
        output_filename: "family.ics".to_string(),
    };
    config.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.delimiter, Delimiter::Semicolon);
    assert_eq!(loaded.date_format, DateFormat::Ymd);
    assert_eq!(loaded.max_age, 42);
    assert_eq!(loaded.output_filename, "family.ics");
}

#[test]
fn test_partial_config_fills_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "max_age = 25\n").unwrap();

    let config = Config::load(&ctx).unwrap();
    assert_eq!(config.max_age, 25);
    assert_eq!(config.delimiter, Delimiter::Comma);
    assert_eq!(config.output_filename, "birthdays.ics");
}

#[test]
fn test_malformed_config_is_an_error() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "max_age = \"not a number\"\n").unwrap();

    let err = Config::load(&ctx).expect_err("bad TOML must not load");
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}
