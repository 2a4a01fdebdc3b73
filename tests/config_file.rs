//! Loading run configurations from disk.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Write;

use arbor::gp::CATALOG;
use arbor::{ConfigFileError, RunConfig};

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
            "functions": ["add", "subtract"],
            "evolution": {
                "population_size": 30,
                "max_generations": 12,
                "mutation_rate": 0.2,
                "generate": { "max_depth": 3 }
            },
            "game": { "size": 5, "max_rounds": 20 }
        }"#,
    );

    let config = RunConfig::load(file.path()).unwrap();

    assert_eq!(config.functions, vec!["add", "subtract"]);
    assert_eq!(config.evolution.population_size, 30);
    assert_eq!(config.evolution.max_generations, 12);
    assert_eq!(config.evolution.generate.max_depth, 3);
    assert_eq!(config.game.size, 5);
    assert_eq!(config.game.max_rounds, 20);

    let registry = config.registry().unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.get("multiply").is_none());
    assert!(config.evolution.validate().is_ok());
}

#[test]
fn test_empty_object_is_default() {
    let file = write_config("{}");
    let config = RunConfig::load(file.path()).unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.functions.len(), CATALOG.len());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RunConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigFileError::Io(_)));
}

#[test]
fn test_malformed_json() {
    let file = write_config("{ \"evolution\": ");
    assert!(matches!(RunConfig::load(file.path()), Err(ConfigFileError::Parse(_))));
}

#[test]
fn test_invalid_values_load_but_fail_validation() {
    let file = write_config(r#"{ "evolution": { "selection_skew": 1.5 } }"#);
    let config = RunConfig::load(file.path()).unwrap();
    assert!(config.evolution.validate().is_err());
}
