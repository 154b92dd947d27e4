//! Integration tests for YAML config loading.

use std::fs;

use lexguard::config::EngineConfig;
use lexguard::normalize::SymbolFilter;
use lexguard::{Decision, Engine, LexguardError};
use tempfile::TempDir;

const FULL_CONFIG: &str = r##"
lexicon:
  custom_words: [broccoli]
  allow_list: [damn]
normalize:
  symbol_filter: allow-list
masking:
  placeholder: "#"
identifier:
  separator: "_"
  max_separators: 1
  max_repeat: 3
  bounds:
    ko: { min: 3, max: 6 }
  latin_weights:
    charset: 2
    diacritic: 3
    unique_letter: 4
    digraph: 2
    digraph_max_len: 4
    collision_penalty: 1
"##;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yml");
    fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loads_every_section() {
    let tmp = TempDir::new().unwrap();
    let config = EngineConfig::load_from(&write_config(&tmp, FULL_CONFIG)).unwrap();

    assert_eq!(config.lexicon.custom_words, vec!["broccoli".to_string()]);
    assert_eq!(config.lexicon.allow_list, vec!["damn".to_string()]);
    assert_eq!(config.normalize.symbol_filter, SymbolFilter::AllowList);
    assert_eq!(config.masking.placeholder, '#');
    assert_eq!(config.identifier.max_separators, 1);
    assert_eq!(config.identifier.max_repeat, 3);
    assert_eq!(config.identifier.bounds["ko"].min, 3);
    assert_eq!(config.identifier.latin_weights.charset, 2);
}

#[test]
fn empty_file_is_default() {
    let tmp = TempDir::new().unwrap();
    let config = EngineConfig::load_from(&write_config(&tmp, "\n")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn malformed_yaml_reports_path() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "lexicon: [unclosed\n");
    match EngineConfig::load_from(&path) {
        Err(LexguardError::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn project_config_lives_under_dot_lexguard() {
    let tmp = TempDir::new().unwrap();
    let project = EngineConfig::project_path(tmp.path());
    assert!(project.ends_with(".lexguard/config.yml"));

    assert_eq!(
        EngineConfig::load_project(tmp.path()).unwrap(),
        EngineConfig::default()
    );

    fs::create_dir_all(project.parent().unwrap()).unwrap();
    fs::write(&project, "masking:\n  placeholder: \"#\"\n").unwrap();
    assert_eq!(EngineConfig::discover(tmp.path()).unwrap().masking.placeholder, '#');
}

// ---------------------------------------------------------------------------
// Engine built from a loaded config
// ---------------------------------------------------------------------------

#[test]
fn loaded_config_drives_the_engine() {
    let tmp = TempDir::new().unwrap();
    let config = EngineConfig::load_from(&write_config(&tmp, FULL_CONFIG)).unwrap();
    let engine = Engine::new(&config).unwrap();

    let result = engine.classify("no broccoli, damn it");
    assert_eq!(result.decision, Decision::Mask);
    assert_eq!(result.matched_terms, vec!["broccoli"]);
    assert_eq!(result.masked_text.as_deref(), Some("no ########, damn it"));

    assert!(engine.validate_identifier_format("민수야").is_valid());
    assert!(!engine.validate_identifier_format("민수").is_valid());
}

#[test]
fn bad_placeholder_fails_engine_build() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "masking:\n  placeholder: \"a\"\n");
    let config = EngineConfig::load_from(&path).unwrap();
    assert!(matches!(
        Engine::new(&config),
        Err(LexguardError::InvalidPlaceholder { placeholder: 'a' })
    ));
}
