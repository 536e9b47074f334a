use scaffold_questions::config::{DefaultValue, DocumentFormat, QuestionSet, Value, ValueType};
use scaffold_questions::error::{Error, SchemaViolation};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use test_log::test;

const FIXTURE_DIR: &str = "tests/fixtures/odoo";

#[test]
fn test_discover_in_template_directory() {
    let set = QuestionSet::from_source(FIXTURE_DIR).unwrap();
    assert_eq!(set.len(), 9);
    assert!(!set.contains_key("_subdirectory"));
    assert_eq!(set.keys().next(), Some("project_name"));
}

#[test]
fn test_load_file_directly() {
    let path = PathBuf::from(FIXTURE_DIR).join("copier.yml");
    let set = QuestionSet::from_source(&path).unwrap();
    assert_eq!(set, QuestionSet::discover(FIXTURE_DIR).unwrap());
}

#[test]
fn test_shorthand_number_becomes_float_question() {
    let set = QuestionSet::discover(FIXTURE_DIR).unwrap();
    let question = set.get("postgres_version").unwrap();
    assert_eq!(question.value_type(), ValueType::Float);
    assert_eq!(question.suggested_default(), Some(&Value::Float(16.0)));
}

#[test]
fn test_pair_choices_resolve_to_values() {
    let set = QuestionSet::discover(FIXTURE_DIR).unwrap();
    let choices = set.get("odoo_edition").unwrap().choices().unwrap();
    assert!(choices.is_labeled());
    assert_eq!(choices.labels(), vec!["Community", "Enterprise"]);
    assert!(choices.contains(&Value::String("ee".into())));
    assert!(!choices.contains(&Value::String("Enterprise".into())));
}

#[test]
fn test_secret_placeholder_is_masked_for_display() {
    let set = QuestionSet::discover(FIXTURE_DIR).unwrap();
    let question = set.get("db_password").unwrap();
    assert!(matches!(question.default(), Some(DefaultValue::Placeholder(_))));
    assert_eq!(question.display_default().as_deref(), Some("********"));
}

#[test]
fn test_discover_json_question_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("questions.json"),
        r#"{"workers": {"type": "float", "default": 2}, "debug": {"type": "bool", "default": false}}"#,
    )
    .unwrap();

    let set = QuestionSet::discover(temp_dir.path()).unwrap();
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["workers", "debug"]);
    assert_eq!(set.get("workers").unwrap().suggested_default(), Some(&Value::Float(2.0)));
}

#[test]
fn test_discover_without_question_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = QuestionSet::discover(temp_dir.path());
    assert!(matches!(result, Err(Error::QuestionFileNotFound { .. })));
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("questions.toml");
    fs::write(&path, "name = 'x'").unwrap();
    assert!(matches!(QuestionSet::load_file(&path), Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = QuestionSet::load_file("/path/that/does/not/exist/copier.yml");
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_syntax_errors_are_parse_errors() {
    let yaml = QuestionSet::load("project_name: [unclosed\n", DocumentFormat::Yaml);
    assert!(matches!(yaml, Err(Error::YAMLParseError(_))));

    let json = QuestionSet::load(r#"{"project_name": "#, DocumentFormat::Json);
    assert!(matches!(json, Err(Error::JSONParseError(_))));
}

#[test]
fn test_duplicate_key_in_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("copier.yml");
    fs::write(&path, "db_user: odoo\ndb_name: odoo\ndb_user: admin\n").unwrap();

    match QuestionSet::load_file(&path) {
        Err(Error::SchemaError { key, violation }) => {
            assert_eq!(key, "db_user");
            assert_eq!(violation, SchemaViolation::DuplicateKey);
        }
        other => panic!("expected duplicate key error, got {other:?}"),
    }
}

#[test]
fn test_dumped_yaml_file_reloads() {
    let set = QuestionSet::discover(FIXTURE_DIR).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("questions.yaml");
    fs::write(&path, set.to_yaml_string().unwrap()).unwrap();

    assert_eq!(QuestionSet::load_file(&path).unwrap(), set);
}

#[test]
fn test_wrongly_shaped_json_field_is_schema_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("questions.json");
    fs::write(&path, r#"{"workers": {"type": 2}}"#).unwrap();

    match QuestionSet::load_file(&path) {
        Err(Error::SchemaError { key, violation }) => {
            assert_eq!(key, "workers");
            assert!(matches!(violation, SchemaViolation::InvalidField { .. }));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}
