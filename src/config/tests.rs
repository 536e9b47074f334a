//! Tests for the config module

#[cfg(test)]
mod tests {
    use crate::config::{DefaultValue, DocumentFormat, QuestionSet, Value, ValueType};
    use crate::error::{Error, SchemaViolation};

    const ODOO_QUESTIONS: &str = include_str!("../../tests/fixtures/odoo/copier.yml");

    fn load_yaml(document: &str) -> crate::error::Result<QuestionSet> {
        QuestionSet::load(document, DocumentFormat::Yaml)
    }

    fn schema_violation(err: Error) -> (String, SchemaViolation) {
        match err {
            Error::SchemaError { key, violation } => (key, violation),
            other => panic!("expected a schema error, got: {other}"),
        }
    }

    #[test]
    fn loads_questions_in_declaration_order() {
        let set = load_yaml(ODOO_QUESTIONS).unwrap();
        let keys: Vec<&str> = set.keys().collect();
        assert_eq!(
            keys,
            vec![
                "project_name",
                "project_author",
                "odoo_version",
                "odoo_edition",
                "db_user",
                "db_password",
                "project_license",
                "use_docker",
                "postgres_version",
            ]
        );
    }

    #[test]
    fn float_question_with_choices_reports_default() {
        let set = load_yaml(
            r#"
odoo_version:
  type: float
  default: 18.0
  choices: [8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0]
"#,
        )
        .unwrap();
        let question = set.get("odoo_version").unwrap();
        assert_eq!(question.value_type(), ValueType::Float);
        assert_eq!(question.suggested_default(), Some(&Value::Float(18.0)));
        assert_eq!(question.choices().map(|c| c.len()), Some(11));
    }

    #[test]
    fn string_question_without_choices_is_unrestricted() {
        let set = load_yaml("project_name:\n  type: str\n  default: odoo-dev\n").unwrap();
        let question = set.get("project_name").unwrap();
        assert_eq!(question.value_type(), ValueType::String);
        assert_eq!(question.suggested_default(), Some(&Value::String("odoo-dev".into())));
        assert!(question.choices().is_none());
        assert!(question.validate_answer(&serde_json::json!("anything goes")).is_ok());
    }

    #[test]
    fn labeled_choices_accept_default_among_values() {
        let document = r#"
project_license:
  choices:
    "MIT license": MIT
    "Boost Software License 1.0": BSL-1.0
  default: BSL-1.0
"#;
        let set = load_yaml(document).unwrap();
        let question = set.get("project_license").unwrap();
        assert_eq!(question.suggested_default(), Some(&Value::String("BSL-1.0".into())));
        assert_eq!(
            question.choices().unwrap().labels(),
            vec!["MIT license", "Boost Software License 1.0"]
        );
    }

    #[test]
    fn labeled_choices_reject_default_outside_values() {
        let document = r#"
project_license:
  choices:
    "MIT license": MIT
    "GNU Affero General Public License v3": AGPL-3.0-or-later
  default: BSL-1.0
"#;
        let (key, violation) = schema_violation(load_yaml(document).unwrap_err());
        assert_eq!(key, "project_license");
        assert_eq!(violation, SchemaViolation::DefaultNotInChoices("BSL-1.0".into()));
    }

    #[test]
    fn duplicate_key_is_a_schema_error() {
        let document = "db_user:\n  default: odoo\ndb_host: db\ndb_user:\n  default: admin\n";
        let (key, violation) = schema_violation(load_yaml(document).unwrap_err());
        assert_eq!(key, "db_user");
        assert_eq!(violation, SchemaViolation::DuplicateKey);
    }

    #[test]
    fn duplicate_key_in_json_is_a_schema_error() {
        let document = r#"{"db_user": {"default": "odoo"}, "db_user": {"default": "admin"}}"#;
        let err = QuestionSet::load(document, DocumentFormat::Json).unwrap_err();
        let (key, violation) = schema_violation(err);
        assert_eq!(key, "db_user");
        assert_eq!(violation, SchemaViolation::DuplicateKey);
    }

    #[test]
    fn unsupported_type_names_the_token() {
        let (key, violation) =
            schema_violation(load_yaml("workers:\n  type: int\n  default: 2\n").unwrap_err());
        assert_eq!(key, "workers");
        assert_eq!(violation, SchemaViolation::UnsupportedType("int".into()));
    }

    #[test]
    fn default_violating_type_is_rejected() {
        let (key, violation) =
            schema_violation(load_yaml("use_docker:\n  type: bool\n  default: maybe\n").unwrap_err());
        assert_eq!(key, "use_docker");
        assert!(matches!(violation, SchemaViolation::DefaultTypeMismatch { .. }));
    }

    #[test]
    fn empty_choices_are_rejected() {
        let (key, violation) =
            schema_violation(load_yaml("edition:\n  choices: []\n").unwrap_err());
        assert_eq!(key, "edition");
        assert_eq!(violation, SchemaViolation::EmptyChoices);
    }

    #[test]
    fn wrongly_shaped_fields_in_yaml_name_the_question() {
        for (document, field) in [
            ("edition:\n  choices: 5\n", "choices"),
            ("edition:\n  type: 2\n", "type"),
            ("edition:\n  secret: \"yes\"\n", "secret"),
            ("edition:\n  help: [a, b]\n", "help"),
        ] {
            let (key, violation) = schema_violation(load_yaml(document).unwrap_err());
            assert_eq!(key, "edition");
            assert!(
                matches!(violation, SchemaViolation::InvalidField { field: ref f, .. } if f == field),
                "unexpected violation for {field}: {violation}"
            );
        }
    }

    #[test]
    fn wrongly_shaped_fields_in_json_name_the_question() {
        let err = QuestionSet::load(r#"{"workers": {"type": 2}}"#, DocumentFormat::Json)
            .unwrap_err();
        assert!(err.to_string().contains("'workers'"));
        let (key, violation) = schema_violation(err);
        assert_eq!(key, "workers");
        assert_eq!(
            violation,
            SchemaViolation::InvalidField {
                field: "type".into(),
                expected: "a string".into(),
                found: "a number (2)".into(),
            }
        );

        let err = QuestionSet::load(r#"{"edition": {"choices": "ce"}}"#, DocumentFormat::Json)
            .unwrap_err();
        assert!(matches!(err, Error::SchemaError { ref key, .. } if key == "edition"));
    }

    #[test]
    fn no_partial_success() {
        let document = "first: ok\nsecond:\n  type: float\n  default: nope\nthird: ok\n";
        assert!(load_yaml(document).is_err());
    }

    #[test]
    fn secret_default_is_kept_opaque() {
        let set = load_yaml(ODOO_QUESTIONS).unwrap();
        let question = set.get("db_password").unwrap();
        assert!(question.is_secret());
        assert!(matches!(question.default(), Some(DefaultValue::Placeholder(hash)) if hash.starts_with("$pbkdf2")));
        assert!(question.suggested_default().is_none());
    }

    #[test]
    fn multiline_help_is_preserved() {
        let set = load_yaml(ODOO_QUESTIONS).unwrap();
        let help = set.get("project_author").unwrap().help();
        assert_eq!(help, "Author of the project.\nShown in module manifests and in the README.\n");
    }

    #[test]
    fn yaml_round_trip_preserves_content_and_order() {
        let set = load_yaml(ODOO_QUESTIONS).unwrap();
        let reloaded = load_yaml(&set.to_yaml_string().unwrap()).unwrap();

        assert_eq!(set.keys().collect::<Vec<_>>(), reloaded.keys().collect::<Vec<_>>());
        for (before, after) in set.iter().zip(reloaded.iter()) {
            assert_eq!(before, after);
        }
    }

    #[test]
    fn json_round_trip_preserves_content_and_order() {
        let set = load_yaml(ODOO_QUESTIONS).unwrap();
        let json = set.to_json_string().unwrap();
        let reloaded = QuestionSet::load(&json, DocumentFormat::Json).unwrap();

        assert_eq!(set.keys().collect::<Vec<_>>(), reloaded.keys().collect::<Vec<_>>());
        for (before, after) in set.iter().zip(reloaded.iter()) {
            assert_eq!(before, after);
        }
    }

    #[test]
    fn every_default_with_choices_is_a_choice() {
        let set = load_yaml(ODOO_QUESTIONS).unwrap();
        for question in &set {
            if let (Some(choices), Some(default)) = (question.choices(), question.suggested_default())
            {
                assert!(choices.contains(default), "{} default not in choices", question.key());
            }
        }
    }
}
