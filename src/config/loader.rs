//! Question file loading and the ordered question model

use crate::config::question::QuestionDefinition;
use crate::config::raw::{RawDocument, RawEntry};
use crate::constants::{QUESTION_FILENAMES, SETTINGS_PREFIX};
use crate::error::{Error, Result, SchemaViolation};
use crate::ext::PathExt;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::Path;

/// Syntax of a question document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Picks the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Ok(DocumentFormat::Yaml),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(Error::UnsupportedFormat { path: path.display().to_string() }),
        }
    }
}

/// Ordered, validated questions of one template.
///
/// Iteration follows declaration order, which is the order questions are asked in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionSet {
    questions: IndexMap<String, QuestionDefinition>,
}

impl QuestionSet {
    /// Parses and validates a question document.
    ///
    /// Either every question loads or an error naming the first offending key
    /// is returned.
    pub fn load(document: &str, format: DocumentFormat) -> Result<Self> {
        let raw: RawDocument = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(document)?,
            DocumentFormat::Json => serde_json::from_str(document)?,
        };
        Self::from_raw(raw)
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        log::debug!("Loading questions from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::load(&content, format)
    }

    /// Loads the first known question file found in `template_root`.
    pub fn discover<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();
        let template_dir = template_root.to_str_checked()?.to_string();

        for file_name in QUESTION_FILENAMES {
            let candidate = template_root.join(file_name);
            if candidate.is_file() {
                return Self::load_file(candidate);
            }
        }

        Err(Error::QuestionFileNotFound {
            template_dir,
            question_files: QUESTION_FILENAMES.join(", "),
        })
    }

    /// Loads from a question file or a template directory.
    pub fn from_source<P: AsRef<Path>>(source: P) -> Result<Self> {
        let source = source.as_ref();
        if source.is_dir() {
            Self::discover(source)
        } else {
            Self::load_file(source)
        }
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let mut questions = IndexMap::with_capacity(raw.0.len());

        for (key, node) in raw.0 {
            if key.starts_with(SETTINGS_PREFIX) {
                log::debug!("Skipping template setting '{key}'");
                continue;
            }
            if questions.contains_key(&key) {
                return Err(Error::schema(key, SchemaViolation::DuplicateKey));
            }
            let entry = RawEntry::try_from(node).map_err(|v| Error::schema(&key, v))?;
            let question = QuestionDefinition::from_entry(key.clone(), entry)?;
            log::trace!("Loaded question '{key}': {question:?}");
            questions.insert(key, question);
        }

        log::debug!("Loaded {} questions", questions.len());
        Ok(Self { questions })
    }

    pub fn get(&self, key: &str) -> Option<&QuestionDefinition> {
        self.questions.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.questions.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.questions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionDefinition;
    type IntoIter = indexmap::map::Values<'a, String, QuestionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.values()
    }
}

impl Serialize for QuestionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.questions.len()))?;
        for (key, question) in &self.questions {
            map.serialize_entry(key, question)?;
        }
        map.end()
    }
}
