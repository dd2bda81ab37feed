//! Question records and the flattened item store

pub mod family;
pub mod loader;

pub use family::BenchmarkFamily;
pub use loader::{load_items_from_file, load_items_from_str, LoadError};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GradeError, RecordError};

/// A single benchmark item, kept as the raw JSON object it was loaded from.
///
/// Each family reads different fields, so nothing beyond "is an object" is
/// checked at load time. Accessors report missing or mistyped fields as
/// [`RecordError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord(Map<String, Value>);

impl QuestionRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    fn require(&self, field: &str) -> Result<&Value, RecordError> {
        self.0
            .get(field)
            .ok_or_else(|| RecordError::MissingField(field.to_string()))
    }

    /// Outbound question text
    pub fn question(&self) -> Result<&str, RecordError> {
        self.require("question")?
            .as_str()
            .ok_or_else(|| RecordError::invalid("question", "a string"))
    }

    /// Canonical answer exactly as stored
    pub fn answer(&self) -> Result<&Value, RecordError> {
        self.require("answer")
    }

    /// Canonical answer coerced to text
    pub fn answer_text(&self) -> Result<String, RecordError> {
        scalar_text(self.answer()?, "answer")
    }

    /// Top-level option texts
    pub fn choices_list(&self) -> Result<&[Value], RecordError> {
        self.require("choices_list")?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| RecordError::invalid("choices_list", "an array"))
    }

    /// Metadata block, stored as `meta_data` by most exports
    pub fn metadata(&self) -> Option<&Value> {
        self.0.get("meta_data").or_else(|| self.0.get("metadata"))
    }

    /// Option texts of the nested structured-choice block.
    ///
    /// `Ok(None)` means the record is not multiple-choice.
    pub fn structured_choices(&self) -> Result<Option<&[Value]>, RecordError> {
        let structured = match self.metadata().and_then(|m| m.get("structured")) {
            Some(s) => s,
            None => return Ok(None),
        };

        let choices = structured
            .get("choices")
            .ok_or_else(|| RecordError::MissingField("structured.choices".to_string()))?;

        choices
            .as_array()
            .map(|arr| Some(arr.as_slice()))
            .ok_or_else(|| RecordError::invalid("structured.choices", "an array"))
    }
}

impl From<Map<String, Value>> for QuestionRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Render a scalar JSON value as text.
///
/// Booleans use the capitalized spelling found in the source datasets.
pub fn scalar_text(value: &Value, field: &str) -> Result<String, RecordError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        _ => Err(RecordError::invalid(field, "a string, number or boolean")),
    }
}

/// Ordered, read-only list of every item in a dataset.
///
/// Categories are concatenated in the order the input mapping yields them,
/// and items keep their order within each category.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<QuestionRecord>,
    categories: Vec<(String, usize)>,
}

impl ItemList {
    /// Flatten a category → records mapping
    pub fn load(categorized: IndexMap<String, Vec<QuestionRecord>>) -> Self {
        categorized.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.items.iter()
    }

    /// Category names with their item counts, in load order
    pub fn categories(&self) -> &[(String, usize)] {
        &self.categories
    }

    pub fn record(&self, index: usize) -> Result<&QuestionRecord, GradeError> {
        self.items.get(index).ok_or(GradeError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Run a record accessor, tagging any failure with the item index
    pub fn with_record<'a, T>(
        &'a self,
        index: usize,
        f: impl FnOnce(&'a QuestionRecord) -> Result<T, RecordError>,
    ) -> Result<T, GradeError> {
        let record = self.record(index)?;
        f(record).map_err(|e| GradeError::record(index, e))
    }
}

impl FromIterator<(String, Vec<QuestionRecord>)> for ItemList {
    fn from_iter<I: IntoIterator<Item = (String, Vec<QuestionRecord>)>>(iter: I) -> Self {
        let mut list = ItemList::default();
        for (category, records) in iter {
            list.categories.push((category, records.len()));
            list.items.extend(records);
        }
        list
    }
}
