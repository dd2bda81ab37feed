//! Dataset loading from categorized JSON files
//!
//! A dataset file is a JSON object mapping category names to arrays of
//! question records:
//!
//! ```json
//! { "abstract_algebra": [ {"question": "...", "answer": "D", "choices_list": ["..."]} ] }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use super::{ItemList, QuestionRecord};

/// Error type for dataset loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unexpected shape: {0}")]
    Shape(String),
}

/// Load a dataset from a JSON file
pub fn load_items_from_file(path: impl AsRef<Path>) -> Result<ItemList, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let items = load_items_from_str(&content)?;
    tracing::info!(
        "Loaded {} items in {} categories from {}",
        items.len(),
        items.categories().len(),
        path.display()
    );
    Ok(items)
}

/// Load a dataset from a JSON string.
///
/// Category order follows the document, not key order.
pub fn load_items_from_str(content: &str) -> Result<ItemList, LoadError> {
    let raw: IndexMap<String, Value> = serde_json::from_str(content)
        .map_err(|e| LoadError::Parse(format!("JSON parse error: {}", e)))?;

    let mut categorized = IndexMap::with_capacity(raw.len());
    for (category, value) in raw {
        let records = match value {
            Value::Array(arr) => arr
                .into_iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(fields) => Ok(QuestionRecord::new(fields)),
                    other => Err(LoadError::Shape(format!(
                        "{}[{}] is not an object: {}",
                        category, idx, other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => {
                return Err(LoadError::Shape(format!(
                    "category {} is not an array",
                    category
                )))
            }
        };
        categorized.insert(category, records);
    }

    Ok(ItemList::load(categorized))
}
