//! Rows as they come from the sheet, and their typed form.

use serde::{Deserialize, Deserializer};

use crate::constants::EVENT_PREFIX;

/// One `{key, value}` object of the sheet's JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SheetRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

impl SheetRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        SheetRow {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Spreadsheet cells sometimes arrive as numbers or booleans; keep their text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A row classified by its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    EndSchoolDate(String),
    EndWorkDate(String),
    Message(String),
    Event { title: String, date: String },
    Other { key: String, value: String },
}

impl Entry {
    /// Classify a row. Keys are trimmed; rows with an empty key are dropped.
    pub fn classify(row: &SheetRow) -> Option<Entry> {
        let key = row.key.trim();
        let value = row.value.clone();

        let entry = match key {
            "" => return None,
            "end_school_date" => Entry::EndSchoolDate(value),
            "end_work_date" => Entry::EndWorkDate(value),
            "message" => Entry::Message(value),
            _ => match key.strip_prefix(EVENT_PREFIX) {
                Some(title) => Entry::Event {
                    title: title.to_string(),
                    date: value,
                },
                None => Entry::Other {
                    key: key.to_string(),
                    value,
                },
            },
        };

        Some(entry)
    }
}
