use crate::prelude::*;
use serde_json::{from_str, Value};
use std::path::Path;

/// One row handed over by the corpus loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechRecord {
    pub title: Option<String>,
    /// Canonical location persisted by an earlier run, if any.
    pub location: Option<String>,
}

impl SpeechRecord {
    pub fn new(title: &str) -> Self {
        SpeechRecord {
            title: Some(title.to_string()),
            location: None,
        }
    }
}

/// Reads JSON lines of the form `{"title": ..., "location": ...}`. Unparsable lines are skipped.
pub async fn read_records(path: &Path) -> Result<Vec<SpeechRecord>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(parse_records(&content))
}

pub fn parse_records(content: &str) -> Vec<SpeechRecord> {
    let mut records = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parsed: Value = match from_str(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Skipping line {}: {}", line_no + 1, e);
                continue;
            }
        };

        records.push(SpeechRecord {
            title: parsed["title"].as_str().map(|s| s.to_string()),
            location: parsed["location"].as_str().map(|s| s.to_string()),
        });
    }

    records
}
