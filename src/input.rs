use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::{LexiError, Result};
use crate::model::fallback::CollaboratorReport;

/// One JSONL sample: the extracted text plus whatever the collaborators produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchRecord {
    pub text: String,
    #[serde(default)]
    pub corrected: Option<String>,
    #[serde(default)]
    pub grammar: Option<String>,
    #[serde(default)]
    pub flagged: Option<u32>,
}

impl BatchRecord {
    pub fn collaborator_report(&self) -> CollaboratorReport {
        CollaboratorReport {
            corrected_text: self.corrected.clone(),
            grammar_corrected_text: self.grammar.clone(),
            flagged_token_count: self.flagged,
        }
    }
}

pub fn read_batch(path: &Path) -> Result<Vec<BatchRecord>> {
    let file = File::open(path)?;
    let records = parse_batch(BufReader::new(file))?;
    tracing::info!(path = %path.display(), samples = records.len(), "read batch input");
    Ok(records)
}

/// Parses one record per non-blank line.
pub fn parse_batch<R: BufRead>(mut reader: R) -> Result<Vec<BatchRecord>> {
    let mut records = Vec::new();
    let mut buf = String::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str::<BatchRecord>(line)
            .map_err(|e| LexiError::InvalidInput(format!("line {line_no}: {e}")))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "../tests/src_inline/input.rs"]
mod tests;
