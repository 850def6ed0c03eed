//! Context document parsing and validation

use crate::error::ReportError;
use crate::models::{LessonPair, ReportContext};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Wire date layout used by context documents.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw document shape before validation. Required fields stay optional here
/// so their absence maps to `ReportError::MissingField` instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawContext {
    change_info: Option<String>,
    day_date: Option<String>,

    #[serde(default)]
    lesson_pairs: Vec<LessonPair>,
}

/// Parse a context document from a string.
///
/// Documents are parsed with json5, so comments and trailing commas from
/// hand-edited files are tolerated.
pub fn parse_context(content: &str) -> Result<ReportContext> {
    let raw: RawContext =
        json5::from_str(content).context("Failed to parse context document")?;

    let context = validate(raw)?;
    log::debug!(
        "parsed context: {:?}, {} pair(s)",
        context.day_date,
        context.lesson_pairs.len()
    );
    Ok(context)
}

/// Parse a context document from a file path.
pub fn load_context(path: impl AsRef<Path>) -> Result<ReportContext> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read context file {}", path.as_ref().display()))?;
    parse_context(&content)
}

fn validate(raw: RawContext) -> Result<ReportContext, ReportError> {
    let change_info = match raw.change_info {
        Some(info) if !info.trim().is_empty() => info,
        _ => return Err(ReportError::missing("change-info")),
    };

    let day_date = match raw.day_date {
        Some(value) => NaiveDate::parse_from_str(&value, DATE_FORMAT)
            .map_err(|_| ReportError::malformed_date(value))?,
        None => return Err(ReportError::missing("day-date")),
    };

    Ok(ReportContext {
        change_info,
        day_date,
        lesson_pairs: raw.lesson_pairs,
    })
}
