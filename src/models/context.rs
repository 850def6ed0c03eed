//! Report context and pipeline outcome

use super::{Finding, LessonPair};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything needed to render one schedule-changes report.
///
/// A context is built by an external caller (or parsed from a context
/// document) per rendering request and discarded once the document has been
/// produced; the crate holds no state between requests. Pair order is
/// caller-determined and preserved in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReportContext {
    pub change_info: String,
    pub day_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lesson_pairs: Vec<LessonPair>,
}

impl ReportContext {
    pub fn new(change_info: impl Into<String>, day_date: NaiveDate) -> Self {
        Self {
            change_info: change_info.into(),
            day_date,
            lesson_pairs: Vec::new(),
        }
    }

    pub fn add_pair(&mut self, pair: LessonPair) {
        self.lesson_pairs.push(pair);
    }

    pub fn with_pair(mut self, pair: LessonPair) -> Self {
        self.lesson_pairs.push(pair);
        self
    }

    /// Number of lessons present across all pairs, counting both slots.
    pub fn lesson_count(&self) -> usize {
        self.lesson_pairs
            .iter()
            .map(|p| usize::from(p.previous.is_some()) + usize::from(p.new.is_some()))
            .sum()
    }
}

/// Result of the full report pipeline: the validated context, the analyzer
/// findings, and the rendered document.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub context: ReportContext,
    pub findings: Vec<Finding>,
    pub html: String,
}
