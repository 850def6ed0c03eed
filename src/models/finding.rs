//! Payload findings surfaced by the analyzer

use serde::Serialize;

/// A problem (or notable property) of a context payload.
///
/// Findings never fail a render on their own; strict callers may choose to
/// reject payloads with `Major` findings.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Info,
    Minor,
    Major,
}

/// Where in the payload a finding points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Location {
    /// A top-level context field, named by its wire name.
    Field(&'static str),
    /// One slot of a lesson pair, by pair index.
    Slot(usize, SlotSide),
    /// A whole pair, by index.
    Pair(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotSide {
    Previous,
    New,
}

impl Finding {
    pub fn new(severity: Severity, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Minor => write!(f, "MINOR"),
            Severity::Major => write!(f, "MAJOR"),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Field(name) => write!(f, "{}", name),
            Location::Slot(index, SlotSide::Previous) => {
                write!(f, "lesson-pairs[{}].lesson-1", index)
            }
            Location::Slot(index, SlotSide::New) => write!(f, "lesson-pairs[{}].lesson-2", index),
            Location::Pair(index) => write!(f, "lesson-pairs[{}]", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Major > Severity::Minor);
        assert!(Severity::Minor > Severity::Info);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Field("change-info").to_string(), "change-info");
        assert_eq!(
            Location::Slot(2, SlotSide::New).to_string(),
            "lesson-pairs[2].lesson-2"
        );
        assert_eq!(Location::Pair(0).to_string(), "lesson-pairs[0]");
    }
}
