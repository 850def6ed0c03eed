//! Context payload analysis
//!
//! Lints a validated context for problems worth telling the caller about
//! before the report goes out. Findings never fail a render; strict callers
//! reject payloads with `Major` findings.

use crate::models::{Finding, Lesson, Location, ReportContext, Severity, SlotSide};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "8:00", "09:00", or a range like "09:00 - 09:45".
    static ref TIME_SHAPE: Regex =
        Regex::new(r"^\d{1,2}:\d{2}(\s*-\s*\d{1,2}:\d{2})?$").unwrap();
}

/// Analyze a context payload and collect findings.
///
/// The context is inspected in isolation: no schedule diffing, no pairing
/// decisions. Whatever the upstream comparison produced is taken as given.
pub fn analyze_context(context: &ReportContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    if context.change_info.trim().is_empty() {
        findings.push(
            Finding::new(
                Severity::Major,
                Location::Field("change-info"),
                "Change summary is blank; rendering will be refused",
            )
            .with_suggestion("Supply a one-line description of what changed"),
        );
    }

    if context.lesson_pairs.is_empty() {
        findings.push(Finding::new(
            Severity::Info,
            Location::Field("lesson-pairs"),
            "No lesson pairs; the report will contain a header-only table",
        ));
    }

    for (index, pair) in context.lesson_pairs.iter().enumerate() {
        if pair.is_empty() {
            findings.push(Finding::new(
                Severity::Info,
                Location::Pair(index),
                "Both slots are empty; the row renders two placeholders",
            ));
            continue;
        }

        if let Some(lesson) = &pair.previous {
            analyze_lesson(lesson, index, SlotSide::Previous, &mut findings);
        }
        if let Some(lesson) = &pair.new {
            analyze_lesson(lesson, index, SlotSide::New, &mut findings);
        }
    }

    log::debug!("analysis produced {} finding(s)", findings.len());
    findings
}

fn analyze_lesson(lesson: &Lesson, index: usize, side: SlotSide, findings: &mut Vec<Finding>) {
    let location = || Location::Slot(index, side);

    if lesson.name.trim().is_empty() {
        findings.push(Finding::new(
            Severity::Major,
            location(),
            "Lesson name is blank",
        ));
    }

    if !TIME_SHAPE.is_match(lesson.time.trim()) {
        findings.push(
            Finding::new(
                Severity::Minor,
                location(),
                format!("Unusual time value {:?}", lesson.time),
            )
            .with_suggestion("Expected \"H:MM\", \"HH:MM\", or a \"HH:MM - HH:MM\" range"),
        );
    }

    if lesson.teacher.trim().is_empty() {
        findings.push(Finding::new(
            Severity::Minor,
            location(),
            "Teacher is blank",
        ));
    }

    if lesson.classroom.trim().is_empty() {
        findings.push(Finding::new(
            Severity::Minor,
            location(),
            "Classroom is blank",
        ));
    }
}

/// True when any finding is `Major`.
pub fn has_major_findings(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Major)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LessonPair;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn context() -> ReportContext {
        ReportContext::new(
            "Changes detected",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_clean_payload_yields_no_findings() {
        let context = context().with_pair(LessonPair::new(
            None,
            Some(Lesson::new("09:00", "Math", "Ms. Lee", "101")),
        ));
        assert!(analyze_context(&context).is_empty());
    }

    #[test]
    fn test_empty_pairs_is_reported_as_info() {
        let findings = analyze_context(&context());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(!has_major_findings(&findings));
    }

    #[test]
    fn test_blank_name_is_major() {
        let context = context().with_pair(LessonPair::new(
            Some(Lesson::new("09:00", "", "Ms. Lee", "101")),
            None,
        ));
        let findings = analyze_context(&context);
        assert!(has_major_findings(&findings));
        assert_eq!(findings[0].location, Location::Slot(0, SlotSide::Previous));
    }

    #[test_case("09:00", true ; "hhmm")]
    #[test_case("8:05", true ; "single digit hour")]
    #[test_case("09:00 - 09:45", true ; "range with spaces")]
    #[test_case("09:00-09:45", true ; "range no spaces")]
    #[test_case("morning", false ; "word")]
    #[test_case("9 o'clock", false ; "nine o clock")]
    fn test_time_shape(time: &str, ok: bool) {
        let context = context().with_pair(LessonPair::new(
            Some(Lesson::new(time, "Math", "Ms. Lee", "101")),
            None,
        ));
        let findings = analyze_context(&context);
        assert_eq!(findings.is_empty(), ok, "time {:?}", time);
        if !ok {
            assert_eq!(findings[0].severity, Severity::Minor);
        }
    }

    #[test]
    fn test_both_empty_pair_is_info_only() {
        let context = context().with_pair(LessonPair::default());
        let findings = analyze_context(&context);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].location, Location::Pair(0));
    }
}
