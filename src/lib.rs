//! Lesson-plan change report renderer
//!
//! A library for turning schedule change summaries into self-contained HTML
//! documents: a two-column table comparing previous and new lessons, with
//! cancellation markers. Handles context parsing, payload linting, and
//! rendering. Producing the change summary itself (scraping schedules,
//! diffing plans, pairing lessons) is someone else's job.

pub mod analyzer;
pub mod error;
pub mod models;
pub mod parser;
pub mod renderer;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

pub use analyzer::analyze_context;
pub use error::ReportError;
pub use models::{Finding, Lesson, LessonPair, ReportContext, ReportOutcome, Severity};
pub use renderer::render;

use anyhow::Result;
use std::path::Path;

/// Main entry point: load a context document, lint it, render the report.
///
/// Writes nothing; callers decide where the document goes.
pub fn generate_report(input_path: &Path, options: ReportOptions) -> Result<ReportOutcome> {
    // 1. Load and validate the context document
    let context = parser::load_context(input_path)?;

    // 2. Lint the payload
    let findings = analyzer::analyze_context(&context);

    if options.strict && analyzer::has_major_findings(&findings) {
        anyhow::bail!(
            "context document has {} finding(s), including major ones; refusing to render in strict mode",
            findings.len()
        );
    }

    // 3. Render
    let html = renderer::render(&context)?;

    Ok(ReportOutcome {
        context,
        findings,
        html,
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Refuse to render when the analyzer reports a `Major` finding.
    pub strict: bool,
}
