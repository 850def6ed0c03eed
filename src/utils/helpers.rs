//! Helper utility functions

use crate::models::ReportContext;

/// Sanitize free text for use in filenames
pub fn slugify(text: &str) -> String {
    let slug: String = text
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if slug.is_empty() {
        "report".to_string()
    } else {
        slug
    }
}

/// Default output filename for a report: `<slug>-<YYYY-MM-DD>.html`
pub fn default_report_filename(context: &ReportContext) -> String {
    format!(
        "{}-{}.html",
        slugify(&context.change_info),
        context.day_date.format("%Y-%m-%d")
    )
}
